//! Localized experience content for a portfolio site.
//!
//! Rows are read from a [`ContentRepository`](repository::ContentRepository),
//! normalized at the boundary ([`content`]), resolved per language
//! ([`localizer`]) and held by an [`ExperienceLoader`](loader::ExperienceLoader)
//! for the [`section`] renderer model.

pub mod config;
pub mod content;
pub mod fixture;
pub mod i18n;
pub mod loader;
pub mod localizer;
pub mod metrics;
pub mod repository;
pub mod section;
pub mod supabase;
