//! Presentation model of the experience section.
//!
//! Turns a [`SectionState`] into what a renderer draws: cards in display
//! order, the tech stack carousel, pass-through widget props, and a plain-text
//! rendering used by the CLI.

use crate::i18n::{Language, LanguageStrings};
use crate::loader::SectionState;
use crate::localizer::ExperienceViewModel;
use serde::Serialize;

/// Album shown by the photo widget next to the experience section.
pub const ABOUT_ALBUM_KEY: &str = "about-widget";

pub const EDUCATION_INSTITUTION: &str = "Tecnológico de Monterrey";

// ==================== Cards ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceCard {
    pub experience: ExperienceViewModel,
    /// Exactly one card per non-empty list carries the current marker.
    pub is_current: bool,
}

/// Cards in display order: the loaded list reversed.
///
/// The card in the last display position, which is the first row in
/// repository order, is marked current.
pub fn display_cards(experiences: &[ExperienceViewModel]) -> Vec<ExperienceCard> {
    let total = experiences.len();

    experiences
        .iter()
        .rev()
        .enumerate()
        .map(|(index, experience)| ExperienceCard {
            experience: experience.clone(),
            is_current: index + 1 == total,
        })
        .collect()
}

// ==================== Tech Stack ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechCategory {
    /// Key into [`LanguageStrings::t`]
    pub title_key: &'static str,
    pub techs: &'static [&'static str],
}

impl TechCategory {
    pub fn title(&self, strings: &LanguageStrings) -> &'static str {
        strings.t(self.title_key)
    }
}

pub const TECH_CATEGORIES: [TechCategory; 4] = [
    TechCategory {
        title_key: "coreTech",
        techs: &["Next.js", "React", "TypeScript", "SwiftUI"],
    },
    TechCategory {
        title_key: "systemsLogic",
        techs: &["Node.js", "Python", "C++", "Clojure", "Racket"],
    },
    TechCategory {
        title_key: "dataInfra",
        techs: &["SQL / Databases", "APIs (REST)", "Auth (JWT)"],
    },
    TechCategory {
        title_key: "creativeSimulation",
        techs: &["Unity", "WebGL / Three.js", "Simulation & Modeling"],
    },
];

/// One-category-at-a-time view of the tech stack (narrow layouts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechCarousel {
    index: usize,
    len: usize,
}

impl Default for TechCarousel {
    fn default() -> Self {
        Self::new(TECH_CATEGORIES.len())
    }
}

impl TechCarousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = if self.index + 1 == self.len { 0 } else { self.index + 1 };
        }
        self.index
    }

    pub fn previous(&mut self) -> usize {
        if self.len > 0 {
            self.index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
        }
        self.index
    }

    /// Jump to a dot. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn current<'a>(&self, categories: &'a [TechCategory]) -> Option<&'a TechCategory> {
        categories.get(self.index)
    }
}

// ==================== Widgets ====================

/// Track metadata owned by the audio player; passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NowPlayingTrack {
    pub title: String,
    pub artist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

/// Now-playing widget props. Transport callbacks stay with the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlaybackProps {
    pub track: Option<NowPlayingTrack>,
    pub is_playing: bool,
    /// Elapsed seconds
    pub current_time: f64,
    /// Total seconds
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoWidgetProps {
    pub album_key: &'static str,
}

impl Default for PhotoWidgetProps {
    fn default() -> Self {
        Self {
            album_key: ABOUT_ALBUM_KEY,
        }
    }
}

// ==================== Section ====================

/// Everything a renderer needs for one frame of the section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub language: Language,
    pub cards: Vec<ExperienceCard>,
    pub load_error: Option<String>,
    pub tech_categories: Vec<TechCategory>,
    pub playback: PlaybackProps,
    pub photo_widget: PhotoWidgetProps,
}

impl SectionView {
    pub fn build(state: &SectionState, language: Language, playback: PlaybackProps) -> Self {
        Self {
            language,
            cards: display_cards(state.experiences_to_render()),
            load_error: state.load_error.clone(),
            tech_categories: TECH_CATEGORIES.to_vec(),
            playback,
            photo_widget: PhotoWidgetProps::default(),
        }
    }

    pub fn strings(&self) -> &'static LanguageStrings {
        self.language.strings()
    }
}

/// `m:ss`, clamping negative and non-finite values to zero.
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Render the section as plain text.
pub fn render_text(view: &SectionView) -> String {
    let strings = view.strings();
    let mut out = String::new();

    out.push_str(&strings.background.to_uppercase());
    out.push('\n');
    out.push_str(strings.experience);
    out.push('\n');
    out.push_str(strings.experience_intro);
    out.push_str("\n\n");

    out.push_str(&format!(
        "{}: {} ({})\n\n",
        strings.education, EDUCATION_INSTITUTION, strings.degree
    ));

    for category in &view.tech_categories {
        out.push_str(&format!(
            "{}: {}\n",
            category.title(strings),
            category.techs.join(", ")
        ));
    }
    out.push('\n');

    if let Some(track) = &view.playback.track {
        let label = if view.playback.is_playing {
            strings.now_playing
        } else {
            strings.paused
        };
        out.push_str(&format!(
            "{}: {} - {} [{} / {}]\n\n",
            label,
            track.title,
            track.artist,
            format_clock(view.playback.current_time),
            format_clock(view.playback.duration)
        ));
    }

    if view.cards.is_empty() && view.load_error.is_none() {
        out.push_str(strings.no_experiences);
        out.push('\n');
    }

    for card in &view.cards {
        let experience = &card.experience;
        if card.is_current {
            out.push_str(&format!("{}  ● {}\n", experience.period, strings.current));
        } else {
            out.push_str(&format!("{}\n", experience.period));
        }
        out.push_str(&experience.role);
        out.push('\n');
        if let Some(focus) = &experience.focus {
            out.push_str(&format!("  {}\n", focus));
        }
        if !experience.description.is_empty() {
            out.push_str(&format!("  {}\n", experience.description));
        }
        if !experience.skills.is_empty() {
            out.push_str(&format!("  [{}]\n", experience.skills.join("] [")));
        }
        out.push('\n');
    }

    if let Some(error) = &view.load_error {
        out.push_str(error);
        out.push('\n');
    }

    out
}
