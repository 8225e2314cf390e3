//! Fetch-and-localize orchestration for the experience section.
//!
//! Every load takes a [`LoadTicket`] from a generation counter. Starting a
//! newer load or tearing the section down advances the counter, and a load
//! only writes to [`SectionState`] while its ticket is still the current
//! generation. Superseded requests still complete remotely; their results are
//! dropped here.

use crate::i18n::Language;
use crate::localizer::{localize_rows, ExperienceViewModel};
use crate::metrics::LoadMetrics;
use crate::repository::{ContentRepository, RepositoryError};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Message shown when no content backend is configured.
pub const NOT_CONFIGURED_MESSAGE: &str = "Supabase not configured";

#[derive(Debug, Error)]
pub enum LoadError {
    /// Detected before querying; no request is made.
    #[error("{}", NOT_CONFIGURED_MESSAGE)]
    NotConfigured,

    #[error(transparent)]
    Fetch(#[from] RepositoryError),
}

/// What the renderer sees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionState {
    /// `None` until the first successful load.
    pub experiences: Option<Vec<ExperienceViewModel>>,
    pub load_error: Option<String>,
    /// Language the current `experiences` were resolved for.
    pub language: Option<Language>,
}

impl SectionState {
    /// Loaded experiences, or an empty slice before the first load.
    pub fn experiences_to_render(&self) -> &[ExperienceViewModel] {
        self.experiences.as_deref().unwrap_or_default()
    }
}

/// Proof that a load was started at a given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// How a load ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { count: usize },
    Failed { message: String },
    /// A newer load or teardown won; nothing was written.
    Superseded,
}

struct Inner {
    generation: u64,
    torn_down: bool,
    state: SectionState,
}

impl Inner {
    fn is_current(&self, ticket: LoadTicket) -> bool {
        !self.torn_down && self.generation == ticket.0
    }
}

pub struct ExperienceLoader {
    repository: Arc<dyn ContentRepository>,
    inner: Mutex<Inner>,
    metrics: LoadMetrics,
}

impl ExperienceLoader {
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self {
            repository,
            inner: Mutex::new(Inner {
                generation: 0,
                torn_down: false,
                state: SectionState::default(),
            }),
            metrics: LoadMetrics::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // State is replaced wholesale, so a poisoned guard still holds a
        // consistent value.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current state, cloned.
    pub fn snapshot(&self) -> SectionState {
        self.lock().state.clone()
    }

    pub fn metrics(&self) -> &LoadMetrics {
        &self.metrics
    }

    /// Start a new generation, superseding every load in flight.
    pub fn begin(&self) -> LoadTicket {
        let mut inner = self.lock();
        inner.generation += 1;
        self.metrics.record_started();
        LoadTicket(inner.generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.lock().is_current(ticket)
    }

    /// Discard every pending and future load result.
    pub fn teardown(&self) {
        let mut inner = self.lock();
        inner.torn_down = true;
        inner.generation += 1;
        debug!("Experience section torn down at generation {}", inner.generation);
    }

    pub fn is_torn_down(&self) -> bool {
        self.lock().torn_down
    }

    /// Fetch and localize experiences for `language`, superseding older loads.
    pub async fn load(&self, language: Language) -> LoadOutcome {
        let ticket = self.begin();
        self.run(ticket, language).await
    }

    /// Run a load for a ticket obtained from [`begin`](Self::begin).
    pub async fn run(&self, ticket: LoadTicket, language: Language) -> LoadOutcome {
        if !self.repository.is_configured() {
            warn!("Content repository not configured, skipping experience query");
            return self.fail(ticket, LoadError::NotConfigured);
        }

        debug!("Loading experiences for '{}' (generation {})", language, ticket.0);
        let result = self.repository.fetch_experience_rows().await;

        if !self.is_current(ticket) {
            return self.superseded(ticket);
        }

        let rows = match result {
            Ok(rows) => rows,
            Err(e) => return self.fail(ticket, LoadError::from(e)),
        };

        let experiences = localize_rows(&rows, language);
        let count = experiences.len();

        let mut inner = self.lock();
        if !inner.is_current(ticket) {
            drop(inner);
            return self.superseded(ticket);
        }
        inner.state = SectionState {
            experiences: Some(experiences),
            load_error: None,
            language: Some(language),
        };
        drop(inner);

        self.metrics.record_applied();
        info!("Loaded {} experiences in '{}'", count, language);
        LoadOutcome::Applied { count }
    }

    /// Record an error without touching the loaded experiences.
    fn fail(&self, ticket: LoadTicket, error: LoadError) -> LoadOutcome {
        let message = error.to_string();

        let mut inner = self.lock();
        if !inner.is_current(ticket) {
            drop(inner);
            return self.superseded(ticket);
        }
        inner.state.load_error = Some(message.clone());
        drop(inner);

        self.metrics.record_failed();
        warn!("Failed to load experiences: {}", message);
        LoadOutcome::Failed { message }
    }

    fn superseded(&self, ticket: LoadTicket) -> LoadOutcome {
        self.metrics.record_superseded();
        debug!("Discarding result of superseded load (generation {})", ticket.0);
        LoadOutcome::Superseded
    }
}

/// Re-run `loader` whenever the observed language changes.
///
/// The initial value triggers the first load. Each load is spawned so a newer
/// language never waits for an older request. When every sender is dropped
/// the loader is torn down and the task ends.
pub fn watch_language(
    loader: Arc<ExperienceLoader>,
    mut languages: watch::Receiver<Language>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut last: Option<Language> = None;

        loop {
            let language = *languages.borrow_and_update();

            if last != Some(language) {
                last = Some(language);
                // Ticket is taken here so spawn order cannot reorder generations
                let ticket = loader.begin();
                let task_loader = Arc::clone(&loader);
                tokio::spawn(async move {
                    task_loader.run(ticket, language).await;
                });
            }

            if languages.changed().await.is_err() {
                break;
            }
        }

        loader.teardown();
    })
}
