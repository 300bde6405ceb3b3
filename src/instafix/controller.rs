//! # Application Controller
//!
//! The controller owns everything a session needs: the query text, the fix
//! currently on screen, the last error, the saved fixes and the theme. UIs
//! drive it through the operations below and read state back; nothing here
//! prints or knows about terminals.
//!
//! ## Session states
//!
//! ```text
//!            submit                 ok
//!   Idle ──────────────▶ Submitting ─────▶ Displaying
//!    ▲                       │  ▲              │
//!    │ new_fix (any state)   │  │ regenerate   │
//!    │                  err  ▼  │              │
//!    └──────────────────── Failed ◀────────────┘
//! ```
//!
//! ## In-flight requests
//!
//! Submission is split in two so event-driven UIs can keep handling input while
//! a request is out: [`Controller::begin_submit`] hands out a [`Ticket`], and
//! [`Controller::finish_submit`] commits the outcome. Each ticket remembers the
//! generation it was issued in; `new_fix` and every new submission bump the
//! generation, so a reply that arrives late is dropped instead of overwriting
//! state the user already moved on from. [`Controller::submit`] does both halves
//! for callers that simply await.

use crate::error::Result;
use crate::model::{FixId, FixPayload, FixResult, Theme};
use crate::saved::{FixStore, Toggled};
use crate::service::FixGenerator;
use crate::store::Storage;
use crate::theme;

/// Shown for every failed submission; the cause only goes to the log.
pub const GENERIC_ERROR: &str = "Something went wrong. Please check your connection or try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Displaying,
    Failed,
}

/// Proof that a submission was started, redeemed by `finish_submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    query: String,
}

impl Ticket {
    /// The trimmed text to send to the generator.
    pub fn query(&self) -> &str {
        &self.query
    }
}

pub struct Controller<G: FixGenerator, S: Storage> {
    generator: G,
    store: FixStore<S>,
    theme: Theme,
    phase: Phase,
    query: String,
    result: Option<FixResult>,
    error: Option<String>,
    generation: u64,
}

impl<G: FixGenerator, S: Storage> Controller<G, S> {
    pub fn new(generator: G, store: FixStore<S>, theme: Theme) -> Self {
        Self {
            generator,
            store,
            theme,
            phase: Phase::Idle,
            query: String::new(),
            result: None,
            error: None,
            generation: 0,
        }
    }

    /// Load saved fixes and the theme preference from `storage`.
    pub fn open(generator: G, storage: S) -> Self {
        let theme = theme::load_theme(&storage);
        Self::new(generator, FixStore::load(storage), theme)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn result(&self) -> Option<&FixResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn saved(&self) -> &FixStore<S> {
        &self.store
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Start a submission. Returns `None` (and changes nothing) when the query is
    /// blank or another request is still in flight.
    pub fn begin_submit(&mut self, query: &str) -> Option<Ticket> {
        let trimmed = query.trim();
        if trimmed.is_empty() || self.phase == Phase::Submitting {
            return None;
        }

        self.generation += 1;
        self.query = query.to_string();
        self.result = None;
        self.error = None;
        self.phase = Phase::Submitting;

        Some(Ticket {
            generation: self.generation,
            query: trimmed.to_string(),
        })
    }

    /// Commit the outcome of a submission. Returns `false` when the ticket is
    /// stale and the outcome was discarded.
    pub fn finish_submit(&mut self, ticket: Ticket, outcome: Result<FixPayload>) -> bool {
        if ticket.generation != self.generation || self.phase != Phase::Submitting {
            log::debug!(
                "Discarding stale response for generation {} (current {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        match outcome {
            Ok(payload) => {
                self.result = Some(FixResult::new(ticket.query, payload));
                self.phase = Phase::Displaying;
            }
            Err(e) => {
                log::error!("Fix generation failed: {}", e);
                self.error = Some(GENERIC_ERROR.to_string());
                self.phase = Phase::Failed;
            }
        }
        true
    }

    /// Submit `query` and wait for the reply. Returns `false` if the submission
    /// was ignored (blank query or request already in flight).
    pub async fn submit(&mut self, query: &str) -> bool {
        let Some(ticket) = self.begin_submit(query) else {
            return false;
        };
        let outcome = self.generator.generate_fix(ticket.query()).await;
        self.finish_submit(ticket, outcome)
    }

    /// Ask again with the same query text. Only from `Displaying` or `Failed`.
    pub fn begin_regenerate(&mut self) -> Option<Ticket> {
        match self.phase {
            Phase::Displaying | Phase::Failed => {
                let query = self.query.clone();
                self.begin_submit(&query)
            }
            Phase::Idle | Phase::Submitting => None,
        }
    }

    pub async fn regenerate(&mut self) -> bool {
        let Some(ticket) = self.begin_regenerate() else {
            return false;
        };
        let outcome = self.generator.generate_fix(ticket.query()).await;
        self.finish_submit(ticket, outcome)
    }

    /// Save or unsave the displayed fix. `None` when nothing is displayed.
    pub fn save(&mut self) -> Result<Option<Toggled>> {
        if self.phase != Phase::Displaying {
            return Ok(None);
        }
        match &self.result {
            Some(result) => self.store.toggle(result).map(Some),
            None => Ok(None),
        }
    }

    /// Back to a blank session. Any request still in flight is orphaned.
    pub fn new_fix(&mut self) {
        self.generation += 1;
        self.query.clear();
        self.result = None;
        self.error = None;
        self.phase = Phase::Idle;
    }

    /// Show a saved fix without asking the model. Returns `false` for unknown ids.
    pub fn load_saved(&mut self, id: &FixId) -> bool {
        let Some(item) = self.store.find_by_id(id).cloned() else {
            return false;
        };
        self.generation += 1;
        self.query = item.query.clone();
        self.result = Some(item);
        self.error = None;
        self.phase = Phase::Displaying;
        true
    }

    /// Remove a saved fix. The displayed fix, if it is the same one, stays on
    /// screen; it just stops being saved.
    pub fn delete_saved(&mut self, id: &FixId) -> Result<()> {
        self.store.remove(id)
    }

    pub fn is_current_saved(&self) -> bool {
        self.result
            .as_ref()
            .is_some_and(|result| self.store.contains(&result.id))
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<Theme> {
        theme::save_theme(self.store.storage_mut(), theme)?;
        self.theme = theme;
        Ok(theme)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.set_theme(self.theme.toggled())
    }
}
