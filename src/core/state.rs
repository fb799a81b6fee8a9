//! # Application State
//!
//! Core page state for Scribe. Domain logic only, no TUI-specific types.
//! Presentation state (focus, cursors, scroll offsets) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── analyzer: Arc<dyn Analyzer>   // backend client
//! ├── form: FormState               // style text, grammar text, word
//! ├── outcome: Outcome              // latest backend interaction
//! ├── mode: Mode                    // which action produced `outcome`
//! ├── request_seq: u64              // sequence number of the latest submit
//! ├── discard_stale_responses: bool // drop responses older than request_seq
//! ├── max_words: usize              // word cap for the text inputs
//! └── status_message: String        // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::backend::{AnalysisResult, Analyzer, Mode};
use crate::core::config::ResolvedConfig;

/// Shown while a request is in flight.
pub const WAITING_MESSAGE: &str = "⏳ Waiting for server...";
/// Shown for any transport or parse failure, whichever section triggered it.
pub const UNREACHABLE_MESSAGE: &str = "❌ Could not reach backend. Is FastAPI running?";

/// The three form inputs. Empty at start, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub style_text: String,
    pub grammar_text: String,
    pub word: String,
}

/// Tagged state of the latest backend interaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Outcome {
    #[default]
    Idle,
    Pending,
    Error(String),
    Success(AnalysisResult),
}

pub struct App {
    pub analyzer: Arc<dyn Analyzer>,
    pub form: FormState,
    pub outcome: Outcome,
    pub mode: Mode,
    pub request_seq: u64,
    pub discard_stale_responses: bool,
    pub max_words: usize,
    pub status_message: String,
}

impl App {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            analyzer,
            form: FormState::default(),
            outcome: Outcome::Idle,
            mode: Mode::None,
            request_seq: 0,
            discard_stale_responses: true,
            max_words: crate::core::config::DEFAULT_MAX_WORDS,
            status_message: String::from("Ready"),
        }
    }

    pub fn from_config(analyzer: Arc<dyn Analyzer>, config: &ResolvedConfig) -> Self {
        Self {
            discard_stale_responses: config.discard_stale_responses,
            max_words: config.max_words,
            ..Self::new(analyzer)
        }
    }

    pub fn is_pending(&self) -> bool {
        self.outcome == Outcome::Pending
    }
}
