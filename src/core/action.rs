//! # Actions
//!
//! Everything that can happen in Scribe becomes an `Action`.
//! User types into the grammar box? That's `Action::Edit(Field::GrammarText, text)`.
//! Backend responds? That's `Action::ResponseReceived { seq, result }`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing any I/O the caller must perform.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use chrono::Local;
use log::{debug, info, warn};

use crate::backend::{AnalysisRequest, AnalysisResult, BackendError, Mode};
use crate::core::state::{App, Outcome, UNREACHABLE_MESSAGE};

/// Which form input an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    StyleText,
    GrammarText,
    Word,
}

#[derive(Debug)]
pub enum Action {
    /// An input accepted an edit; carries the full new value.
    Edit(Field, String),
    /// Run the analysis for the given mode using the current form values.
    Submit(Mode),
    /// A backend request settled.
    ResponseReceived {
        seq: u64,
        result: Result<Option<AnalysisResult>, BackendError>,
    },
    Quit,
}

/// Work the caller must do after `update()`.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    SpawnRequest { seq: u64, request: AnalysisRequest },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Edit(field, value) => {
            match field {
                Field::StyleText => app.form.style_text = value,
                Field::GrammarText => app.form.grammar_text = value,
                Field::Word => app.form.word = value,
            }
            Effect::None
        }
        Action::Submit(mode) => {
            let request = match mode {
                Mode::Style => AnalysisRequest::Style {
                    text: app.form.style_text.clone(),
                },
                Mode::Grammar => AnalysisRequest::Grammar {
                    text: app.form.grammar_text.clone(),
                },
                Mode::Define => AnalysisRequest::Define {
                    word: app.form.word.clone(),
                },
                Mode::None => return Effect::None,
            };

            app.mode = mode;
            app.outcome = Outcome::Pending;
            app.request_seq += 1;
            app.status_message = format!("Waiting for {}...", mode.label());
            info!("Submitting {} request (seq={})", mode.label(), app.request_seq);

            Effect::SpawnRequest {
                seq: app.request_seq,
                request,
            }
        }
        Action::ResponseReceived { seq, result } => {
            if app.discard_stale_responses && seq != app.request_seq {
                debug!(
                    "Dropping stale response (seq={}, latest={})",
                    seq, app.request_seq
                );
                return Effect::None;
            }

            // A kept stale payload was read for its own mode; show it under the current one
            let result = if seq == app.request_seq {
                result
            } else {
                result.map(|payload| payload.and_then(|p| p.reinterpret(app.mode)))
            };

            let now = Local::now().format("%H:%M:%S");
            app.outcome = match result {
                Ok(Some(payload)) => {
                    app.status_message = format!("{} result at {}", app.mode.label(), now);
                    Outcome::Success(payload)
                }
                Ok(None) => {
                    app.status_message = format!("Empty {} result at {}", app.mode.label(), now);
                    Outcome::Idle
                }
                Err(e) => {
                    warn!("Request seq={} failed: {}", seq, e);
                    app.status_message = format!("Request failed at {}", now);
                    Outcome::Error(UNREACHABLE_MESSAGE.to_string())
                }
            };
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
