//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! ```text
//! crossterm ──► TuiEvent ──► handle_event ──► focused input ──► Action::Edit
//!                                 │                      └────► Action::Submit
//!                                 └──► ResultsState (scroll)
//!
//! tokio task ──► mpsc ──► Action::ResponseReceived ──► update
//! ```
//!
//! ## Redraw Strategy
//!
//! While a request is pending the loop redraws every ~120ms so the spinner
//! moves. Otherwise it sleeps up to 500ms and only redraws on input,
//! resize, or a response arriving.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::backend::{AnalysisRequest, Analyzer, HttpAnalyzer, Mode};
use crate::core::action::{Action, Effect, Field, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{BoundedTextArea, InputEvent, ResultsState, WordField};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which section receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Style,
    Grammar,
    Word,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Style => Focus::Grammar,
            Focus::Grammar => Focus::Word,
            Focus::Word => Focus::Style,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Style => Focus::Word,
            Focus::Grammar => Focus::Style,
            Focus::Word => Focus::Grammar,
        }
    }

    /// Mode submitted by Enter in this section.
    pub fn mode(self) -> Mode {
        match self {
            Focus::Style => Mode::Style,
            Focus::Grammar => Mode::Grammar,
            Focus::Word => Mode::Define,
        }
    }

    fn field(self) -> Field {
        match self {
            Focus::Style => Field::StyleText,
            Focus::Grammar => Field::GrammarText,
            Focus::Word => Field::Word,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub style_input: BoundedTextArea,
    pub grammar_input: BoundedTextArea,
    pub word_input: WordField,
    pub results: ResultsState,
    pub focus: Focus,
}

impl TuiState {
    pub fn new(max_words: usize) -> Self {
        let placeholder = format!("Paste up to {max_words} words...");
        let mut state = Self {
            style_input: BoundedTextArea::new("1) Style Coach", placeholder.as_str(), max_words)
                .with_hint("[Enter] ✨ Improve Style"),
            grammar_input: BoundedTextArea::new("2) Grammar Checker", placeholder, max_words)
                .with_hint("[Enter] 🛠 Check Grammar"),
            word_input: WordField::new("3) Define a Word", "Enter a word...")
                .with_hint("[Enter] 📖 Define"),
            results: ResultsState::new(),
            focus: Focus::Style,
        };
        state.set_focus(Focus::Style);
        state
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.style_input.focused = focus == Focus::Style;
        self.grammar_input.focused = focus == Focus::Grammar;
        self.word_input.focused = focus == Focus::Word;
    }

    fn focused_input(&mut self, event: &TuiEvent) -> Option<InputEvent> {
        match self.focus {
            Focus::Style => self.style_input.handle_event(event),
            Focus::Grammar => self.grammar_input.handle_event(event),
            Focus::Word => self.word_input.handle_event(event),
        }
    }
}

/// Translate one terminal event into state changes, returning the effect
/// the event loop must carry out.
pub(crate) fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => update(app, Action::Quit),
        TuiEvent::Resize => Effect::None,
        TuiEvent::FocusNext => {
            tui.set_focus(tui.focus.next());
            Effect::None
        }
        TuiEvent::FocusPrev => {
            tui.set_focus(tui.focus.prev());
            Effect::None
        }
        TuiEvent::SubmitMode(mode) => submit(app, tui, *mode),
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.results.handle_event(event);
            Effect::None
        }
        _ => match tui.focused_input(event) {
            Some(InputEvent::Changed(value)) => update(app, Action::Edit(tui.focus.field(), value)),
            Some(InputEvent::Submit) => {
                let mode = tui.focus.mode();
                submit(app, tui, mode)
            }
            None => Effect::None,
        },
    }
}

fn submit(app: &mut App, tui: &mut TuiState, mode: Mode) -> Effect {
    let effect = update(app, Action::Submit(mode));
    if matches!(effect, Effect::SpawnRequest { .. }) {
        tui.results.reset_scroll();
    }
    effect
}

/// Apply an action from a background task. The results pane only jumps
/// back to the top when the outcome it shows was replaced.
fn receive(app: &mut App, tui: &mut TuiState, action: Action) {
    let previous = app.outcome.clone();
    update(app, action);
    if app.outcome != previous {
        tui.results.reset_scroll();
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            // ratatui resets the blink timer on every draw
            SetCursorStyle::SteadyBlock,
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape,
            Hide
        );
    }
}

pub fn build_analyzer(config: &ResolvedConfig) -> Arc<dyn Analyzer> {
    Arc::new(HttpAnalyzer::new(config.backend_url.clone()))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let analyzer = build_analyzer(&config);
    let mut app = App::from_config(analyzer, &config);
    let mut tui = TuiState::new(app.max_words);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true;

    loop {
        if app.is_pending() {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 8.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if app.is_pending() {
            Duration::from_millis(120)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain everything queued before the next draw (pastes arrive in bursts)
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match handle_event(&mut app, &mut tui, &event) {
                Effect::Quit => {
                    should_quit = true;
                    break;
                }
                Effect::SpawnRequest { seq, request } => {
                    spawn_request(app.analyzer.clone(), seq, request, tx.clone());
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            receive(&mut app, &mut tui, action);
        }
    }

    ratatui::restore();
    Ok(())
}

fn spawn_request(
    analyzer: Arc<dyn Analyzer>,
    seq: u64,
    request: AnalysisRequest,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning {} request #{}", request.mode().label(), seq);
    tokio::spawn(async move {
        let started = Instant::now();
        let result = analyzer.analyze(&request).await;
        debug!(
            "Request #{} finished in {}ms (ok={})",
            seq,
            started.elapsed().as_millis(),
            result.is_ok()
        );
        if tx.send(Action::ResponseReceived { seq, result }).is_err() {
            warn!("Failed to deliver response #{}: receiver dropped", seq);
        }
    });
}
