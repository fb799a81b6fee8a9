//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: Top status line with backend URL and status
//! - `ResultsPane`: Draws a `ResultView` built from the latest outcome
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `BoundedTextArea`: Word-capped, auto-growing multi-line input
//! - `WordField`: Single-line input for the word to define
//! - `ResultsState`: Scroll position of the results pane
//!
//! ## Co-location of Concerns
//!
//! Each component file holds its state types, event types, rendering,
//! event handling and tests.
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, not by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! let view = ResultView::build(&app.outcome, app.mode);
//! ResultsPane { view: &view, state: &mut tui.results }.render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status line)
//! ├── results.rs       (Result view model + scrollable pane)
//! ├── word_field.rs    (Single-line word input)
//! └── text_area/       (Word-capped multi-line input)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod results;
pub mod text_area;
pub mod word_field;
pub use results::{ResultView, ResultsPane, ResultsState};
pub use text_area::{BoundedTextArea, Emphasis, InputEvent};
pub use word_field::{WORD_FIELD_HEIGHT, WordField};
