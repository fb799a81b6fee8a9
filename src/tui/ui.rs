use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ResultView, ResultsPane, TitleBar, WORD_FIELD_HEIGHT};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Rows the results pane keeps even when the text areas are full.
pub const RESULTS_MIN_HEIGHT: u16 = 8;
const TITLE_HEIGHT: u16 = 1;
const HELP_HEIGHT: u16 = 1;

const HELP_TEXT: &str =
    "Tab/Shift+Tab: switch field  Enter: run  Ctrl+J: newline  F1/F2/F3: style/grammar/define  PgUp/PgDn: scroll  Esc: quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let area = frame.area();

    // Whatever the fixed rows leave is split between the two text areas
    let fixed = TITLE_HEIGHT + WORD_FIELD_HEIGHT + HELP_HEIGHT + RESULTS_MIN_HEIGHT;
    let per_area = area.height.saturating_sub(fixed) / 2;
    tui.style_input.set_height_budget(per_area);
    tui.grammar_input.set_height_budget(per_area);

    let style_height = tui.style_input.calculate_height(area.width);
    let grammar_height = tui.grammar_input.calculate_height(area.width);

    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(TITLE_HEIGHT),
        Length(style_height),
        Length(grammar_height),
        Length(WORD_FIELD_HEIGHT),
        Min(0),
        Length(HELP_HEIGHT),
    ]);
    let [title_area, style_area, grammar_area, word_area, results_area, help_area] =
        layout.areas(area);

    let mut title_bar = TitleBar::new(
        app.analyzer.base_url().to_string(),
        app.status_message.clone(),
        app.is_pending(),
    );
    title_bar.spinner_frame = spinner_frame;
    title_bar.render(frame, title_area);

    tui.style_input.render(frame, style_area);
    tui.grammar_input.render(frame, grammar_area);
    tui.word_input.render(frame, word_area);

    let view = ResultView::build(&app.outcome, app.mode);
    ResultsPane {
        view: &view,
        state: &mut tui.results,
    }
    .render(frame, results_area);

    frame.render_widget(
        Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray))),
        help_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{AnalysisResult, DefinitionResult, Mode};
    use crate::core::state::Outcome;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_shows_all_sections() {
        let app = test_app();
        let mut tui = TuiState::new(app.max_words);
        let text = draw(&app, &mut tui, 120, 40);

        assert!(text.contains("1) Style Coach"));
        assert!(text.contains("2) Grammar Checker"));
        assert!(text.contains("3) Define a Word"));
        assert!(text.contains("Results"));
        assert!(text.contains("No results yet."));
        assert_eq!(text.matches("0/1000 words").count(), 2);
    }

    #[test]
    fn test_draw_ui_renders_outcome_for_mode() {
        let mut app = test_app();
        app.mode = Mode::Define;
        app.outcome = Outcome::Success(AnalysisResult::Definition(DefinitionResult {
            word: Some("ephemeral".to_string()),
            synonyms: Some(vec!["transient".to_string(), "fleeting".to_string()]),
            ..Default::default()
        }));
        let mut tui = TuiState::new(app.max_words);
        let text = draw(&app, &mut tui, 120, 40);
        assert!(text.contains("Synonyms: transient, fleeting"));
    }

    #[test]
    fn test_draw_ui_survives_tiny_terminal() {
        let app = test_app();
        let mut tui = TuiState::new(app.max_words);
        draw(&app, &mut tui, 20, 6);
    }
}
