//! # Results Component
//!
//! Renders the latest backend outcome.
//!
//! Rendering happens in two steps:
//!
//! 1. [`ResultView::build`] turns `(Outcome, Mode)` into a view model. It is a
//!    pure function, so identical inputs always produce identical views.
//! 2. [`ResultsPane`] lays the view out inside a scrollable viewport.
//!
//! The mode decides how a payload is shown. A payload whose shape does not
//! match the current mode falls through to the empty placeholder.

use ratatui::Frame;
use ratatui::layout::{Constraint, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Cell, Padding, Paragraph, Row, Table, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::backend::{AnalysisResult, GrammarIssue, Mode};
use crate::core::state::{Outcome, WAITING_MESSAGE};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const NO_RESULTS: &str = "No results yet.";
pub const NO_CORRECTED_TEXT: &str = "No corrected text provided.";
pub const NO_ISSUES: &str = "No issues found 🎉";

/// Rows moved by one PageUp/PageDown.
const PAGE_SCROLL: u16 = 10;

/// What the results pane shows, independent of layout.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    /// Preformatted text shown verbatim (errors, waiting, raw strings).
    Message(String),
    Grammar {
        corrected_text: String,
        score: String,
        issues: Vec<GrammarIssue>,
    },
    Definition {
        word: String,
        part_of_speech: String,
        definition: String,
        example: String,
        level: String,
        synonyms: String,
    },
    Style {
        overall: String,
        readability_level: String,
        suggestions: Option<Vec<String>>,
    },
    Empty,
}

impl ResultView {
    pub fn build(outcome: &Outcome, mode: Mode) -> Self {
        let payload = match outcome {
            Outcome::Error(message) => return ResultView::Message(message.clone()),
            Outcome::Pending => return ResultView::Message(WAITING_MESSAGE.to_string()),
            Outcome::Idle => return ResultView::Empty,
            Outcome::Success(payload) => payload,
        };

        match (payload, mode) {
            (AnalysisResult::Text(text), _) => ResultView::Message(text.clone()),
            (AnalysisResult::Grammar(grammar), Mode::Grammar) => ResultView::Grammar {
                corrected_text: grammar
                    .corrected_text
                    .clone()
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| NO_CORRECTED_TEXT.to_string()),
                score: grammar.score.map(|s| s.to_string()).unwrap_or_default(),
                issues: grammar.issues.clone(),
            },
            (AnalysisResult::Definition(def), Mode::Define) => ResultView::Definition {
                word: def.word.clone().unwrap_or_default(),
                part_of_speech: def.part_of_speech.clone().unwrap_or_default(),
                definition: def.definition.clone().unwrap_or_default(),
                example: def.example.clone().unwrap_or_default(),
                level: def.level.clone().unwrap_or_default(),
                synonyms: def
                    .synonyms
                    .as_ref()
                    .map(|s| s.join(", "))
                    .unwrap_or_default(),
            },
            (AnalysisResult::Style(style), Mode::Style) => ResultView::Style {
                overall: style.overall.clone().unwrap_or_default(),
                readability_level: style.readability_level.clone().unwrap_or_default(),
                suggestions: style.high_level_suggestions.clone(),
            },
            _ => ResultView::Empty,
        }
    }
}

/// One vertically stacked piece of the laid-out view.
enum Piece<'a> {
    Text(Paragraph<'a>, u16),
    Table(Table<'a>, u16),
}

impl Piece<'_> {
    fn height(&self) -> u16 {
        match self {
            Piece::Text(_, h) | Piece::Table(_, h) => *h,
        }
    }
}

/// Row counts come from backend data; anything past `u16::MAX` is clipped.
fn rows(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX)
}

fn content_height(pieces: &[Piece]) -> u16 {
    pieces
        .iter()
        .fold(0u16, |total, piece| total.saturating_add(piece.height()))
}

fn labelled(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(value.to_string()),
    ])
}

fn paragraph(lines: Vec<Line<'static>>, width: u16) -> Piece<'static> {
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    let height = rows(paragraph.line_count(width));
    Piece::Text(paragraph, height)
}

/// Wrap a cell's text to its column so the row can grow to fit.
fn wrapped_cell(text: &str, width: u16, style: Style) -> (Cell<'static>, u16) {
    let lines: Vec<Line> = textwrap::wrap(text, (width as usize).max(1))
        .into_iter()
        .map(|l| Line::from(l.into_owned()))
        .collect();
    let height = rows(lines.len()).max(1);
    (Cell::from(Text::from(lines)).style(style), height)
}

fn issues_table(issues: &[GrammarIssue], width: u16) -> Piece<'static> {
    // Issue column gets half the width, Before/After a quarter each
    let spacing = 2;
    let usable = width.saturating_sub(spacing);
    let widths = [usable / 2, usable / 4, usable - usable / 2 - usable / 4];

    let header = Row::new(["Issue", "Before", "After"])
        .style(Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED));

    let mut total_height: u16 = 1;
    let rows: Vec<Row> = issues
        .iter()
        .map(|issue| {
            let (message, h1) = wrapped_cell(&issue.message, widths[0], Style::default());
            let (before, h2) = wrapped_cell(&issue.before, widths[1], Style::default().fg(Color::Red));
            let (after, h3) = wrapped_cell(&issue.after, widths[2], Style::default().fg(Color::Green));
            let height = h1.max(h2).max(h3);
            total_height = total_height.saturating_add(height);
            Row::new([message, before, after]).height(height)
        })
        .collect();

    let table = Table::new(rows, widths.map(Constraint::Length))
        .header(header)
        .column_spacing(1);
    Piece::Table(table, total_height)
}

fn layout(view: &ResultView, width: u16) -> Vec<Piece<'static>> {
    match view {
        ResultView::Message(text) => {
            let lines = text.lines().map(|l| Line::from(l.to_string())).collect();
            vec![paragraph(lines, width)]
        }
        ResultView::Empty => vec![paragraph(
            vec![Line::styled(NO_RESULTS, Style::default().fg(Color::DarkGray))],
            width,
        )],
        ResultView::Grammar {
            corrected_text,
            score,
            issues,
        } => {
            let mut pieces = vec![paragraph(
                vec![
                    labelled("Corrected Text", corrected_text),
                    Line::default(),
                    labelled("Score", score),
                    Line::default(),
                ],
                width,
            )];
            if issues.is_empty() {
                pieces.push(paragraph(
                    vec![Line::styled(NO_ISSUES, Style::default().fg(Color::DarkGray))],
                    width,
                ));
            } else {
                pieces.push(issues_table(issues, width));
            }
            pieces
        }
        ResultView::Definition {
            word,
            part_of_speech,
            definition,
            example,
            level,
            synonyms,
        } => vec![paragraph(
            vec![
                Line::styled(
                    word.clone(),
                    Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
                ),
                labelled("Part of Speech", part_of_speech),
                labelled("Definition", definition),
                labelled("Example", example),
                labelled("Level", level),
                labelled("Synonyms", synonyms),
            ],
            width,
        )],
        ResultView::Style {
            overall,
            readability_level,
            suggestions,
        } => {
            let mut lines = vec![
                labelled("Overall", overall),
                labelled("Readability Level", readability_level),
            ];
            if let Some(suggestions) = suggestions {
                lines.push(Line::default());
                lines.extend(suggestions.iter().map(|s| Line::from(format!("  • {s}"))));
            }
            vec![paragraph(lines, width)]
        }
    }
}

/// Persistent scroll state for the results pane.
#[derive(Default)]
pub struct ResultsState {
    pub scroll_state: ScrollViewState,
}

impl ResultsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump back to the top (a new outcome replaces the old one entirely).
    pub fn reset_scroll(&mut self) {
        self.scroll_state.scroll_to_top();
    }
}

impl EventHandler for ResultsState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => {
                let offset = self.scroll_state.offset();
                self.scroll_state.set_offset(Position {
                    x: offset.x,
                    y: offset.y.saturating_sub(PAGE_SCROLL),
                });
            }
            TuiEvent::ScrollPageDown => {
                let offset = self.scroll_state.offset();
                self.scroll_state.set_offset(Position {
                    x: offset.x,
                    y: offset.y.saturating_add(PAGE_SCROLL),
                });
            }
            _ => {}
        }
        None
    }
}

/// Transient component: built each frame from the current view.
pub struct ResultsPane<'a> {
    pub view: &'a ResultView,
    pub state: &'a mut ResultsState,
}

impl Component for ResultsPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .padding(Padding::horizontal(1))
            .title(Span::styled(
                " Results ",
                Style::default().add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Leave one column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let pieces = layout(self.view, content_width);
        let total_height = content_height(&pieces);

        // Clamp the offset so a shorter result never leaves the view scrolled past the end
        let max_y = total_height.saturating_sub(inner.height);
        let offset = self.state.scroll_state.offset();
        if offset.y > max_y {
            self.state.scroll_state.set_offset(Position { x: offset.x, y: max_y });
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y: u16 = 0;
        for piece in pieces {
            if y >= total_height {
                break;
            }
            let height = piece.height().min(total_height - y);
            let rect = Rect::new(0, y, content_width, height);
            match piece {
                Piece::Text(paragraph, _) => scroll_view.render_widget(paragraph, rect),
                Piece::Table(table, _) => scroll_view.render_widget(table, rect),
            }
            y = y.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{DefinitionResult, GrammarResult, StyleResult};
    use crate::core::state::UNREACHABLE_MESSAGE;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn grammar_outcome() -> Outcome {
        Outcome::Success(AnalysisResult::Grammar(GrammarResult {
            corrected_text: Some("She doesn't like it.".to_string()),
            score: Some(82.0),
            issues: vec![GrammarIssue {
                message: "subject-verb agreement".to_string(),
                before: "dont".to_string(),
                after: "doesn't".to_string(),
            }],
        }))
    }

    fn definition_outcome() -> Outcome {
        Outcome::Success(AnalysisResult::Definition(DefinitionResult {
            word: Some("ephemeral".to_string()),
            part_of_speech: Some("adjective".to_string()),
            definition: Some("lasting a very short time".to_string()),
            example: Some("ephemeral beauty".to_string()),
            level: Some("advanced".to_string()),
            synonyms: Some(vec!["transient".to_string(), "fleeting".to_string()]),
        }))
    }

    fn render_lines(view: &ResultView, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ResultsState::new();
        terminal
            .draw(|f| {
                ResultsPane { view, state: &mut state }.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol().to_string()).collect())
            .collect()
    }

    #[test]
    fn test_idle_is_empty_placeholder() {
        assert_eq!(ResultView::build(&Outcome::Idle, Mode::None), ResultView::Empty);
        let lines = render_lines(&ResultView::Empty, 40, 5);
        assert!(lines.iter().any(|l| l.contains(NO_RESULTS)));
    }

    #[test]
    fn test_pending_and_error_render_verbatim() {
        assert_eq!(
            ResultView::build(&Outcome::Pending, Mode::Grammar),
            ResultView::Message(WAITING_MESSAGE.to_string())
        );
        for mode in [Mode::Style, Mode::Grammar, Mode::Define] {
            assert_eq!(
                ResultView::build(&Outcome::Error(UNREACHABLE_MESSAGE.to_string()), mode),
                ResultView::Message(UNREACHABLE_MESSAGE.to_string())
            );
        }
    }

    #[test]
    fn test_text_payload_renders_verbatim_in_any_mode() {
        let outcome = Outcome::Success(AnalysisResult::Text("plain answer".to_string()));
        assert_eq!(
            ResultView::build(&outcome, Mode::Style),
            ResultView::Message("plain answer".to_string())
        );
    }

    #[test]
    fn test_grammar_view() {
        let view = ResultView::build(&grammar_outcome(), Mode::Grammar);
        let ResultView::Grammar { score, issues, .. } = &view else {
            panic!("expected grammar view");
        };
        assert_eq!(score, "82");
        assert_eq!(issues.len(), 1);

        let lines = render_lines(&view, 80, 12);
        assert!(lines.iter().any(|l| l.contains("Corrected Text: She doesn't like it.")));
        assert!(lines.iter().any(|l| l.contains("Score: 82")));
        assert!(lines.iter().any(|l| l.contains("Issue") && l.contains("Before") && l.contains("After")));
        let row = lines
            .iter()
            .find(|l| l.contains("subject-verb agreement"))
            .expect("issue row");
        assert!(row.contains("dont"));
        assert!(row.contains("doesn't"));
        assert!(!lines.iter().any(|l| l.contains("No issues found")));
    }

    #[test]
    fn test_grammar_without_issues_or_text() {
        let outcome = Outcome::Success(AnalysisResult::Grammar(GrammarResult {
            corrected_text: Some(String::new()),
            score: Some(97.5),
            issues: Vec::new(),
        }));
        let view = ResultView::build(&outcome, Mode::Grammar);
        let lines = render_lines(&view, 80, 10);
        assert!(lines.iter().any(|l| l.contains(NO_CORRECTED_TEXT)));
        assert!(lines.iter().any(|l| l.contains("Score: 97.5")));
        assert!(lines.iter().any(|l| l.contains("No issues found")));
    }

    #[test]
    fn test_definition_view_joins_synonyms() {
        let view = ResultView::build(&definition_outcome(), Mode::Define);
        let lines = render_lines(&view, 60, 10);
        assert!(lines.iter().any(|l| l.contains("ephemeral")));
        assert!(lines.iter().any(|l| l.contains("Part of Speech: adjective")));
        assert!(lines.iter().any(|l| l.contains("Level: advanced")));
        assert!(lines.iter().any(|l| l.contains("Synonyms: transient, fleeting")));
    }

    #[test]
    fn test_missing_synonyms_render_nothing_after_label() {
        let outcome = Outcome::Success(AnalysisResult::Definition(DefinitionResult::default()));
        let ResultView::Definition { synonyms, .. } = ResultView::build(&outcome, Mode::Define) else {
            panic!("expected definition view");
        };
        assert_eq!(synonyms, "");
    }

    #[test]
    fn test_style_view_lists_suggestions_in_order() {
        let outcome = Outcome::Success(AnalysisResult::Style(StyleResult {
            overall: Some("Clear but wordy".to_string()),
            readability_level: Some("Grade 9".to_string()),
            high_level_suggestions: Some(vec!["Cut filler".to_string(), "Vary sentences".to_string()]),
        }));
        let view = ResultView::build(&outcome, Mode::Style);
        let lines = render_lines(&view, 60, 10);

        let first = lines.iter().position(|l| l.contains("Cut filler")).unwrap();
        let second = lines.iter().position(|l| l.contains("Vary sentences")).unwrap();
        assert!(first < second);
        assert!(lines.iter().any(|l| l.contains("Readability Level: Grade 9")));
    }

    #[test]
    fn test_style_without_suggestions_omits_list() {
        let outcome = Outcome::Success(AnalysisResult::Style(StyleResult::default()));
        let ResultView::Style { suggestions, .. } = ResultView::build(&outcome, Mode::Style) else {
            panic!("expected style view");
        };
        assert_eq!(suggestions, None);
    }

    #[test]
    fn test_payload_mode_mismatch_is_empty() {
        assert_eq!(ResultView::build(&grammar_outcome(), Mode::Define), ResultView::Empty);
    }

    #[test]
    fn test_build_is_idempotent() {
        let outcome = definition_outcome();
        let first = ResultView::build(&outcome, Mode::Define);
        let second = ResultView::build(&outcome, Mode::Define);
        assert_eq!(first, second);
        assert_eq!(render_lines(&first, 60, 10), render_lines(&second, 60, 10));
    }

    #[test]
    fn test_page_scroll_is_clamped_on_render() {
        let view = ResultView::Message((1..=40).map(|i| format!("line {i}\n")).collect());
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ResultsState::new();
        for _ in 0..10 {
            state.handle_event(&TuiEvent::ScrollPageDown);
        }
        terminal
            .draw(|f| ResultsPane { view: &view, state: &mut state }.render(f, f.area()))
            .unwrap();

        // 40 lines in an 8-row viewport: offset stops at 32
        assert_eq!(state.scroll_state.offset().y, 32);
    }

    fn many_issues(count: usize) -> ResultView {
        ResultView::Grammar {
            corrected_text: String::new(),
            score: String::new(),
            issues: vec![
                GrammarIssue {
                    message: "m".to_string(),
                    before: "b".to_string(),
                    after: "a".to_string(),
                };
                count
            ],
        }
    }

    #[test]
    fn test_layout_height_is_exact_below_limit() {
        let view = ResultView::Message("x\n".repeat(5000));
        assert_eq!(content_height(&layout(&view, 20)), 5000);
    }

    #[test]
    fn test_oversized_views_saturate_layout_height() {
        let view = ResultView::Message("x\n".repeat(70_000));
        assert_eq!(content_height(&layout(&view, 20)), u16::MAX);

        assert_eq!(content_height(&layout(&many_issues(70_000), 20)), u16::MAX);
    }

    #[test]
    fn test_oversized_issue_list_renders() {
        let view = many_issues(70_000);
        let backend = TestBackend::new(12, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ResultsState::new();
        state.handle_event(&TuiEvent::ScrollPageDown);
        terminal
            .draw(|f| ResultsPane { view: &view, state: &mut state }.render(f, f.area()))
            .unwrap();
        assert_eq!(state.scroll_state.offset().y, 10);
    }
}
