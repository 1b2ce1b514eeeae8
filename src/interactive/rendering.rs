//! TUI rendering with ratatui
//!
//! Grid on the left, suggestions and keyboard hints on the right, status bar
//! along the bottom. The advance control's label tracks the phase, matching
//! the single overloaded Enter key.

use super::app::App;
use crate::core::{LetterState, MAX_ATTEMPTS, Tile, WORD_LENGTH};
use crate::session::Phase;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Grid
            Constraint::Percentage(55), // Suggestions + keyboard
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Suggestions
            Constraint::Length(5), // Keyboard hints
        ])
        .split(main_chunks[1]);

    render_suggestions(f, app, right_chunks[0]);
    render_keyboard(f, app, right_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE ORACLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(state: LetterState) -> Style {
    match state {
        LetterState::Empty => Style::default().fg(Color::White),
        LetterState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterState::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterState::Correct => Style::default().fg(Color::Black).bg(Color::Green),
    }
}

fn tile_spans(tiles: &[Tile]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for i in 0..WORD_LENGTH {
        let (ch, style) = match tiles.get(i) {
            Some(tile) => (tile.ch, tile_style(tile.state)),
            None => ('·', Style::default().fg(Color::DarkGray)),
        };
        spans.push(Span::styled(
            format!(" {ch} "),
            style.add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    spans
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let history = session.history();
    let coloring = session.phase() == Phase::Coloring;

    let mut lines: Vec<Line> = Vec::new();

    for (i, turn) in history.iter().enumerate() {
        let mut spans = vec![Span::raw(" ")];
        spans.extend(tile_spans(&turn.tiles));
        if coloring && i == history.len() - 1 {
            spans.push(Span::styled(
                " ← press 1-5",
                Style::default().fg(Color::Cyan),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // Current typing row
    if session.phase() == Phase::Typing && history.len() < MAX_ATTEMPTS {
        let mut spans = vec![Span::raw(" ")];
        spans.extend(tile_spans(&session.typing_row()));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // Empty padding rows up to the attempt budget
    let used = history.len() + usize::from(session.phase() == Phase::Typing);
    for _ in used..MAX_ATTEMPTS {
        let mut spans = vec![Span::raw(" ")];
        spans.extend(tile_spans(&[]));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = format!(" Guesses ({}/{MAX_ATTEMPTS}) ", history.len());
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;

    if session.phase() == Phase::Analyzing {
        let frame = SPINNER_FRAMES[app.spinner_tick % SPINNER_FRAMES.len()];
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {frame} Consulting the oracle..."),
                Style::default().fg(Color::Magenta),
            )),
            Line::from(""),
            Line::from("  Press Esc or Enter to cancel."),
        ])
        .block(suggestion_block(" Analyzing "));
        f.render_widget(paragraph, area);
        return;
    }

    let title = if session.history().is_empty() {
        " Recommended Starters "
    } else if session.phase() == Phase::GameOver {
        " Result "
    } else {
        " Suggestions "
    };

    let items: Vec<ListItem> = session
        .suggestions()
        .iter()
        .map(|s| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:<8}", s.word),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(s.reasoning.clone(), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(suggestion_block(title));
    f.render_widget(list, area);
}

fn suggestion_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.session.letter_hints();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = vec![Span::raw(" ".repeat(i + 1))];
            for ch in row.chars() {
                let style = hints
                    .get(&ch)
                    .copied()
                    .map_or(Style::default().fg(Color::White), tile_style);
                spans.push(Span::styled(format!("{ch} "), style));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;

    // The notice takes over the status line while it lasts
    let (text, style) = if let Some(notice) = session.notice() {
        (
            notice.to_string(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        let text = match session.phase() {
            Phase::Typing => {
                "Type a guess · [ENTER] submit · Tab adopt top pick · Ctrl-N new game · Ctrl-C quit"
            }
            Phase::Coloring => {
                "Press 1-5 to cycle tile colors to match your puzzle · [SOLVE] with Enter"
            }
            Phase::Analyzing => "Analyzing... · [CANCEL] with Enter or Esc",
            Phase::GameOver => "Game over · Ctrl-N for a new game · Ctrl-C quit",
        };
        (text.to_string(), Style::default().fg(Color::Gray))
    };

    let status = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
