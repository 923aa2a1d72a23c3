//! Board rendering with win-line and cursor highlighting.

use crate::app::{App, Pane};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use rewind_tictactoe::{Board, Player, Position, Square};

/// Renders the board at the current step.
///
/// The three squares of a completed line render highlighted; the
/// square under the cursor renders reversed while the board pane has
/// focus. Legality is not checked here, the engine ignores bad moves.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board = app.game().board();
    let line = app.game().win().map(|win| win.line());
    let cursor = (*app.pane() == Pane::Board).then(|| *app.cursor());

    let board_area = center_rect(area, 40, 12);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], board, line, cursor, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], board, line, cursor, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], board, line, cursor, 6);
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    line: Option<[Position; 3]>,
    cursor: Option<Position>,
    start: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(f, cols[0], board, line, cursor, start);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], board, line, cursor, start + 1);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], board, line, cursor, start + 2);
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    line: Option<[Position; 3]>,
    cursor: Option<Position>,
    index: usize,
) {
    let pos = Position::ALL[index];
    let (text, mut style) = match board.get(pos) {
        Square::Empty => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if line.is_some_and(|line| line.contains(&pos)) {
        style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
    }
    if cursor == Some(pos) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep =
        Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
