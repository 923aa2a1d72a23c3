//! Move history list with jump targets and an order toggle.

use crate::app::{App, Pane};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Label shown for the start-of-game entry.
const START_LABEL: &str = "Go to game start";

/// Renders the move list for the recorded history.
///
/// Rows are keyed by their recorded step, so reversing the order
/// changes presentation only: the selected row keeps pointing at the
/// same entry, and activating it jumps to that entry's own step. The
/// row for the current step renders bold.
pub fn render_moves(f: &mut Frame, area: Rect, app: &App) {
    let history = app.game().history();
    let mut steps: Vec<usize> = (0..history.len()).collect();
    if !*app.ascending() {
        steps.reverse();
    }

    let items: Vec<ListItem> = steps
        .iter()
        .map(|&step| {
            let label = history[step].label().unwrap_or(START_LABEL);
            let mut style = Style::default();
            if step == app.game().current_step() {
                style = style.add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::from(format!("{step:>2}. {label}")).style(style))
        })
        .collect();

    let title = if *app.ascending() {
        "Moves (oldest first)"
    } else {
        "Moves (newest first)"
    };
    let border_style = if *app.pane() == Pane::Moves {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style),
        )
        .highlight_symbol("> ")
        .highlight_style(Style::default().fg(Color::Cyan));

    let mut state = ListState::default();
    state.select(steps.iter().position(|&step| step == *app.selected_step()));
    f.render_stateful_widget(list, area, &mut state);
}
