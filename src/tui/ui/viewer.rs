use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::card::render_big_card;
use super::layout::{centered_rect, inner};

pub(super) fn draw_viewer(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(4)])
        .split(size);

    let block = Block::default()
        .title(format!("Card Viewer ({} left)", app.viewer.remaining()))
        .borders(Borders::ALL);
    f.render_widget(block, chunks[0]);
    let card_area = centered_rect(30, 60, inner(chunks[0]));
    // 9 columns of face plus border and padding
    let card_area =
        Rect { width: card_area.width.min(13), height: card_area.height.min(7), ..card_area };
    render_big_card(f, card_area, app.viewer.current());

    let mut lines =
        vec![Line::from("Space/Enter/D draw • S shuffle • O sort • N new deck • M menu • Q quit")];
    if app.viewer.is_done() {
        lines.push(Line::from("Deck empty. Press N to start over."));
    }
    if let Some(err) = app.action_error() {
        lines.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    let status = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(status, chunks[1]);
}
