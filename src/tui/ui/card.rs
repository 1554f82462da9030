use crate::cards::{Card, Color as CardColor};
use crate::render::{card_face_lines, card_label};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::inner;

pub(super) fn suit_style(card: Card) -> Style {
    match card.color() {
        CardColor::Red => Style::default().fg(Color::Red),
        CardColor::Black => Style::default().fg(Color::White),
    }
}

/// Small bordered card: label centred, `[  ]` for an empty slot.
pub(super) fn render_card_widget(
    f: &mut Frame,
    area: Rect,
    card: Option<Card>,
    title: Option<String>,
    border: Option<Color>,
) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(t) = title {
        block = block.title(t);
    }
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let content = match card {
        Some(c) => Line::from(Span::styled(card_label(c).trim_start().to_string(), suit_style(c))),
        None => Line::from("[  ]"),
    };
    f.render_widget(block, area);
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner(area));
}

/// Full card face with pips, or a patterned back when `card` is `None`.
pub(super) fn render_big_card(f: &mut Frame, area: Rect, card: Option<Card>) {
    let (lines, style): (Vec<String>, Style) = match card {
        Some(c) => (card_face_lines(c).to_vec(), suit_style(c)),
        None => (
            ["♠♥♣♦♠♥♣♦♠", "▒▒▒▒▒▒▒▒▒", "♠♣♥♦♠♣♥♦♠", "▒▒▒▒▒▒▒▒▒", "♠♥♣♦♠♥♣♦♠"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            Style::default().fg(Color::White).bg(Color::Blue),
        ),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::White));
    let text: Vec<Line> = lines.into_iter().map(|l| Line::from(Span::styled(l, style))).collect();
    let para = Paragraph::new(text).block(block).alignment(Alignment::Center);
    f.render_widget(para, area);
}
