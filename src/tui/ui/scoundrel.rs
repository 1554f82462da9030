use crate::render::health_hearts;
use crate::scoundrel::{Outcome, MAX_HEALTH, ROOM_SIZE};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::card::render_card_widget;
use super::layout::{centered_rect, columns, inner};

const CARD_WIDTH: u16 = 9;

pub(super) fn draw_scoundrel(f: &mut Frame, app: &AppState) {
    let game = &app.scoundrel;
    let size = f.area();
    let status_height: u16 = 2 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // health
            Constraint::Length(5),             // pile, room, discard
            Constraint::Length(5),             // weapon + last monster
            Constraint::Min(0),                // spacer / score
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    // Health
    let health = game.health();
    let hearts = health_hearts(health);
    let health_line = Line::from(vec![
        Span::styled(hearts, Style::default().fg(Color::Red)),
        Span::raw(format!(" ({health}/{MAX_HEALTH})")),
    ]);
    let header = Paragraph::new(health_line)
        .block(Block::default().title("Scoundrel: Health").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Draw pile, room slots, discard
    let table = columns(chunks[1], ROOM_SIZE + 2, CARD_WIDTH + 1);
    let pile_style = Style::default().fg(Color::White).bg(Color::Blue);
    let pile_block = Block::default().borders(Borders::ALL).title(game.draw_pile_len().to_string());
    f.render_widget(pile_block, table[0]);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled("[x]", pile_style))).alignment(Alignment::Center),
        inner(table[0]),
    );
    for i in 0..ROOM_SIZE {
        let card = game.room().get(i).copied();
        let border = if app.last_selected == Some(i) { Some(Color::Yellow) } else { None };
        let title = card.map(|_| format!("[{}]", i + 1));
        render_card_widget(f, table[i + 1], card, title, border);
    }
    render_card_widget(
        f,
        table[ROOM_SIZE + 1],
        game.discard_top(),
        Some("Discard".into()),
        Some(Color::DarkGray),
    );

    // Weapon and the monster it last beat
    let kit = columns(chunks[2], 2, CARD_WIDTH + 4);
    render_card_widget(f, kit[0], game.weapon(), Some("Weapon".into()), Some(Color::Green));
    render_card_widget(f, kit[1], game.last_monster(), Some("Slain".into()), Some(Color::Red));

    if let Some(outcome) = game.outcome() {
        draw_score(f, chunks[3], outcome);
    }

    // Status bar
    let status_area = chunks[4];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let status_inner = inner(status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(status_inner);

    let mut left_info = if game.is_game_over() {
        vec![Line::from("Game over. Press N for a new game.")]
    } else {
        vec![Line::from(format!("Choose a room card: 1-{}", game.room().len()))]
    };
    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    let right_keys = vec![Line::from(""), Line::from("? help • N new • M menu • Q quit")];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);

    if app.help_open() {
        draw_help(f);
    }
}

fn draw_score(f: &mut Frame, area: Rect, outcome: Outcome) {
    let score = outcome.score();
    let label = match outcome {
        Outcome::CleanWin(_) => "You cleared the dungeon!",
        Outcome::Defeat(_) => "You fell.",
    };
    let color = if score > 0 { Color::Green } else { Color::Red };
    let lines = vec![
        Line::from(Span::styled(label, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(score.to_string(), Style::default().fg(color)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Rules:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- ♦ weapon: equip it; the old weapon is discarded"),
        Line::from("- ♥ potion: heal by its value, up to 20"),
        Line::from("- ♠ ♣ monster: take its value as damage, minus your weapon"),
        Line::from("- A weapon only works on monsters no stronger than the last one it slew"),
        Line::from("- The room refills once a single card is left"),
        Line::from("- The game ends when you die or the deck runs out"),
        Line::from(""),
        Line::from(Span::styled("Keys:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- 1-4: pick a room card"),
        Line::from("- N: new game"),
        Line::from("- M: menu"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}
