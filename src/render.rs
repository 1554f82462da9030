//! Plain-terminal rendering for the line-mode driver.
//!
//! Everything here returns `String`s with ANSI colour codes (xterm 256-colour palette) produced by
//! crossterm's styling, so frames can be written to any `Write`.

use crate::cards::{Card, Color, Value};
use crate::scoundrel::{Outcome, Scoundrel, ROOM_SIZE};
use crate::viewer::CardViewer;
use crossterm::style::{Color as TermColor, Stylize};

pub const BLUE: TermColor = TermColor::AnsiValue(21);
pub const GREEN: TermColor = TermColor::AnsiValue(40);
pub const RED: TermColor = TermColor::AnsiValue(196);
pub const ORANGE: TermColor = TermColor::AnsiValue(214);
pub const BLACK: TermColor = TermColor::AnsiValue(245);
pub const WHITE: TermColor = TermColor::AnsiValue(252);

const EMPTY_SLOT: &str = "   ";

/// Three columns wide: right-aligned value then the suit glyph, e.g. `" 7♣"`, `"10♥"`.
pub fn card_label(card: Card) -> String {
    format!("{:>2}{}", card.value().label(), card.suit().symbol())
}

pub fn styled_card(card: Card) -> String {
    let color = match card.color() {
        Color::Red => RED,
        Color::Black => BLACK,
    };
    card_label(card).with(color).to_string()
}

fn styled_slot(card: Option<Card>) -> String {
    card.map(styled_card).unwrap_or_else(|| EMPTY_SLOT.to_string())
}

pub fn card_back() -> String {
    "[x]".with(WHITE).on(BLUE).to_string()
}

/// Five 9-column rows drawing a card face: corner labels and a pip layout (or a single symbol
/// for face cards).
pub fn card_face_lines(card: Card) -> [String; 5] {
    let corner = card_label(card);
    let pad = " ".repeat(9 - 3);
    let body = face_pattern(card).map(|row| format!(" {row} "));
    let [a, b, c] = body;
    [format!("{corner}{pad}"), a, b, c, format!("{pad}{corner}")]
}

fn face_pattern(card: Card) -> [String; 3] {
    let s = card.suit().symbol();
    let blank = " ".repeat(7);
    let one = format!("   {s}   ");
    let two = format!(" {s}   {s} ");
    let three = format!(" {s} {s} {s} ");
    let center = |glyph: char| [" ".repeat(7), format!("   {glyph}   "), " ".repeat(7)];
    match card.value() {
        Value::Ace => center(s),
        Value::King => center('♚'),
        Value::Queen => center('♛'),
        Value::Jack => center('♝'),
        Value::Two => [one.clone(), blank, one],
        Value::Three => [one.clone(), one.clone(), one],
        Value::Four => [two.clone(), blank, two],
        Value::Five => [two.clone(), one, two],
        Value::Six => [two.clone(), two.clone(), two],
        Value::Seven => [two.clone(), three, two],
        Value::Eight => [three.clone(), two, three],
        Value::Nine => [three.clone(), three.clone(), three],
        Value::Ten => [three.clone(), format!("{s} {s} {s} {s}"), three],
    }
}

pub fn health_hearts(health: i32) -> String {
    "♥ ".repeat(health.max(0) as usize)
}

pub fn score_line(outcome: Outcome) -> String {
    let score = outcome.score();
    let color = if score > 0 { GREEN } else { RED };
    format!("{} {}", "Score:".with(ORANGE), score.to_string().with(color))
}

/// One frame of the Scoundrel board, or the final score once the game is over.
pub fn scoundrel_frame(game: &Scoundrel) -> String {
    if let Some(outcome) = game.outcome() {
        return format!("{}\n", score_line(outcome));
    }

    let mut selectors = Vec::with_capacity(ROOM_SIZE);
    let mut room = Vec::with_capacity(ROOM_SIZE);
    for i in 0..ROOM_SIZE {
        match game.room().get(i) {
            Some(&card) => {
                selectors.push(format!("[{}]", i + 1));
                room.push(styled_card(card));
            }
            None => {
                selectors.push(EMPTY_SLOT.to_string());
                room.push(EMPTY_SLOT.to_string());
            }
        }
    }

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!(
        "{} {} {}\n\n",
        "Health:".with(ORANGE),
        health_hearts(game.health()).with(RED),
        format!("({})", game.health()).with(ORANGE),
    ));
    out.push_str(&format!("     {}\n", selectors.join(" ").with(ORANGE)));
    out.push_str(&format!(
        "{}  {}  {}\n",
        card_back(),
        room.join(" "),
        styled_slot(game.discard_top())
    ));
    out.push_str(&format!("     {}\n", styled_slot(game.weapon())));
    out.push_str(&format!("     {}\n", styled_slot(game.last_monster())));
    out
}

pub fn scoundrel_prompt(game: &Scoundrel) -> String {
    if game.is_game_over() {
        return String::new();
    }
    "Select Card [1-4] >> ".with(ORANGE).to_string()
}

pub fn viewer_frame(viewer: &CardViewer) -> String {
    let mut out = String::new();
    match viewer.current() {
        Some(card) => {
            let color = match card.color() {
                Color::Red => RED,
                Color::Black => WHITE,
            };
            for line in card_face_lines(card) {
                out.push_str(&format!("{}\n", line.with(color)));
            }
        }
        None => out.push_str(&format!("{}\n", card_back())),
    }
    out.push_str(&format!("{} cards left\n", viewer.remaining()));
    out
}

pub fn viewer_prompt(viewer: &CardViewer) -> String {
    if viewer.is_done() {
        return String::new();
    }
    "[Enter] draw  [s] shuffle  [o] sort >> ".with(ORANGE).to_string()
}
