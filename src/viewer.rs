//! Card viewer: flip through a shuffled deck one card at a time.

use crate::cards::Card;
use crate::deck::{Deck, DeckError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ViewerError {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error("unknown command: '{0}'")]
    UnknownCommand(String),
}

#[derive(Debug, Clone)]
pub struct CardViewer {
    deck: Deck,
    current: Option<Card>,
    rng: ChaCha8Rng,
}

impl Default for CardViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl CardViewer {
    pub fn new() -> Self {
        let seed: u64 = rand::rng().random();
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { deck: Deck::empty(), current: None, rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Shuffle a full deck and turn over its first card.
    pub fn init(&mut self) {
        self.deck = Deck::standard();
        self.deck.shuffle_with(&mut self.rng);
        self.current = self.deck.draw().ok();
    }

    pub fn current(&self) -> Option<Card> {
        self.current
    }

    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    pub fn is_done(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn draw(&mut self) -> Result<Card, ViewerError> {
        let card = self.deck.draw()?;
        self.current = Some(card);
        Ok(card)
    }

    pub fn shuffle(&mut self) {
        self.deck.shuffle_with(&mut self.rng);
    }

    /// Put the remaining cards back in full-deck order.
    pub fn sort(&mut self) {
        self.deck.sort_by(Card::cmp);
    }

    /// Empty input or `d` draws, `s` shuffles, `o` sorts.
    pub fn handle_command(&mut self, input: &str) -> Result<(), ViewerError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "" | "d" | "draw" => self.draw().map(|_| ()),
            "s" | "shuffle" => {
                self.shuffle();
                Ok(())
            }
            "o" | "sort" => {
                self.sort();
                Ok(())
            }
            other => Err(ViewerError::UnknownCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_turns_over_first_card() {
        let mut v = CardViewer::with_seed(1);
        v.init();
        assert!(v.current().is_some());
        assert_eq!(v.remaining(), 51);
    }

    #[test]
    fn draws_until_empty() {
        let mut v = CardViewer::with_seed(1);
        v.init();
        let mut seen = vec![v.current().unwrap()];
        while !v.is_done() {
            seen.push(v.draw().unwrap());
        }
        seen.sort();
        assert_eq!(seen, Deck::standard().as_slice());
        assert_eq!(v.draw(), Err(ViewerError::Deck(DeckError::EmptyDeck)));
    }

    #[test]
    fn sort_command_orders_remaining_cards() {
        let mut v = CardViewer::with_seed(4);
        v.init();
        let first = v.current().unwrap();
        v.handle_command("o").unwrap();
        let next = v.draw().unwrap();
        let lowest_left = Deck::standard().as_slice().iter().copied().find(|c| *c != first);
        assert_eq!(Some(next), lowest_left);
    }

    #[test]
    fn unknown_command_is_rejected() {
        let mut v = CardViewer::with_seed(4);
        v.init();
        assert_eq!(v.handle_command("x"), Err(ViewerError::UnknownCommand("x".into())));
        assert_eq!(v.remaining(), 51);
    }
}
