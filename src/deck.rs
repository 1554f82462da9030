use crate::cards::{Card, Suit, Value};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cmp::Ordering;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("no more cards in deck")]
    EmptyDeck,
    #[error("cannot draw fewer than 1 card (asked for {0})")]
    InvalidArgument(usize),
}

/// An ordered pile of cards. Index 0 is the top (next to draw); the last index is the bottom.
///
/// The structure does not enforce uniqueness: a full deck holds each card once, and duplicates
/// only appear if a caller adds them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards, unshuffled: suits in [`Suit::ALL`] order, values ascending within a suit.
    ///
    /// ```
    /// use cards_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for value in Value::ALL {
                cards.push(Card::new(suit, value));
            }
        }
        Self { cards }
    }

    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Builds a deck from `cards`, with `cards[0]` on top.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        Ok(self.cards.remove(0))
    }

    /// Draw the top `n` cards, in order.
    ///
    /// The deck must hold *more* than `n` cards: asking for exactly the number of cards left is
    /// rejected with [`DeckError::EmptyDeck`] and leaves the deck untouched. Use [`Deck::draw`]
    /// to take the last card.
    ///
    /// ```
    /// use cards_rs::deck::{Deck, DeckError};
    ///
    /// let mut deck = Deck::standard();
    /// assert_eq!(deck.draw_n(51).unwrap().len(), 51);
    /// assert_eq!(deck.draw_n(1), Err(DeckError::EmptyDeck));
    /// assert!(deck.draw().is_ok());
    /// ```
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n < 1 {
            return Err(DeckError::InvalidArgument(n));
        }
        if self.cards.len() <= n {
            return Err(DeckError::EmptyDeck);
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Append `cards` to the bottom, keeping their order.
    pub fn add_bottom<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// The bottom card, left in place.
    pub fn bottom(&self) -> Result<Card, DeckError> {
        self.cards.last().copied().ok_or(DeckError::EmptyDeck)
    }

    /// Remove every card matching `predicate`; the rest keep their relative order.
    pub fn purge<P: FnMut(&Card) -> bool>(&mut self, mut predicate: P) {
        self.cards.retain(|c| !predicate(c));
    }

    /// Stable sort: cards that compare equal keep their current relative order.
    pub fn sort_by<F: FnMut(&Card, &Card) -> Ordering>(&mut self, compare: F) {
        self.cards.sort_by(compare);
    }

    /// `(position, card)` pairs from top to bottom.
    ///
    /// The iterator borrows the deck, so the deck cannot be changed until it is dropped.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Card)> + '_ {
        self.cards.iter().copied().enumerate()
    }
}
