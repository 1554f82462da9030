//! Scoundrel: a solo roguelike played with a 52-card deck.
//!
//! Red face cards and red aces are removed, leaving 40 cards. Each turn the player picks one of up
//! to four face-up room cards:
//! - Diamonds are weapons and replace the equipped weapon.
//! - Hearts are potions and heal up to [`MAX_HEALTH`].
//! - Spades and Clubs are monsters and deal their value as damage, reduced by the weapon.
//!
//! A weapon dulls as it is used: after it defeats a monster it only works against monsters of
//! equal or lower value than the last one it beat.
//!
//! ```
//! use cards_rs::scoundrel::{GameState, Scoundrel, MAX_HEALTH};
//!
//! let mut game = Scoundrel::with_seed(7);
//! game.init();
//! assert_eq!(game.health(), MAX_HEALTH);
//! assert_eq!(game.room().len(), 4);
//!
//! while !game.is_game_over() {
//!     game.select(1).unwrap();
//! }
//! assert_eq!(game.state(), GameState::GameOver);
//! let _final_score = game.score();
//! ```

use crate::cards::{Card, Color, Suit};
use crate::deck::Deck;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const MAX_HEALTH: i32 = 20;
pub const ROOM_SIZE: usize = 4;
/// Cards drawn into the room once it is down to a single card.
pub const REFILL_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameState {
    InProgress,
    GameOver,
}

/// How a finished game ended, with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The draw pile ran out while the player was still alive.
    CleanWin(i32),
    Defeat(i32),
}

impl Outcome {
    pub fn score(self) -> i32 {
        match self {
            Outcome::CleanWin(s) | Outcome::Defeat(s) => s,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectionError {
    #[error("the game is over")]
    GameOver,
    #[error("not a room number: '{0}'")]
    Parse(String),
    #[error("no room card at position {index} (room has {room_len})")]
    OutOfRange { index: i64, room_len: usize },
}

#[derive(Debug, Clone)]
pub struct Scoundrel {
    pub(crate) draw_pile: Deck,
    /// Used as a stack: cards go on the bottom and the bottom card is the visible one.
    pub(crate) discard: Deck,
    pub(crate) room: Vec<Card>,
    pub(crate) health: i32,
    pub(crate) weapon: Option<Card>,
    /// Last monster beaten with the current weapon.
    pub(crate) last_monster: Option<Card>,
    rng: ChaCha8Rng,
}

impl Default for Scoundrel {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoundrel {
    /// An engine with a random seed. Call [`Scoundrel::init`] to deal.
    pub fn new() -> Self {
        let seed: u64 = rand::rng().random();
        Self::with_seed(seed)
    }

    /// An engine whose shuffles are reproducible. Call [`Scoundrel::init`] to deal.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            draw_pile: Deck::empty(),
            discard: Deck::empty(),
            room: Vec::new(),
            health: MAX_HEALTH,
            weapon: None,
            last_monster: None,
            rng,
        }
    }

    /// A dealt game using `draw_pile` as-is (top card first, no shuffle). Red face cards are
    /// still removed.
    pub fn from_deck(draw_pile: Deck) -> Self {
        let mut game = Self::with_seed(0);
        game.reset_with(draw_pile);
        game
    }

    /// Start a new game: fresh 40-card draw pile, shuffled with this engine's RNG, and a new room.
    pub fn init(&mut self) {
        let mut deck = Deck::standard();
        deck.purge(is_removed_card);
        deck.shuffle_with(&mut self.rng);
        self.reset_with(deck);
    }

    fn reset_with(&mut self, mut draw_pile: Deck) {
        draw_pile.purge(is_removed_card);
        self.draw_pile = draw_pile;
        self.discard = Deck::empty();
        self.health = MAX_HEALTH;
        self.weapon = None;
        self.last_monster = None;
        self.room = match self.draw_pile.draw_n(ROOM_SIZE) {
            Ok(cards) => cards,
            // fewer than five cards left: take what there is
            Err(_) => std::iter::from_fn(|| self.draw_pile.draw().ok()).take(ROOM_SIZE).collect(),
        };
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Face-up cards in selection order; position 0 is selected with `1`.
    pub fn room(&self) -> &[Card] {
        &self.room
    }

    pub fn weapon(&self) -> Option<Card> {
        self.weapon
    }

    pub fn last_monster(&self) -> Option<Card> {
        self.last_monster
    }

    /// Most recently discarded card.
    pub fn discard_top(&self) -> Option<Card> {
        self.discard.bottom().ok()
    }

    pub fn draw_pile(&self) -> &Deck {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &Deck {
        &self.discard
    }

    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Over once the player is dead or the draw pile is empty.
    pub fn is_game_over(&self) -> bool {
        self.health <= 0 || self.draw_pile.is_empty()
    }

    pub fn state(&self) -> GameState {
        if self.is_game_over() {
            GameState::GameOver
        } else {
            GameState::InProgress
        }
    }

    /// Final score; only meaningful once [`Scoundrel::is_game_over`] is true.
    ///
    /// Surviving until the draw pile is empty scores the remaining health. Otherwise the value
    /// of every black card left in the draw pile is subtracted from health.
    pub fn score(&self) -> i32 {
        if self.draw_pile.is_empty() && self.health > 0 {
            return self.health;
        }
        let undrawn_monsters: i32 = self
            .draw_pile
            .iter()
            .filter(|(_, c)| c.color() == Color::Black)
            .map(|(_, c)| i32::from(c.value().value()))
            .sum();
        self.health - undrawn_monsters
    }

    /// `None` while the game is still running.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_game_over() {
            return None;
        }
        let score = self.score();
        if self.draw_pile.is_empty() && self.health > 0 {
            Some(Outcome::CleanWin(score))
        } else {
            Some(Outcome::Defeat(score))
        }
    }

    /// Whether the equipped weapon would be used against `monster`.
    pub fn can_use_weapon_against(&self, monster: Card) -> bool {
        self.weapon.is_some() && self.last_monster.map_or(true, |m| monster.value() <= m.value())
    }

    /// Resolve a room selection typed by the player (`"1"` to `"4"`).
    pub fn resolve_room_selection(&mut self, input: &str) -> Result<(), SelectionError> {
        if self.is_game_over() {
            return Err(SelectionError::GameOver);
        }
        let trimmed = input.trim();
        let index = trimmed.parse::<i64>().map_err(|_| SelectionError::Parse(trimmed.to_string()))?;
        self.select_checked(index)
    }

    /// Resolve the room card at 1-based `index`.
    pub fn select(&mut self, index: usize) -> Result<(), SelectionError> {
        if self.is_game_over() {
            return Err(SelectionError::GameOver);
        }
        self.select_checked(i64::try_from(index).unwrap_or(i64::MAX))
    }

    fn select_checked(&mut self, index: i64) -> Result<(), SelectionError> {
        let position = self.room_position(index)?;
        // nothing below this point can fail
        let card = self.take_room_card(position);
        match card.suit() {
            Suit::Diamonds => self.equip(card),
            Suit::Hearts => self.drink(card),
            Suit::Spades | Suit::Clubs => self.fight(card),
        }
        Ok(())
    }

    fn room_position(&self, index: i64) -> Result<usize, SelectionError> {
        let out_of_range = SelectionError::OutOfRange { index, room_len: self.room.len() };
        if !(1..=ROOM_SIZE as i64).contains(&index) {
            return Err(out_of_range);
        }
        let position = (index - 1) as usize;
        if position >= self.room.len() {
            return Err(out_of_range);
        }
        Ok(position)
    }

    fn take_room_card(&mut self, position: usize) -> Card {
        let card = self.room.remove(position);
        if self.room.len() <= 1 {
            self.refill_room();
        }
        card
    }

    fn refill_room(&mut self) {
        for _ in 0..REFILL_COUNT {
            let Ok(card) = self.draw_pile.draw() else {
                break;
            };
            self.room.push(card);
        }
    }

    fn equip(&mut self, weapon: Card) {
        // monster first, so the old weapon ends up on top of the discard
        if let Some(monster) = self.last_monster.take() {
            self.discard.add_bottom([monster]);
        }
        if let Some(old) = self.weapon.replace(weapon) {
            self.discard.add_bottom([old]);
        }
    }

    fn drink(&mut self, potion: Card) {
        self.health = (self.health + i32::from(potion.value().value())).min(MAX_HEALTH);
        self.discard.add_bottom([potion]);
    }

    fn fight(&mut self, monster: Card) {
        let use_weapon = self.can_use_weapon_against(monster);
        let mut damage = i32::from(monster.value().value());
        if let (true, Some(weapon)) = (use_weapon, self.weapon) {
            damage -= i32::from(weapon.value().value());
        }
        // a single point of net damage is absorbed
        if damage > 1 {
            self.health -= damage;
        }
        if use_weapon {
            if let Some(previous) = self.last_monster.replace(monster) {
                self.discard.add_bottom([previous]);
            }
        } else {
            self.discard.add_bottom([monster]);
        }
    }
}

/// Red Jacks, Queens, Kings and Aces are not part of a Scoundrel deck.
fn is_removed_card(card: &Card) -> bool {
    card.is_face_card() && card.color() == Color::Red
}
