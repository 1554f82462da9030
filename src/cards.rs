use std::fmt;
use std::str::FromStr;

/// Face value of a card, 2 through 14 (Jack = 11, Queen = 12, King = 13, Ace = 14).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Value {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Value {
    pub const ALL: [Value; 13] = [
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
        Value::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Jacks, Queens, Kings and Aces.
    pub const fn is_face_card(self) -> bool {
        matches!(self, Value::Jack | Value::Queen | Value::King | Value::Ace)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
            Value::Ace => "A",
        }
    }

    /// Position within [`Value::ALL`].
    pub const fn index(self) -> usize {
        self as usize - 2
    }

    pub const fn from_u8(v: u8) -> Option<Value> {
        match v {
            2 => Some(Value::Two),
            3 => Some(Value::Three),
            4 => Some(Value::Four),
            5 => Some(Value::Five),
            6 => Some(Value::Six),
            7 => Some(Value::Seven),
            8 => Some(Value::Eight),
            9 => Some(Value::Nine),
            10 => Some(Value::Ten),
            11 => Some(Value::Jack),
            12 => Some(Value::Queen),
            13 => Some(Value::King),
            14 => Some(Value::Ace),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValueParseError {
    #[error("invalid value: '{0}'")]
    Invalid(String),
}

impl FromStr for Value {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let v = match t.to_ascii_uppercase().as_str() {
            "J" => Value::Jack,
            "Q" => Value::Queen,
            "K" => Value::King,
            "A" => Value::Ace,
            "T" => Value::Ten,
            num => num.parse::<u8>().ok().and_then(Value::from_u8).ok_or_else(|| {
                ValueParseError::Invalid(s.to_string())
            })?,
        };
        Ok(v)
    }
}

/// Red for Hearts and Diamonds, black for Spades and Clubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// The four suits, in the fixed order used to build a full deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub const fn color(self) -> Color {
        match self {
            Suit::Spades | Suit::Clubs => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
        }
    }

    /// Position within [`Suit::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        let name = t.to_ascii_lowercase();
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == name)
            .ok_or_else(|| SuitParseError::Invalid(s.to_string()))
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        let c = c.to_ascii_lowercase();
        Suit::ALL
            .into_iter()
            .find(|suit| suit.to_char() == c || suit.symbol() == c)
            .ok_or_else(|| SuitParseError::Invalid(c.to_string()))
    }
}

/// A playing card. Cards are plain values: they are moved between piles, never mutated.
///
/// Ordering is suit-major (in [`Suit::ALL`] order) then by value, which is the order
/// [`Deck::standard`](crate::deck::Deck::standard) produces.
///
/// ```
/// use cards_rs::cards::{Card, Color, Suit, Value};
///
/// let card = Card::new(Suit::Hearts, Value::Queen);
/// assert_eq!(card.to_string(), "Q♥");
/// assert_eq!(card.color(), Color::Red);
/// assert!(card.is_face_card());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    suit: Suit,
    value: Value,
}

impl Card {
    pub const fn new(suit: Suit, value: Value) -> Self {
        Self { suit, value }
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn value(self) -> Value {
        self.value
    }

    pub const fn color(self) -> Color {
        self.suit.color()
    }

    pub const fn is_face_card(self) -> bool {
        self.value.is_face_card()
    }

    /// The glyph from the Unicode "Playing Cards" block.
    ///
    /// The block skips the Knight (`U+1F0xC`), so Queen and King are shifted past it.
    pub fn unicode(self) -> char {
        let base = 0x1F0A1 + 0x10 * self.suit.index() as u32;
        let offset = match self.value {
            Value::Ace => 0,
            Value::Queen | Value::King => self.value.value() as u32,
            v => v.value() as u32 - 1,
        };
        char::from_u32(base + offset).unwrap_or('?')
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Value(#[from] ValueParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // value is everything before the last char; suit is the last char
        let Some(suit_ch) = t.chars().last() else {
            return Err(CardParseError::Invalid(s.to_string()));
        };
        let value_str = &t[..t.len() - suit_ch.len_utf8()];
        if value_str.is_empty() {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        let value = Value::from_str(value_str)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(suit, value))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use cards_rs::cards::{parse_cards, Card, Suit, Value};
///
/// let cards = parse_cards("As, 10h Qd").unwrap();
/// assert_eq!(cards[0], Card::new(Suit::Spades, Value::Ace));
/// assert_eq!(cards[1], Card::new(Suit::Hearts, Value::Ten));
/// assert_eq!(cards[2], Card::new(Suit::Diamonds, Value::Queen));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
