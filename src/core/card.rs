//! Cards for a standard 52-card deck.
//!
//! - `CardId` is a compact identity in `0..52` (`suit * 13 + rank`).
//! - `Card` layers mutable face state on top of that identity.
//! - `Suit`, `Rank`, and `Color` give readable structure to the encoding.
//!
//! ## Usage
//!
//! ```
//! use klondike_engine::core::{Card, CardId, Color, Rank, Suit};
//!
//! let card = Card::face_up(CardId::new(Suit::Hearts, Rank::ACE));
//! assert_eq!(card.suit(), Suit::Hearts);
//! assert_eq!(card.rank(), Rank::ACE);
//! assert_eq!(card.color(), Color::Red);
//! assert_eq!(card.to_string(), "AH");
//! ```

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Number of suits in a standard deck.
pub const SUIT_COUNT: u8 = 4;
/// Number of ranks per suit.
pub const RANK_COUNT: u8 = 13;
/// Number of cards in a standard deck.
pub const DECK_SIZE: u8 = SUIT_COUNT * RANK_COUNT;

/// The four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Hearts = 0,
    Diamonds = 1,
    Clubs = 2,
    Spades = 3,
}

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    /// All suits in a fixed, reproducible order.
    pub const ALL: [Suit; SUIT_COUNT as usize] = [
        Suit::Hearts,
        Suit::Diamonds,
        Suit::Clubs,
        Suit::Spades,
    ];

    /// Construct a suit from its index in `0..4`.
    ///
    /// Panics if `index >= 4`.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Suit::Hearts,
            1 => Suit::Diamonds,
            2 => Suit::Clubs,
            3 => Suit::Spades,
            _ => panic!("invalid suit index: {index}"),
        }
    }

    /// Index of this suit in `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Color of this suit: hearts and diamonds are red.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Single-character representation: 'H', 'D', 'C', or 'S'.
    #[must_use]
    pub const fn short_char(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

/// A card rank in `1..=13` (Ace = 1, King = 13).
///
/// Rank arithmetic is what the placement rules are written in terms of
/// ("one higher than the foundation top", "one lower than the column top"),
/// so this is a validated numeric newtype rather than a 13-variant enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const TWO: Rank = Rank(2);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Construct a rank from its number in `1..=13`.
    ///
    /// Panics if `number` is outside that range.
    #[must_use]
    pub fn new(number: u8) -> Self {
        assert!(
            (1..=RANK_COUNT).contains(&number),
            "invalid rank number: {number}"
        );
        Rank(number)
    }

    /// Rank number in `1..=13`.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Iterate all ranks, Ace through King.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=RANK_COUNT).map(Rank)
    }

    /// The rank one above this one, or `None` for King.
    #[must_use]
    pub fn successor(self) -> Option<Rank> {
        if self.0 < RANK_COUNT {
            Some(Rank(self.0 + 1))
        } else {
            None
        }
    }

    /// True if this rank is exactly one above `other`.
    #[must_use]
    pub const fn is_one_above(self, other: Rank) -> bool {
        self.0 == other.0 + 1
    }

    /// Single-character representation: 'A', '2'..'9', 'T', 'J', 'Q', 'K'.
    #[must_use]
    pub fn short_char(self) -> char {
        match self.0 {
            1 => 'A',
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            n => (b'0' + n) as char,
        }
    }
}

/// Compact card identity: an index in `0..52`.
///
/// The mapping is `suit.index() * 13 + (rank.number() - 1)`. Two cards with
/// the same `CardId` are the same physical card regardless of face state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(u8);

impl CardId {
    /// Create a card identity from suit and rank.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        CardId(suit.index() * RANK_COUNT + (rank.number() - 1))
    }

    /// Create a card identity from a raw index in `0..52`.
    ///
    /// Panics if `index >= 52`.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        assert!(index < DECK_SIZE, "invalid card index: {index}");
        CardId(index)
    }

    /// Raw `0..52` index of this card.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Suit of this card.
    #[must_use]
    pub fn suit(self) -> Suit {
        Suit::from_index(self.0 / RANK_COUNT)
    }

    /// Rank of this card.
    #[must_use]
    pub fn rank(self) -> Rank {
        Rank::new(self.0 % RANK_COUNT + 1)
    }

    /// Color of this card.
    #[must_use]
    pub fn color(self) -> Color {
        self.suit().color()
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank().short_char(), self.suit().short_char())
    }
}

/// A card in play: immutable identity plus mutable face state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn face_down(id: CardId) -> Self {
        Card { id, face_up: false }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up(id: CardId) -> Self {
        Card { id, face_up: true }
    }

    /// Identity of this card.
    #[must_use]
    pub const fn id(self) -> CardId {
        self.id
    }

    /// Suit of this card.
    #[must_use]
    pub fn suit(self) -> Suit {
        self.id.suit()
    }

    /// Rank of this card.
    #[must_use]
    pub fn rank(self) -> Rank {
        self.id.rank()
    }

    /// Color of this card.
    #[must_use]
    pub fn color(self) -> Color {
        self.id.color()
    }

    /// Is this card face-up?
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        self.face_up
    }

    /// Set the face state.
    pub fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    /// Same card, face-up.
    #[must_use]
    pub const fn turned_up(self) -> Self {
        Card { id: self.id, face_up: true }
    }

    /// Same card, face-down.
    #[must_use]
    pub const fn turned_down(self) -> Self {
        Card { id: self.id, face_up: false }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Face-down cards print bracketed so pile dumps stay readable.
        if self.face_up {
            write!(f, "{}", self.id)
        } else {
            write!(f, "[{}]", self.id)
        }
    }
}

/// The standard 52-card deck in a fixed order, all cards face-down.
///
/// Suits follow `Suit::ALL`, ranks Ace through King within each suit.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE as usize);
    for suit in Suit::ALL {
        for rank in Rank::all() {
            deck.push(Card::face_down(CardId::new(suit, rank)));
        }
    }
    deck
}

/// A deterministically shuffled standard deck for the given seed.
///
/// Same seed, same deck - tests and replays rely on this.
#[must_use]
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = standard_deck();
    let mut rng = GameRng::new(seed);
    rng.shuffle(&mut deck);
    deck
}
