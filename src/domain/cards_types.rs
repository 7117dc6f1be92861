//! Core card-related types: Card, Rank, Suit, Trump, TrumpConfig

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Position in canonical order (0..=3).
    pub fn index(self) -> usize {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks, ascending.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value, 2..=14 (11=Jack, 12=Queen, 13=King, 14=Ace).
    pub fn value(self) -> u8 {
        self.index() as u8 + 2
    }

    /// Position in ascending order (0..=12).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Honor ranks: J, Q, K, A.
    pub fn is_honor(self) -> bool {
        self >= Rank::Jack
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Deterministic unique id derived from suit + rank (0..=51).
    pub fn id(self) -> u8 {
        (self.suit.index() * 13 + self.rank.index()) as u8
    }
}

// Note: Ord/Eq on Card is only for stable hand sorting: suit order then rank
// order. Do not use for trick resolution or comparisons involving trump/lead.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Trump designation for a hand. `NoTrump` means trump play is disabled.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Trump {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
    NoTrump,
}

impl From<Suit> for Trump {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Spades => Trump::Spades,
            Suit::Hearts => Trump::Hearts,
            Suit::Diamonds => Trump::Diamonds,
            Suit::Clubs => Trump::Clubs,
        }
    }
}

impl Trump {
    pub fn suit(self) -> Option<Suit> {
        match self {
            Trump::Spades => Some(Suit::Spades),
            Trump::Hearts => Some(Suit::Hearts),
            Trump::Diamonds => Some(Suit::Diamonds),
            Trump::Clubs => Some(Suit::Clubs),
            Trump::NoTrump => None,
        }
    }
}

/// Per-hand trump configuration, set once per deal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TrumpConfig {
    pub trump: Trump,
    /// Forbid leading trump until trump has been played (unless the leader
    /// holds only trump).
    pub must_break: bool,
}

impl TrumpConfig {
    pub const NO_TRUMP: TrumpConfig = TrumpConfig {
        trump: Trump::NoTrump,
        must_break: false,
    };

    pub fn suited(suit: Suit, must_break: bool) -> Self {
        Self {
            trump: suit.into(),
            must_break,
        }
    }

    pub fn enabled(&self) -> bool {
        self.trump != Trump::NoTrump
    }

    pub fn suit(&self) -> Option<Suit> {
        self.trump.suit()
    }
}
