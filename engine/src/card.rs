use core::fmt;
use std::fmt::Display;
use std::str::FromStr;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::error::{Result, UnoError};

#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash,
)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Wild,
}

/// Colors a wild-family card may be bound to when played.
pub const PLAYABLE_COLORS: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

impl Color {
    pub fn symbol(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Blue => 'b',
            Color::Yellow => 'y',
            Color::Wild => '_',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'r' => Some(Color::Red),
            'g' => Some(Color::Green),
            'b' => Some(Color::Blue),
            'y' => Some(Color::Yellow),
            '_' => Some(Color::Wild),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Face value, `0` to `9`.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    WildDrawFour,
    Wild,
}

impl Rank {
    /// Single symbol used by the card codec: `0-9`, then `a-e` for the
    /// draw-two, reverse, skip, wild-draw-four and wild ranks.
    pub fn symbol(self) -> char {
        match self {
            Rank::Number(number) => {
                debug_assert!(number <= 9, "numbered ranks run from 0 to 9");
                char::from(b'0' + number)
            }
            Rank::DrawTwo => 'a',
            Rank::Reverse => 'b',
            Rank::Skip => 'c',
            Rank::WildDrawFour => 'd',
            Rank::Wild => 'e',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '0'..='9' => symbol.to_digit(10).map(|digit| Rank::Number(digit as u8)),
            'a' => Some(Rank::DrawTwo),
            'b' => Some(Rank::Reverse),
            'c' => Some(Rank::Skip),
            'd' => Some(Rank::WildDrawFour),
            'e' => Some(Rank::Wild),
            _ => None,
        }
    }

    pub fn is_action(self) -> bool {
        matches!(
            self,
            Rank::Skip | Rank::Reverse | Rank::DrawTwo | Rank::WildDrawFour
        )
    }

    pub fn is_wild_family(self) -> bool {
        matches!(self, Rank::Wild | Rank::WildDrawFour)
    }

    pub fn is_stackable(self) -> bool {
        matches!(self, Rank::DrawTwo | Rank::WildDrawFour)
    }

    /// Cards owed to the victim per stacked copy of this rank.
    pub fn draw_penalty(self) -> Option<usize> {
        match self {
            Rank::DrawTwo => Some(2),
            Rank::WildDrawFour => Some(4),
            _ => None,
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(number) => write!(f, "{number}"),
            Rank::Skip => write!(f, "Skip"),
            Rank::Reverse => write!(f, "Reverse"),
            Rank::DrawTwo => write!(f, "Draw Two"),
            Rank::WildDrawFour => write!(f, "Wild Draw Four"),
            Rank::Wild => write!(f, "Wild"),
        }
    }
}

/// An immutable card value.
///
/// Wild-family cards are created with [`Color::Wild`] and only take a real
/// color through [`Card::with_color`] when they are played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    color: Color,
    rank: Rank,
}

impl Card {
    pub const fn new(color: Color, rank: Rank) -> Self {
        if let Rank::Number(number) = rank {
            debug_assert!(number <= 9, "numbered ranks run from 0 to 9");
        }
        Self { color, rank }
    }

    pub const fn wild() -> Self {
        Self::new(Color::Wild, Rank::Wild)
    }

    pub const fn wild_draw_four() -> Self {
        Self::new(Color::Wild, Rank::WildDrawFour)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Parses a two-symbol token such as `r7`, `ga` or `_d`.
    pub fn decode(token: &str) -> Result<Self> {
        let malformed = || UnoError::MalformedCard(token.to_string());

        let mut symbols = token.chars();
        let (Some(color), Some(rank), None) = (symbols.next(), symbols.next(), symbols.next())
        else {
            return Err(malformed());
        };

        let color = Color::from_symbol(color).ok_or_else(malformed)?;
        let rank = Rank::from_symbol(rank).ok_or_else(malformed)?;

        if color == Color::Wild && !rank.is_wild_family() {
            return Err(malformed());
        }

        Ok(Self::new(color, rank))
    }

    pub fn encode(&self) -> String {
        format!("{}{}", self.color.symbol(), self.rank.symbol())
    }

    pub fn is_action(&self) -> bool {
        self.rank.is_action()
    }

    pub fn is_wild_family(&self) -> bool {
        self.rank.is_wild_family()
    }

    /// Whether this card carries an effect owed to the next player.
    pub fn has_effect(&self) -> bool {
        self.is_action() || self.is_wild_family()
    }

    /// Only draw-two onto draw-two and wild-draw-four onto wild-draw-four
    /// stack; the two families never mix.
    pub fn stackable_with(&self, other: &Card) -> bool {
        self.rank == other.rank && self.rank.is_stackable()
    }

    /// Returns a copy bound to `color`. Colored ranks keep their color.
    pub fn with_color(self, color: Color) -> Self {
        if self.is_wild_family() {
            Self::new(color, self.rank)
        } else {
            self
        }
    }

    /// The card as it exists in the deck, ignoring any color bound at play.
    pub fn identity(self) -> Self {
        self.with_color(Color::Wild)
    }
}

impl FromStr for Card {
    type Err = UnoError;

    fn from_str(token: &str) -> Result<Self> {
        Self::decode(token)
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.color, self.rank.is_wild_family()) {
            (Color::Wild, _) => write!(f, "{}", self.rank),
            (color, true) => write!(f, "{} ({})", self.rank, color),
            (color, false) => write!(f, "{} {}", color, self.rank),
        }
    }
}
