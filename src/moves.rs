//! The Rock-Paper-Scissors move alphabet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A move in Rock-Paper-Scissors.
///
/// Compared by value; the declaration order doubles as the deterministic
/// tie-break priority (Rock before Paper before Scissors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves in tie-break priority order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Size of the move alphabet.
    pub const COUNT: usize = 3;

    /// Index into per-move count arrays (Rock=0, Paper=1, Scissors=2).
    pub fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    /// Inverse of [`Move::index`].
    pub fn from_index(index: usize) -> Option<Move> {
        Move::ALL.get(index).copied()
    }

    /// Single-letter encoding used in transition keys and CLI patterns.
    pub fn as_char(self) -> char {
        match self {
            Move::Rock => 'R',
            Move::Paper => 'P',
            Move::Scissors => 'S',
        }
    }

    /// Inverse of [`Move::as_char`]. Case-sensitive.
    pub fn from_char(c: char) -> Option<Move> {
        match c {
            'R' => Some(Move::Rock),
            'P' => Some(Move::Paper),
            'S' => Some(Move::Scissors),
            _ => None,
        }
    }

    /// The move that defeats this one (Rock→Paper, Paper→Scissors, Scissors→Rock).
    pub fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Whether this move beats the other under the fixed RPS relation.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Move {
    type Err = crate::Error;

    /// Accepts single letters and full move names, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "rock" => Ok(Move::Rock),
            "p" | "paper" => Ok(Move::Paper),
            "s" | "scissors" => Ok(Move::Scissors),
            other => Err(crate::Error::ParseMove {
                input: other.to_string(),
            }),
        }
    }
}
