//! Scripted opponents for simulations and tests.

use std::str::FromStr;

use rand::{prelude::IndexedRandom, rngs::StdRng};

use crate::{
    error::{Error, Result},
    moves::Move,
    utils::build_rng,
};

/// A source of opponent moves driving the agent from the outside.
pub trait Opponent: Send {
    /// Produce the opponent's move for the round. `last_agent_move` is the
    /// agent's move from the previous round, when one exists.
    fn next_move(&mut self, last_agent_move: Option<Move>) -> Move;

    /// Opponent name, used in summaries and logging.
    fn name(&self) -> &str;
}

/// Plays uniformly at random.
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: build_rng(seed),
        }
    }
}

impl Opponent for RandomOpponent {
    fn next_move(&mut self, _last_agent_move: Option<Move>) -> Move {
        *Move::ALL
            .choose(&mut self.rng)
            .unwrap_or(&Move::Rock)
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Plays the same move every round.
pub struct ConstantOpponent {
    mv: Move,
}

impl ConstantOpponent {
    pub fn new(mv: Move) -> Self {
        Self { mv }
    }
}

impl Opponent for ConstantOpponent {
    fn next_move(&mut self, _last_agent_move: Option<Move>) -> Move {
        self.mv
    }

    fn name(&self) -> &str {
        "constant"
    }
}

/// Cycles through a fixed move pattern, e.g. `RPS` repeated forever.
pub struct CycleOpponent {
    pattern: Vec<Move>,
    position: usize,
}

impl CycleOpponent {
    /// # Errors
    ///
    /// Returns [`Error::EmptyPattern`] for an empty pattern.
    pub fn new(pattern: Vec<Move>) -> Result<Self> {
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }
        Ok(Self {
            pattern,
            position: 0,
        })
    }

    /// Parse a pattern from single-letter tokens, e.g. `"rps"` or `"RRP"`.
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        let mut moves = Vec::with_capacity(pattern.len());
        for c in pattern.chars() {
            let mv =
                Move::from_char(c.to_ascii_uppercase()).ok_or_else(|| Error::ParseMove {
                    input: c.to_string(),
                })?;
            moves.push(mv);
        }
        Self::new(moves)
    }
}

impl Opponent for CycleOpponent {
    fn next_move(&mut self, _last_agent_move: Option<Move>) -> Move {
        let mv = self.pattern[self.position];
        self.position = (self.position + 1) % self.pattern.len();
        mv
    }

    fn name(&self) -> &str {
        "cycle"
    }
}

/// Mirrors the agent's previous move, opening with Rock.
pub struct CopycatOpponent;

impl Opponent for CopycatOpponent {
    fn next_move(&mut self, last_agent_move: Option<Move>) -> Move {
        last_agent_move.unwrap_or(Move::Rock)
    }

    fn name(&self) -> &str {
        "copycat"
    }
}

/// Parse an opponent description into a boxed opponent.
///
/// Recognized forms: `random`, `copycat`, `constant:<move>`, and
/// `cycle:<pattern>` (single-letter moves, e.g. `cycle:rps`).
///
/// # Errors
///
/// Returns [`Error::ParseOpponent`] for an unrecognized description and the
/// underlying parse error for a malformed move or pattern.
pub fn parse_opponent(input: &str, seed: Option<u64>) -> Result<Box<dyn Opponent>> {
    let trimmed = input.trim();
    if let Some(mv) = trimmed.strip_prefix("constant:") {
        return Ok(Box::new(ConstantOpponent::new(Move::from_str(mv)?)));
    }
    if let Some(pattern) = trimmed.strip_prefix("cycle:") {
        return Ok(Box::new(CycleOpponent::from_pattern(pattern)?));
    }
    match trimmed {
        "random" => Ok(Box::new(RandomOpponent::new(seed))),
        "copycat" => Ok(Box::new(CopycatOpponent)),
        other => Err(Error::ParseOpponent {
            input: other.to_string(),
            expected: "random, copycat, constant:<move>, cycle:<pattern>".to_string(),
        }),
    }
}
