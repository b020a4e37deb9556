//! Rock-Paper-Scissors agent that learns to counter its opponent
//!
//! This crate provides:
//! - An append-only history of opponent moves
//! - An order-k Markov transition model with maximum-likelihood prediction
//! - Counter-move policies (deterministic best response and a mixed variant)
//! - Session and scored-match management
//! - Model persistence through a repository port (MessagePack adapter)

pub mod adapters;
pub mod cli;
pub mod error;
pub mod game;
pub mod history;
pub mod model;
pub mod moves;
pub mod opponents;
pub mod policy;
pub mod ports;
pub mod session;
pub mod utils;

pub use error::{Error, Result};
pub use game::{Match, MatchRules, MatchState, MatchStatus, RoundOutcome, RoundRecord};
pub use history::MoveHistory;
pub use model::{MarkovModel, Prediction, UNIFORM_PROBABILITY};
pub use moves::Move;
pub use policy::{BestResponse, CounterPolicy, MixedResponse};
pub use session::Session;
