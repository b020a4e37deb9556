//! CLI command implementations

pub mod inspect;
pub mod play;
pub mod simulate;

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::{
    adapters::MsgPackRepository,
    policy::{BestResponse, CounterPolicy, MixedResponse},
    ports::ModelRepository,
    session::Session,
};

/// Counter policy selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Deterministic: always counter the most likely predicted move
    Best,
    /// Stochastic: sample the predicted move from the distribution
    Mixed,
}

impl PolicyKind {
    /// Build the chosen policy, seeding the stochastic one when requested.
    pub fn build(self, seed: Option<u64>) -> Box<dyn CounterPolicy> {
        match self {
            PolicyKind::Best => Box::new(BestResponse),
            PolicyKind::Mixed => match seed {
                Some(seed) => Box::new(MixedResponse::with_seed(seed)),
                None => Box::new(MixedResponse::new()),
            },
        }
    }
}

/// Build a session from CLI options: load a saved model when a path is
/// given (the `--order` flag is then taken from the model), otherwise start
/// a fresh one.
pub(crate) fn build_session(
    order: usize,
    policy: PolicyKind,
    seed: Option<u64>,
    model_path: Option<&Path>,
) -> Result<Session> {
    match model_path {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("reading model file {}", path.display()))?;
            Session::load_model_with_policy(&bytes, policy.build(seed))
                .with_context(|| format!("loading model from {}", path.display()))
        }
        None => Session::with_policy(order, policy.build(seed)).context("creating session"),
    }
}

/// Persist a session's model when a save path was requested.
pub(crate) fn save_if_requested(session: &Session, save_path: Option<&Path>) -> Result<()> {
    if let Some(path) = save_path {
        let repo = MsgPackRepository::new();
        repo.save(session, path)
            .with_context(|| format!("saving model to {}", path.display()))?;
        println!("Model saved to {}", path.display());
    }
    Ok(())
}
