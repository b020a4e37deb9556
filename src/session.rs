//! A game session: history, model, and policy with explicit lifecycle.

use crate::{
    error::Result,
    history::MoveHistory,
    model::{MarkovModel, Prediction},
    moves::Move,
    policy::{BestResponse, CounterPolicy},
};

/// One agent-versus-opponent session.
///
/// Owns a [`MoveHistory`]/[`MarkovModel`] pair exclusively; concurrent
/// matches each get their own `Session` with no shared state. All operations
/// are synchronous, bounded computations over in-memory data.
pub struct Session {
    history: MoveHistory,
    model: MarkovModel,
    policy: Box<dyn CounterPolicy>,
}

impl Session {
    /// Create a session with the given model order and the default
    /// deterministic best-response policy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ZeroOrder`] for `order == 0`.
    pub fn new(order: usize) -> Result<Self> {
        Self::with_policy(order, Box::new(BestResponse))
    }

    /// Create a session with an explicit counter policy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ZeroOrder`] for `order == 0`.
    pub fn with_policy(order: usize, policy: Box<dyn CounterPolicy>) -> Result<Self> {
        Ok(Session {
            history: MoveHistory::new(),
            model: MarkovModel::new(order)?,
            policy,
        })
    }

    /// The model's lookback length.
    pub fn order(&self) -> usize {
        self.model.order()
    }

    /// The opponent moves recorded so far.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// The learned transition model.
    pub fn model(&self) -> &MarkovModel {
        &self.model
    }

    /// Name of the active counter policy.
    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    /// Feed one observed opponent move.
    ///
    /// Updates the model against the previous `order`-move window, then
    /// appends the move to the history. While fewer than `order` prior moves
    /// exist there is no valid context yet and the update is skipped.
    pub fn record_opponent_move(&mut self, mv: Move) -> Result<()> {
        if let Some(context) = self.history.last_k(self.model.order()) {
            self.model.observe(context, mv)?;
        }
        self.history.append(mv);
        Ok(())
    }

    /// The model's current distribution over the opponent's next move.
    ///
    /// Uniform while the history is still shorter than the model order.
    pub fn prediction(&self) -> Result<Prediction> {
        match self.history.last_k(self.model.order()) {
            Some(context) => self.model.predict(context),
            None => Ok(Prediction::uniform()),
        }
    }

    /// The agent's move for the upcoming round: predict over the current
    /// window, then let the policy pick the counter.
    pub fn next_agent_move(&mut self) -> Result<Move> {
        let prediction = self.prediction()?;
        Ok(self.policy.choose(&prediction))
    }

    /// Clear history and transition table for a fresh match, keeping the
    /// order and policy of this session.
    pub fn reset(&mut self) {
        self.history.clear();
        self.model.clear();
    }

    /// Serialize the learned model (order and transition table) to opaque
    /// bytes. The policy is not part of the model and is not serialized.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ModelCodec`] if encoding fails.
    pub fn save_model(&self) -> Result<Vec<u8>> {
        self.model.to_bytes()
    }

    /// Rebuild a session from bytes produced by [`Session::save_model`],
    /// using the default best-response policy. The history is not part of
    /// the model; the restored session starts with an empty one.
    ///
    /// # Errors
    ///
    /// Returns a load failure if the payload is undecodable or structurally
    /// invalid (see [`MarkovModel::from_bytes`]).
    pub fn load_model(bytes: &[u8]) -> Result<Self> {
        Self::load_model_with_policy(bytes, Box::new(BestResponse))
    }

    /// Rebuild a session from saved model bytes with an explicit policy.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Session::load_model`].
    pub fn load_model_with_policy(bytes: &[u8], policy: Box<dyn CounterPolicy>) -> Result<Self> {
        Ok(Session {
            history: MoveHistory::new(),
            model: MarkovModel::from_bytes(bytes)?,
            policy,
        })
    }
}
