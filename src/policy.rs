//! Counter-move policies.
//!
//! A policy converts a prediction of the opponent's next move into the move
//! the agent commits to for the round. The deterministic best response is
//! the default; the mixed policy is a drop-in alternative that samples the
//! predicted move from the distribution instead of always countering the
//! single best guess, which makes the agent itself harder to predict.

use rand::rngs::StdRng;

use crate::{
    model::Prediction,
    moves::Move,
    utils::{build_rng, weighted_sample},
};

/// Decision policy turning a [`Prediction`] into the agent's move.
pub trait CounterPolicy: Send {
    /// Choose the agent's move for the upcoming round.
    fn choose(&mut self, prediction: &Prediction) -> Move;

    /// Policy name, used for identification in summaries and logging.
    fn name(&self) -> &str;
}

/// Deterministic policy: counter the single most likely opponent move,
/// using the fixed Rock > Paper > Scissors tie-break.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestResponse;

impl CounterPolicy for BestResponse {
    fn choose(&mut self, prediction: &Prediction) -> Move {
        prediction.most_likely().counter()
    }

    fn name(&self) -> &str {
        "best-response"
    }
}

/// Stochastic policy: sample the opponent's predicted move proportionally to
/// the distribution, then counter the sample.
#[derive(Debug, Clone)]
pub struct MixedResponse {
    rng: StdRng,
    seed: Option<u64>,
}

impl MixedResponse {
    /// Create a mixed policy with a fresh RNG.
    pub fn new() -> Self {
        Self {
            rng: build_rng(None),
            seed: None,
        }
    }

    /// Create a mixed policy with a deterministic seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: build_rng(Some(seed)),
            seed: Some(seed),
        }
    }

    /// The seed this policy was built with, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for MixedResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterPolicy for MixedResponse {
    fn choose(&mut self, prediction: &Prediction) -> Move {
        let items: Vec<(Move, f64)> = prediction.iter().collect();
        let predicted = weighted_sample(&mut self.rng, &items).unwrap_or(Move::Rock);
        predicted.counter()
    }

    fn name(&self) -> &str {
        "mixed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MarkovModel;

    #[test]
    fn test_best_response_counters_most_likely() {
        let mut model = MarkovModel::new(1).unwrap();
        model.observe(&[Move::Rock], Move::Scissors).unwrap();
        model.observe(&[Move::Rock], Move::Scissors).unwrap();

        let prediction = model.predict(&[Move::Rock]).unwrap();
        let mut policy = BestResponse;
        assert_eq!(policy.choose(&prediction), Move::Rock);
    }

    #[test]
    fn test_best_response_on_uniform_counters_rock() {
        let mut policy = BestResponse;
        assert_eq!(policy.choose(&Prediction::uniform()), Move::Paper);
    }

    #[test]
    fn test_mixed_response_counters_certain_prediction() {
        let prediction = Prediction::from_counts(&[0, 4, 0]);
        let mut policy = MixedResponse::with_seed(9);
        for _ in 0..20 {
            assert_eq!(policy.choose(&prediction), Move::Scissors);
        }
    }

    #[test]
    fn test_mixed_response_seed_reproducible() {
        let prediction = Prediction::uniform();
        let mut a = MixedResponse::with_seed(123);
        let mut b = MixedResponse::with_seed(123);
        for _ in 0..10 {
            assert_eq!(a.choose(&prediction), b.choose(&prediction));
        }
    }
}
