//! Order-k Markov transition model over opponent move sequences.
//!
//! The model counts how often each move followed each window of the last `k`
//! moves. Queries return a maximum-likelihood distribution over the next
//! move, with an exact uniform fallback for contexts that have never been
//! observed. No smoothing is applied: per-context estimates are independent,
//! and seeing one context never changes the estimate for another.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    moves::Move,
};

/// Probability assigned to every move when a context has no observations.
///
/// The same constant is used by the implementation and by tests, so equality
/// comparisons against the uniform distribution are stable.
pub const UNIFORM_PROBABILITY: f64 = 1.0 / 3.0;

/// A probability distribution over the opponent's next move.
///
/// Ephemeral: recomputed on each query, never stored. Values lie in [0, 1]
/// and sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    probs: [f64; Move::COUNT],
}

impl Prediction {
    /// The cold-start distribution: 1/3 for every move.
    pub fn uniform() -> Self {
        Prediction {
            probs: [UNIFORM_PROBABILITY; Move::COUNT],
        }
    }

    /// Maximum-likelihood estimate from raw observation counts.
    ///
    /// All-zero counts fall back to the uniform distribution.
    pub fn from_counts(counts: &[u32; Move::COUNT]) -> Self {
        let total: u32 = counts.iter().sum();
        if total == 0 {
            return Prediction::uniform();
        }
        let mut probs = [0.0; Move::COUNT];
        for (p, &count) in probs.iter_mut().zip(counts) {
            *p = f64::from(count) / f64::from(total);
        }
        Prediction { probs }
    }

    /// Probability of the opponent playing `mv` next.
    pub fn probability(&self, mv: Move) -> f64 {
        self.probs[mv.index()]
    }

    /// Iterate over (move, probability) pairs in tie-break priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Move, f64)> + '_ {
        Move::ALL.into_iter().map(|mv| (mv, self.probability(mv)))
    }

    /// The most probable move, breaking ties by the fixed priority
    /// Rock > Paper > Scissors.
    pub fn most_likely(&self) -> Move {
        let mut best = Move::Rock;
        for mv in Move::ALL {
            if self.probs[mv.index()] > self.probs[best.index()] {
                best = mv;
            }
        }
        best
    }
}

/// Current version of the serialized model format.
const MODEL_FORMAT_VERSION: u32 = 1;

/// Serialized form of a model: {version, order, transition table}.
#[derive(Debug, Serialize, Deserialize)]
struct SavedModel {
    version: u32,
    order: usize,
    transitions: BTreeMap<String, [u32; Move::COUNT]>,
}

/// Transition-frequency model of fixed order `k`.
///
/// Contexts are encoded as strings of single-letter moves (e.g. `"RP"` for
/// a Rock-then-Paper window), each mapping to per-move observation counts.
/// Counts only increase and the table is never pruned; it is bounded by the
/// finite alphabet (3^k keys, 3 outcomes each).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkovModel {
    order: usize,
    transitions: BTreeMap<String, [u32; Move::COUNT]>,
}

impl MarkovModel {
    /// Create an empty model of the given order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroOrder`] for `order == 0`: a model that conditions
    /// on nothing has no transition to learn.
    pub fn new(order: usize) -> Result<Self> {
        if order == 0 {
            return Err(Error::ZeroOrder);
        }
        Ok(MarkovModel {
            order,
            transitions: BTreeMap::new(),
        })
    }

    /// The lookback length `k` fixed at construction.
    pub fn order(&self) -> usize {
        self.order
    }

    fn context_key(&self, context: &[Move]) -> Result<String> {
        if context.len() != self.order {
            return Err(Error::ContextLength {
                expected: self.order,
                got: context.len(),
            });
        }
        Ok(context.iter().map(|mv| mv.as_char()).collect())
    }

    /// Record that `observed` followed the `context` window, incrementing the
    /// corresponding count by one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContextLength`] if `context` does not have exactly
    /// `order` elements. A short window is the caller's signal to skip the
    /// update entirely, never to pad or truncate.
    pub fn observe(&mut self, context: &[Move], observed: Move) -> Result<()> {
        let key = self.context_key(context)?;
        let counts = self
            .transitions
            .entry(key)
            .or_insert([0; Move::COUNT]);
        counts[observed.index()] += 1;
        Ok(())
    }

    /// Maximum-likelihood distribution over the next move given `context`.
    ///
    /// An unseen context yields the exact uniform distribution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContextLength`] if `context` does not have exactly
    /// `order` elements.
    pub fn predict(&self, context: &[Move]) -> Result<Prediction> {
        let key = self.context_key(context)?;
        Ok(match self.transitions.get(&key) {
            Some(counts) => Prediction::from_counts(counts),
            None => Prediction::uniform(),
        })
    }

    /// The most likely next move for `context`, with the Rock > Paper >
    /// Scissors tie-break.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContextLength`] if `context` does not have exactly
    /// `order` elements.
    pub fn most_likely(&self, context: &[Move]) -> Result<Move> {
        Ok(self.predict(context)?.most_likely())
    }

    /// Observation count for a single (context, next move) transition.
    pub fn count(&self, context: &[Move], mv: Move) -> Result<u32> {
        let key = self.context_key(context)?;
        Ok(self
            .transitions
            .get(&key)
            .map_or(0, |counts| counts[mv.index()]))
    }

    /// Number of distinct contexts observed so far.
    pub fn context_count(&self) -> usize {
        self.transitions.len()
    }

    /// Total number of transitions observed across all contexts.
    pub fn observation_total(&self) -> u64 {
        self.transitions
            .values()
            .flat_map(|counts| counts.iter())
            .map(|&count| u64::from(count))
            .sum()
    }

    /// Iterate over (context key, counts) entries in key order.
    pub fn contexts(&self) -> impl Iterator<Item = (&str, &[u32; Move::COUNT])> {
        self.transitions
            .iter()
            .map(|(key, counts)| (key.as_str(), counts))
    }

    /// Drop every learned transition, keeping the order.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    /// Serialize the model (order and transition table) to opaque bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModelCodec`] if encoding fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let saved = SavedModel {
            version: MODEL_FORMAT_VERSION,
            order: self.order,
            transitions: self.transitions.clone(),
        };
        rmp_serde::to_vec(&saved).map_err(|e| Error::ModelCodec {
            operation: "encode model to MessagePack".to_string(),
            message: e.to_string(),
        })
    }

    /// Reconstruct a model from bytes produced by [`MarkovModel::to_bytes`].
    ///
    /// The payload is structurally validated; partially invalid data is
    /// rejected rather than silently accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModelCodec`] for undecodable bytes,
    /// [`Error::ModelVersion`] for an unknown format version, and
    /// [`Error::ZeroOrder`], [`Error::ModelKeyLength`], or
    /// [`Error::ModelKeyCharacter`] for structurally invalid contents.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let saved: SavedModel = rmp_serde::from_slice(bytes).map_err(|e| Error::ModelCodec {
            operation: "decode model from MessagePack".to_string(),
            message: e.to_string(),
        })?;

        if saved.version != MODEL_FORMAT_VERSION {
            return Err(Error::ModelVersion {
                found: saved.version,
                current: MODEL_FORMAT_VERSION,
            });
        }
        if saved.order == 0 {
            return Err(Error::ZeroOrder);
        }
        for key in saved.transitions.keys() {
            if key.chars().count() != saved.order {
                return Err(Error::ModelKeyLength {
                    declared: saved.order,
                    key: key.clone(),
                    got: key.chars().count(),
                });
            }
            if let Some(character) = key.chars().find(|&c| Move::from_char(c).is_none()) {
                return Err(Error::ModelKeyCharacter {
                    character,
                    key: key.clone(),
                });
            }
        }

        Ok(MarkovModel {
            order: saved.order,
            transitions: saved.transitions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_order_rejected() {
        assert!(matches!(MarkovModel::new(0), Err(Error::ZeroOrder)));
    }

    #[test]
    fn test_unseen_context_is_exactly_uniform() {
        let model = MarkovModel::new(1).unwrap();
        let prediction = model.predict(&[Move::Rock]).unwrap();
        for mv in Move::ALL {
            assert_eq!(prediction.probability(mv), UNIFORM_PROBABILITY);
        }
    }

    #[test]
    fn test_observe_increments_single_count() {
        let mut model = MarkovModel::new(1).unwrap();
        for _ in 0..5 {
            model.observe(&[Move::Rock], Move::Paper).unwrap();
        }

        assert_eq!(model.count(&[Move::Rock], Move::Paper).unwrap(), 5);
        assert_eq!(model.count(&[Move::Rock], Move::Rock).unwrap(), 0);
        // Other contexts stay untouched.
        assert_eq!(model.count(&[Move::Paper], Move::Paper).unwrap(), 0);
        assert_eq!(model.context_count(), 1);
        assert_eq!(model.observation_total(), 5);
    }

    #[test]
    fn test_prediction_is_per_context_mle() {
        let mut model = MarkovModel::new(1).unwrap();
        model.observe(&[Move::Rock], Move::Paper).unwrap();
        model.observe(&[Move::Rock], Move::Paper).unwrap();
        model.observe(&[Move::Rock], Move::Scissors).unwrap();

        let prediction = model.predict(&[Move::Rock]).unwrap();
        assert_eq!(prediction.probability(Move::Paper), 2.0 / 3.0);
        assert_eq!(prediction.probability(Move::Scissors), 1.0 / 3.0);
        assert_eq!(prediction.probability(Move::Rock), 0.0);

        // An unrelated context is still uniform, not near-zero.
        let other = model.predict(&[Move::Scissors]).unwrap();
        assert_eq!(other.probability(Move::Rock), UNIFORM_PROBABILITY);
    }

    #[test]
    fn test_tie_break_prefers_rock_then_paper() {
        let mut model = MarkovModel::new(1).unwrap();
        for mv in Move::ALL {
            model.observe(&[Move::Rock], mv).unwrap();
        }
        assert_eq!(model.most_likely(&[Move::Rock]).unwrap(), Move::Rock);

        let mut model = MarkovModel::new(1).unwrap();
        model.observe(&[Move::Rock], Move::Paper).unwrap();
        model.observe(&[Move::Rock], Move::Scissors).unwrap();
        assert_eq!(model.most_likely(&[Move::Rock]).unwrap(), Move::Paper);
    }

    #[test]
    fn test_wrong_context_length_rejected() {
        let mut model = MarkovModel::new(2).unwrap();
        let err = model.observe(&[Move::Rock], Move::Paper).unwrap_err();
        assert!(matches!(
            err,
            Error::ContextLength {
                expected: 2,
                got: 1
            }
        ));
        assert!(model.predict(&[]).is_err());
        assert!(model.predict(&[Move::Rock; 3]).is_err());
    }

    #[test]
    fn test_prediction_sums_to_one() {
        let mut model = MarkovModel::new(1).unwrap();
        model.observe(&[Move::Paper], Move::Rock).unwrap();
        model.observe(&[Move::Paper], Move::Scissors).unwrap();

        let prediction = model.predict(&[Move::Paper]).unwrap();
        let sum: f64 = Move::ALL.iter().map(|&mv| prediction.probability(mv)).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_clear_forgets_transitions_keeps_order() {
        let mut model = MarkovModel::new(2).unwrap();
        model
            .observe(&[Move::Rock, Move::Paper], Move::Rock)
            .unwrap();
        model.clear();

        assert_eq!(model.order(), 2);
        assert_eq!(model.context_count(), 0);
        let prediction = model.predict(&[Move::Rock, Move::Paper]).unwrap();
        assert_eq!(prediction.probability(Move::Rock), UNIFORM_PROBABILITY);
    }
}
