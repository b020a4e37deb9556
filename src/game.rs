//! Scored match management around a [`Session`].

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    moves::Move,
    session::Session,
};

/// Result of a single round, from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    Win,
    Loss,
    Tie,
}

/// Determine the round result from the player's and the agent's moves.
pub fn round_outcome(player: Move, agent: Move) -> RoundOutcome {
    if player == agent {
        RoundOutcome::Tie
    } else if player.beats(agent) {
        RoundOutcome::Win
    } else {
        RoundOutcome::Loss
    }
}

/// Overall match status, from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    Pending,
    Won,
    Lost,
    Drawn,
}

/// Termination rules for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    /// The match ends once the turn counter reaches this value.
    pub turn_limit: u32,
    /// Either side winning this many points ends the match immediately.
    pub target_score: u32,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            turn_limit: 30,
            target_score: 10,
        }
    }
}

/// One completed round: both moves and the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub player: Move,
    pub agent: Move,
    pub outcome: RoundOutcome,
}

/// Scoreboard and round history of a match in progress.
///
/// A round win adds a point to the winner and takes one from the loser,
/// saturating at zero. Ties leave scores unchanged. The turn counter starts
/// at 1 and advances every round regardless of outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    player_score: u32,
    agent_score: u32,
    turn: u32,
    rounds: Vec<RoundRecord>,
    status: MatchStatus,
    rules: MatchRules,
}

impl MatchState {
    /// Start a fresh scoreboard under the given rules.
    pub fn new(rules: MatchRules) -> Self {
        Self {
            player_score: 0,
            agent_score: 0,
            turn: 1,
            rounds: Vec::new(),
            status: MatchStatus::Pending,
            rules,
        }
    }

    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    pub fn agent_score(&self) -> u32 {
        self.agent_score
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn rules(&self) -> MatchRules {
        self.rules
    }

    /// All rounds played so far, oldest first.
    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    /// The most recent round, if any has been played.
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.rounds.last()
    }

    pub fn is_finished(&self) -> bool {
        self.status != MatchStatus::Pending
    }

    pub(crate) fn record_round(&mut self, record: RoundRecord) {
        match record.outcome {
            RoundOutcome::Win => {
                self.player_score += 1;
                self.agent_score = self.agent_score.saturating_sub(1);
            }
            RoundOutcome::Loss => {
                self.agent_score += 1;
                self.player_score = self.player_score.saturating_sub(1);
            }
            RoundOutcome::Tie => {}
        }
        self.turn += 1;
        self.rounds.push(record);
        self.update_status();
    }

    fn update_status(&mut self) {
        if self.player_score >= self.rules.target_score {
            self.status = MatchStatus::Won;
        } else if self.agent_score >= self.rules.target_score {
            self.status = MatchStatus::Lost;
        } else if self.turn >= self.rules.turn_limit {
            self.status = if self.player_score > self.agent_score {
                MatchStatus::Won
            } else if self.player_score < self.agent_score {
                MatchStatus::Lost
            } else {
                MatchStatus::Drawn
            };
        }
    }
}

/// A scored match driving a [`Session`] round by round.
///
/// The agent commits to its move before seeing the player's move for the
/// round; only then does the player's move feed the model.
pub struct Match {
    session: Session,
    state: MatchState,
}

impl Match {
    /// Start a match with the default rules.
    pub fn new(session: Session) -> Self {
        Self::with_rules(session, MatchRules::default())
    }

    /// Start a match with explicit rules.
    pub fn with_rules(session: Session, rules: MatchRules) -> Self {
        Self {
            session,
            state: MatchState::new(rules),
        }
    }

    /// Play one round: the agent picks its move, the player's move is
    /// revealed and learned from, and the scoreboard advances.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatchOver`] once the match has finished.
    pub fn play(&mut self, player_move: Move) -> Result<RoundRecord> {
        if self.state.is_finished() {
            return Err(Error::MatchOver);
        }

        let agent_move = self.session.next_agent_move()?;
        self.session.record_opponent_move(player_move)?;

        let record = RoundRecord {
            player: player_move,
            agent: agent_move,
            outcome: round_outcome(player_move, agent_move),
        };
        self.state.record_round(record);
        Ok(record)
    }

    /// Reset both the scoreboard and the session's learned state.
    pub fn restart(&mut self) {
        let rules = self.state.rules();
        self.session.reset();
        self.state = MatchState::new(rules);
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_outcome_relation() {
        assert_eq!(round_outcome(Move::Rock, Move::Scissors), RoundOutcome::Win);
        assert_eq!(round_outcome(Move::Scissors, Move::Rock), RoundOutcome::Loss);
        assert_eq!(round_outcome(Move::Paper, Move::Paper), RoundOutcome::Tie);
    }

    #[test]
    fn test_scores_saturate_at_zero() {
        let mut state = MatchState::new(MatchRules::default());
        state.record_round(RoundRecord {
            player: Move::Rock,
            agent: Move::Paper,
            outcome: RoundOutcome::Loss,
        });

        assert_eq!(state.agent_score(), 1);
        assert_eq!(state.player_score(), 0);
        assert_eq!(state.turn(), 2);
    }

    #[test]
    fn test_target_score_ends_match() {
        let rules = MatchRules {
            turn_limit: 100,
            target_score: 2,
        };
        let mut state = MatchState::new(rules);
        let win = RoundRecord {
            player: Move::Rock,
            agent: Move::Scissors,
            outcome: RoundOutcome::Win,
        };

        state.record_round(win);
        assert_eq!(state.status(), MatchStatus::Pending);
        state.record_round(win);
        assert_eq!(state.status(), MatchStatus::Won);
        assert!(state.is_finished());
    }

    #[test]
    fn test_turn_limit_ends_match_with_score_comparison() {
        let rules = MatchRules {
            turn_limit: 3,
            target_score: 10,
        };

        let mut state = MatchState::new(rules);
        let tie = RoundRecord {
            player: Move::Rock,
            agent: Move::Rock,
            outcome: RoundOutcome::Tie,
        };
        state.record_round(tie);
        state.record_round(tie);
        assert_eq!(state.turn(), 3);
        assert_eq!(state.status(), MatchStatus::Drawn);

        let mut state = MatchState::new(rules);
        let loss = RoundRecord {
            player: Move::Rock,
            agent: Move::Paper,
            outcome: RoundOutcome::Loss,
        };
        state.record_round(loss);
        state.record_round(loss);
        assert_eq!(state.status(), MatchStatus::Lost);
    }

    #[test]
    fn test_play_after_finish_is_rejected() {
        let rules = MatchRules {
            turn_limit: 2,
            target_score: 10,
        };
        let session = Session::new(1).unwrap();
        let mut game = Match::with_rules(session, rules);

        game.play(Move::Rock).unwrap();
        assert!(game.state().is_finished());
        assert!(matches!(game.play(Move::Rock), Err(Error::MatchOver)));
    }

    #[test]
    fn test_restart_clears_scoreboard_and_model() {
        let session = Session::new(1).unwrap();
        let mut game = Match::new(session);

        game.play(Move::Rock).unwrap();
        game.play(Move::Rock).unwrap();
        assert!(game.session().model().observation_total() > 0);

        game.restart();
        assert_eq!(game.state().turn(), 1);
        assert_eq!(game.state().rounds().len(), 0);
        assert_eq!(game.session().model().observation_total(), 0);
        assert_eq!(game.state().status(), MatchStatus::Pending);
    }
}
