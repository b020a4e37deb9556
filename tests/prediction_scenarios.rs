//! End-to-end prediction scenarios at the session level

use riposte::{Move, Session, UNIFORM_PROBABILITY};

#[test]
fn test_history_length_matches_recorded_moves() {
    let mut session = Session::new(2).expect("Failed to create session");
    let feed = [
        Move::Rock,
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Paper,
    ];
    for mv in feed {
        session.record_opponent_move(mv).expect("record failed");
    }
    assert_eq!(session.history().len(), feed.len());
}

#[test]
fn test_prediction_uniform_before_order_moves_exist() {
    let mut session = Session::new(3).expect("Failed to create session");
    session.record_opponent_move(Move::Rock).unwrap();
    session.record_opponent_move(Move::Paper).unwrap();

    let prediction = session.prediction().expect("prediction failed");
    for mv in Move::ALL {
        assert_eq!(prediction.probability(mv), UNIFORM_PROBABILITY);
    }
}

#[test]
fn test_order_one_constant_rock_always_countered_with_paper() {
    let mut session = Session::new(1).expect("Failed to create session");

    // Cold start: uniform prediction, tie-break picks Rock, counter is Paper.
    assert_eq!(session.next_agent_move().unwrap(), Move::Paper);
    session.record_opponent_move(Move::Rock).unwrap();

    // One observation for context [Rock] gives certainty on Rock.
    session.record_opponent_move(Move::Rock).unwrap();
    let prediction = session.prediction().unwrap();
    assert_eq!(prediction.probability(Move::Rock), 1.0);
    assert_eq!(prediction.probability(Move::Paper), 0.0);
    assert_eq!(prediction.probability(Move::Scissors), 0.0);
    assert_eq!(session.next_agent_move().unwrap(), Move::Paper);

    // A second observation changes nothing about the decision.
    session.record_opponent_move(Move::Rock).unwrap();
    assert_eq!(
        session
            .model()
            .count(&[Move::Rock], Move::Rock)
            .unwrap(),
        2
    );
    assert_eq!(session.next_agent_move().unwrap(), Move::Paper);
}

#[test]
fn test_order_two_alternating_pattern_reaches_certainty() {
    let mut session = Session::new(2).expect("Failed to create session");
    for mv in [
        Move::Rock,
        Move::Paper,
        Move::Rock,
        Move::Paper,
        Move::Rock,
        Move::Paper,
    ] {
        session.record_opponent_move(mv).unwrap();
    }

    // Both contexts of the alternation are now certain.
    let after_rock_paper = session
        .model()
        .predict(&[Move::Rock, Move::Paper])
        .unwrap();
    assert_eq!(after_rock_paper.probability(Move::Rock), 1.0);

    let after_paper_rock = session
        .model()
        .predict(&[Move::Paper, Move::Rock])
        .unwrap();
    assert_eq!(after_paper_rock.probability(Move::Paper), 1.0);

    // The agent counters correctly on every round once the pattern holds.
    assert_eq!(session.next_agent_move().unwrap(), Move::Paper);
    session.record_opponent_move(Move::Rock).unwrap();
    assert_eq!(session.next_agent_move().unwrap(), Move::Scissors);
    session.record_opponent_move(Move::Paper).unwrap();
    assert_eq!(session.next_agent_move().unwrap(), Move::Paper);
}

#[test]
fn test_uniform_tie_break_chooses_rock_so_agent_plays_paper() {
    let mut session = Session::new(1).expect("Failed to create session");
    for mv in [Move::Rock, Move::Rock, Move::Paper, Move::Rock, Move::Scissors] {
        session.record_opponent_move(mv).unwrap();
    }
    // Context [Rock] was followed once by each move; the tie resolves to Rock.
    assert_eq!(
        session.model().most_likely(&[Move::Rock]).unwrap(),
        Move::Rock
    );
    // History currently ends in Scissors, so rebuild the window first.
    session.record_opponent_move(Move::Rock).unwrap();
    assert_eq!(session.next_agent_move().unwrap(), Move::Paper);
}
