//! Play command - interactive match against the agent on stdin/stdout

use std::{
    io::{BufRead, Write},
    path::PathBuf,
    str::FromStr,
};

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        commands::{PolicyKind, build_session, save_if_requested},
        output::print_section,
    },
    game::{Match, MatchRules, MatchStatus, RoundOutcome},
    moves::Move,
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive match against the agent")]
pub struct PlayArgs {
    /// Markov model order (lookback window length)
    #[arg(long, short = 'k', default_value_t = 1)]
    pub order: usize,

    /// Counter policy
    #[arg(long, value_enum, default_value = "best")]
    pub policy: PolicyKind,

    /// Random seed for the mixed policy
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start from a previously saved model (overrides --order)
    #[arg(long, short = 'm')]
    pub model: Option<PathBuf>,

    /// Save the learned model on exit
    #[arg(long, short = 'O')]
    pub save: Option<PathBuf>,

    /// Turn limit for the match
    #[arg(long, default_value_t = 30)]
    pub turn_limit: u32,

    /// Score that immediately wins the match
    #[arg(long, default_value_t = 10)]
    pub target_score: u32,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let session = build_session(args.order, args.policy, args.seed, args.model.as_deref())?;
    let rules = MatchRules {
        turn_limit: args.turn_limit,
        target_score: args.target_score,
    };
    let mut game = Match::with_rules(session, rules);

    print_section("Rock, Paper, Scissors");
    println!(
        "First to {} points wins; the match ends at turn {}.",
        rules.target_score, rules.turn_limit
    );
    println!("Moves: r(ock), p(aper), s(cissors). Type q to quit.\n");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.state().is_finished() {
        print!("[turn {}] your move: ", game.state().turn());
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        if token.eq_ignore_ascii_case("q") || token.eq_ignore_ascii_case("quit") {
            break;
        }

        let player_move = match Move::from_str(token) {
            Ok(mv) => mv,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        let record = game.play(player_move)?;
        let verdict = match record.outcome {
            RoundOutcome::Win => "you win the round",
            RoundOutcome::Loss => "the agent wins the round",
            RoundOutcome::Tie => "tie",
        };
        println!(
            "You played {}, agent played {}: {}. Score: you {} / agent {}",
            record.player,
            record.agent,
            verdict,
            game.state().player_score(),
            game.state().agent_score()
        );
    }

    match game.state().status() {
        MatchStatus::Won => println!("\nYou won the match!"),
        MatchStatus::Lost => println!("\nYou lost the match!"),
        MatchStatus::Drawn => println!("\nThe match is a draw."),
        MatchStatus::Pending => println!("\nMatch abandoned."),
    }
    println!(
        "Final score: you {} / agent {} after {} rounds.",
        game.state().player_score(),
        game.state().agent_score(),
        game.state().rounds().len()
    );

    save_if_requested(game.session(), args.save.as_deref())
}
