//! Simulate command - run the agent against a scripted opponent

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    cli::{
        commands::{PolicyKind, build_session, save_if_requested},
        output::{create_simulation_progress, format_rate, print_kv, print_section},
    },
    game::{RoundOutcome, round_outcome},
    moves::Move,
    opponents::parse_opponent,
};

#[derive(Parser, Debug)]
#[command(about = "Run the agent against a scripted opponent")]
pub struct SimulateArgs {
    /// Opponent: random, copycat, constant:<move>, or cycle:<pattern>
    #[arg(long, short = 'o', default_value = "random")]
    pub opponent: String,

    /// Number of rounds to play
    #[arg(long, short = 'n', default_value_t = 500)]
    pub rounds: usize,

    /// Markov model order (lookback window length)
    #[arg(long, short = 'k', default_value_t = 1)]
    pub order: usize,

    /// Counter policy
    #[arg(long, value_enum, default_value = "best")]
    pub policy: PolicyKind,

    /// Random seed for the opponent and the mixed policy
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start from a previously saved model (overrides --order)
    #[arg(long, short = 'm')]
    pub model: Option<PathBuf>,

    /// Save the learned model after the run
    #[arg(long, short = 'O')]
    pub save: Option<PathBuf>,

    /// Write a round-by-round log as CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write a JSON summary of the run
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct RoundRow {
    round: usize,
    opponent_move: char,
    agent_move: char,
    winner: &'static str,
}

#[derive(Debug, Serialize)]
struct SimulationSummary {
    opponent: String,
    policy: String,
    order: usize,
    rounds: usize,
    seed: Option<u64>,
    agent_wins: usize,
    opponent_wins: usize,
    ties: usize,
    agent_win_rate: f64,
    opponent_win_rate: f64,
    tie_rate: f64,
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let mut session = build_session(args.order, args.policy, args.seed, args.model.as_deref())?;
    let mut opponent = parse_opponent(&args.opponent, args.seed)?;

    let mut csv_writer = args
        .csv
        .as_ref()
        .map(csv::Writer::from_path)
        .transpose()
        .context("opening CSV log")?;

    let progress = (!args.quiet).then(|| create_simulation_progress(args.rounds as u64));

    let mut agent_wins = 0usize;
    let mut opponent_wins = 0usize;
    let mut ties = 0usize;
    let mut last_agent_move: Option<Move> = None;

    for round in 1..=args.rounds {
        let agent_move = session.next_agent_move()?;
        let opponent_move = opponent.next_move(last_agent_move);
        session.record_opponent_move(opponent_move)?;
        last_agent_move = Some(agent_move);

        // round_outcome is from the scripted opponent's perspective here.
        let winner = match round_outcome(opponent_move, agent_move) {
            RoundOutcome::Win => {
                opponent_wins += 1;
                "opponent"
            }
            RoundOutcome::Loss => {
                agent_wins += 1;
                "agent"
            }
            RoundOutcome::Tie => {
                ties += 1;
                "tie"
            }
        };

        if let Some(writer) = csv_writer.as_mut() {
            writer.serialize(RoundRow {
                round,
                opponent_move: opponent_move.as_char(),
                agent_move: agent_move.as_char(),
                winner,
            })?;
        }
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }
    if let Some(mut writer) = csv_writer {
        writer.flush().context("flushing CSV log")?;
    }

    let summary = SimulationSummary {
        opponent: opponent.name().to_string(),
        policy: session.policy_name().to_string(),
        order: session.order(),
        rounds: args.rounds,
        seed: args.seed,
        agent_wins,
        opponent_wins,
        ties,
        agent_win_rate: rate(agent_wins, args.rounds),
        opponent_win_rate: rate(opponent_wins, args.rounds),
        tie_rate: rate(ties, args.rounds),
    };

    print_section("Simulation Results");
    print_kv("Opponent", &summary.opponent);
    print_kv("Policy", &summary.policy);
    print_kv("Order", &summary.order.to_string());
    print_kv("Rounds", &summary.rounds.to_string());
    print_kv(
        "Agent wins",
        &format!("{} ({})", agent_wins, format_rate(agent_wins, args.rounds)),
    );
    print_kv(
        "Opponent wins",
        &format!(
            "{} ({})",
            opponent_wins,
            format_rate(opponent_wins, args.rounds)
        ),
    );
    print_kv("Ties", &format!("{} ({})", ties, format_rate(ties, args.rounds)));
    print_kv(
        "Contexts learned",
        &session.model().context_count().to_string(),
    );

    if let Some(path) = &args.summary {
        let file = File::create(path)
            .with_context(|| format!("creating summary file {}", path.display()))?;
        to_writer_pretty(file, &summary).context("writing summary JSON")?;
        println!("Summary written to {}", path.display());
    }

    save_if_requested(&session, args.save.as_deref())
}

fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
