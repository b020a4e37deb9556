//! Inspect command - show the contents of a saved model

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::MsgPackRepository,
    cli::output::{print_kv, print_section},
    model::Prediction,
    ports::ModelRepository,
};

#[derive(Parser, Debug)]
#[command(about = "Show the contents of a saved model")]
pub struct InspectArgs {
    /// Path to the saved model
    pub model: PathBuf,
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let repo = MsgPackRepository::new();
    let session = repo
        .load(&args.model)
        .with_context(|| format!("loading model from {}", args.model.display()))?;
    let model = session.model();

    print_section("Model");
    print_kv("File", &args.model.display().to_string());
    print_kv("Order", &model.order().to_string());
    print_kv("Contexts", &model.context_count().to_string());
    print_kv("Observations", &model.observation_total().to_string());

    if model.context_count() == 0 {
        println!("\nNo transitions observed yet.");
        return Ok(());
    }

    println!("\n  {:<10} {:>5} {:>5} {:>5}   prediction", "context", "R", "P", "S");
    for (key, counts) in model.contexts() {
        let prediction = Prediction::from_counts(counts);
        let predicted = prediction.most_likely();
        println!(
            "  {:<10} {:>5} {:>5} {:>5}   {} (counter: {})",
            key,
            counts[0],
            counts[1],
            counts[2],
            predicted,
            predicted.counter()
        );
    }

    Ok(())
}
