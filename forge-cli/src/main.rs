use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use forge_core::{average_score, forecast, rank, top_n};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

mod generate;
mod report;

use report::ReportBundle;

#[derive(Parser, Debug)]
#[command(name = "forge", version, about = "Task prioritization and demand forecasting reporter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate sample tasks, rank them, forecast demand, and emit a report
    Report {
        /// Number of tasks to generate
        #[arg(long, default_value_t = 10)]
        tasks: usize,

        /// Size of the ranked subset to report (errors if > --tasks)
        #[arg(long, default_value_t = 5)]
        top: usize,

        /// RNG seed for reproducible runs (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Report file destination
        #[arg(long, default_value = "forge_schedule.txt")]
        out: PathBuf,

        /// Emit the report bundle as JSON on stdout instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Report {
            tasks,
            top,
            seed,
            out,
            json,
        } => run_report(tasks, top, seed, &out, json),
    }
}

fn run_report(tasks: usize, top: usize, seed: Option<u64>, out: &Path, json: bool) -> Result<()> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let generated = generate::generate_tasks(&mut rng, tasks).context("generating tasks")?;
    let ranked = rank(&generated);
    let top_tasks = top_n(&ranked, top).context("selecting top tasks")?;
    let average = average_score(&top_tasks);

    let series = generate::generate_demand(&mut rng);
    let demand = forecast(&series).context("forecasting demand")?;

    if json {
        let bundle = ReportBundle {
            ranked: &top_tasks,
            average_score: average,
            forecast: &demand,
        };
        println!("{}", serde_json::to_string_pretty(&bundle)?);
        return Ok(());
    }

    let text = report::render_report(&top_tasks, average, Local::now());
    print!("{text}");
    println!();
    print!("{}", report::render_forecast(&demand));

    // Persistence is best-effort: the console copy already went out.
    match report::persist(out, &text) {
        Ok(()) => println!("\nResults saved to: {}", out.display()),
        Err(e) => eprintln!("warning: could not write {}: {}", out.display(), e),
    }

    Ok(())
}
