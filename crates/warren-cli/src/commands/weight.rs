//! Weight history and target progress.

use clap::{Args, Subcommand};
use eyre::Result;
use uuid::Uuid;

use warren_core::progress::{self, GoalProgress, WeightTrend};
use warren_store::Store;

#[derive(Subcommand, Debug)]
pub enum WeightCommand {
    /// Record a measurement
    Add(AddArgs),
    /// Show the full history for an animal
    List { animal: Uuid },
    /// Delete one measurement by its sequence number
    Delete {
        animal: Uuid,
        #[arg(long)]
        seq: u64,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    animal: Uuid,
    /// Kilograms, strictly positive
    #[arg(long)]
    weight: f64,
    /// Measurement date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<jiff::civil::Date>,
}

pub async fn run(store: &Store, command: WeightCommand) -> Result<()> {
    match command {
        WeightCommand::Add(args) => {
            let date = match args.date {
                Some(date) => date,
                None => jiff::Zoned::now().date(),
            };
            let record = store.add_weight(args.animal, date, args.weight).await?;
            println!("Recorded {} kg on {} (seq {})", record.weight, record.date, record.seq);
            Ok(())
        }
        WeightCommand::List { animal } => {
            let history = store.weight_history(animal).await?;
            if history.is_empty() {
                println!("No weight records.");
                return Ok(());
            }
            for record in &history {
                println!("{}  {} kg  (seq {})", record.date, record.weight, record.seq);
            }
            Ok(())
        }
        WeightCommand::Delete { animal, seq } => {
            store.delete_weight(animal, seq).await?;
            println!("Deleted weight record {seq}");
            Ok(())
        }
    }
}

#[derive(Args, Debug)]
pub struct ProgressArgs {
    animal: Uuid,
}

pub async fn progress(store: &Store, args: ProgressArgs) -> Result<()> {
    let animal = store.get_animal(args.animal).await?;
    let history = store.weight_history(args.animal).await?;

    let Some(report) = progress::progress(&history, animal.target.as_ref()) else {
        println!("No target set or no weight history for {}.", animal.name);
        return Ok(());
    };

    println!(
        "{}: {} kg -> {} kg (target {} kg)",
        animal.name, report.initial_weight, report.current_weight, report.target_weight
    );
    match report.status {
        GoalProgress::AtTarget => println!("At target weight."),
        GoalProgress::Tracking { percent } => {
            println!("Progress: {percent:.1}% ({} kg remaining)", report.remaining);
        }
    }
    let trend = match report.trend {
        WeightTrend::Gaining => "gaining",
        WeightTrend::Losing => "losing",
        WeightTrend::Stable => "stable",
    };
    println!("Trend: {trend}");
    Ok(())
}
