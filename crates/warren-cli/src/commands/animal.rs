//! Registry subcommands.

use clap::{Args, Subcommand, ValueEnum};
use eyre::Result;
use uuid::Uuid;

use warren_core::models::animal::Sex;
use warren_core::models::weight::WeightTarget;
use warren_store::animals::NewAnimal;
use warren_store::Store;

#[derive(Subcommand, Debug)]
pub enum AnimalCommand {
    /// Register a new animal
    Add(AddArgs),
    /// List all registered animals
    List,
    /// Remove an animal and all of its records
    Delete {
        id: Uuid,
    },
    /// Set or clear an animal's weight target
    Target(TargetArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    name: String,
    /// Free text; Rat, Mouse, Rabbit, Goat, Sheep and Pig have built-in
    /// assessment scales
    #[arg(long)]
    species: String,
    #[arg(long)]
    breed: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    birthday: Option<jiff::civil::Date>,
    #[arg(long, value_enum)]
    sex: Option<SexArg>,
    #[arg(long)]
    castrated: Option<bool>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SexArg {
    Male,
    Female,
}

impl From<SexArg> for Sex {
    fn from(value: SexArg) -> Self {
        match value {
            SexArg::Male => Sex::Male,
            SexArg::Female => Sex::Female,
        }
    }
}

#[derive(Args, Debug)]
pub struct TargetArgs {
    id: Uuid,
    /// Target weight in kilograms
    #[arg(long, required_unless_present = "clear", conflicts_with = "clear")]
    weight: Option<f64>,
    /// Target date, YYYY-MM-DD
    #[arg(long, required_unless_present = "clear", conflicts_with = "clear")]
    date: Option<jiff::civil::Date>,
    /// Remove the current target
    #[arg(long)]
    clear: bool,
}

pub async fn run(store: &Store, command: AnimalCommand) -> Result<()> {
    match command {
        AnimalCommand::Add(args) => {
            let animal = store
                .add_animal(NewAnimal {
                    name: args.name,
                    species: args.species,
                    breed: args.breed,
                    birthday: args.birthday,
                    sex: args.sex.map(Sex::from),
                    castrated: args.castrated,
                })
                .await?;
            println!("Registered {} ({}) as {}", animal.name, animal.species, animal.id);
            Ok(())
        }
        AnimalCommand::List => {
            let animals = store.list_animals().await?;
            if animals.is_empty() {
                println!("No animals registered.");
                return Ok(());
            }
            for animal in animals {
                let weight = animal
                    .current_weight
                    .map(|w| format!("{w} kg"))
                    .unwrap_or_else(|| "no weight recorded".to_string());
                println!("{}  {} ({}) - {}", animal.id, animal.name, animal.species, weight);
            }
            Ok(())
        }
        AnimalCommand::Delete { id } => {
            store.delete_animal(id).await?;
            println!("Deleted {id}");
            Ok(())
        }
        AnimalCommand::Target(args) => {
            if args.clear {
                let animal = store.clear_weight_target(args.id).await?;
                println!("Cleared target for {}", animal.name);
                return Ok(());
            }
            // clap guarantees both are present when --clear is absent.
            let (Some(weight), Some(date)) = (args.weight, args.date) else {
                return Err(eyre::eyre!("--weight and --date are required"));
            };
            let animal = store
                .set_weight_target(
                    args.id,
                    WeightTarget {
                        target_weight: weight,
                        target_date: date,
                    },
                )
                .await?;
            println!("Target for {}: {weight} kg by {date}", animal.name);
            Ok(())
        }
    }
}
