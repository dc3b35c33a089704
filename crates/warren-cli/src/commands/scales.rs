//! Catalog listing.

use clap::Args;
use eyre::Result;

use warren_scales::ScaleCatalog;

#[derive(Args, Debug)]
pub struct ScalesArgs {
    /// Limit the listing to one species
    #[arg(long)]
    species: Option<String>,
    /// Show questions and scoring bands as well
    #[arg(long)]
    full: bool,
}

pub fn run(args: ScalesArgs) -> Result<()> {
    let catalog = ScaleCatalog::builtin();

    let species: Vec<String> = match args.species {
        Some(s) => vec![s],
        None => catalog.species().iter().map(|s| s.to_string()).collect(),
    };

    for name in species {
        let scales = catalog.list_scales(&name);
        if scales.is_empty() {
            println!("{name}: no scales available");
            continue;
        }
        println!("{name}:");
        for scale_name in scales {
            if !args.full {
                println!("  - {scale_name}");
                continue;
            }
            let scale = catalog.lookup(&name, scale_name)?;
            println!("  - {} ({})", scale.name, scale.title);
            for question in &scale.questions {
                println!("      {}", question.question);
                for (i, option) in question.options.iter().enumerate() {
                    println!("        [{i}] {} ({})", option.text, option.score);
                }
            }
            for band in &scale.interpretation {
                println!("      {}..={}: {}", band.min, band.max, band.label);
            }
        }
    }
    Ok(())
}
