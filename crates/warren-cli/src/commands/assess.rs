//! Running and listing assessments.

use clap::Args;
use eyre::Result;
use uuid::Uuid;

use warren_export::projection::summary_row;
use warren_scales::walk::{AnimalContext, AnswerSet};
use warren_scales::ScaleCatalog;
use warren_store::assessments::NewAssessment;
use warren_store::Store;

#[derive(Args, Debug)]
pub struct AssessArgs {
    animal: Uuid,
    /// Scale name as listed by `warren scales`
    #[arg(long)]
    scale: String,
    /// Zero-based option index per question, comma separated (e.g. "1,0,2")
    #[arg(long, value_parser = parse_answers)]
    answers: Answers,
    /// Assessment date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<jiff::civil::Date>,
}

// clap derive needs a named type for the parsed value.
#[derive(Debug, Clone)]
pub struct Answers(Vec<usize>);

fn parse_answers(raw: &str) -> Result<Answers, String> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| format!("bad option index '{part}': {e}"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Answers)
}

pub async fn run(store: &Store, args: AssessArgs) -> Result<()> {
    let animal = store.get_animal(args.animal).await?;

    let catalog = ScaleCatalog::builtin();
    let scale = catalog.lookup(&animal.species, &args.scale)?;

    let mut walk = AnswerSet::new(scale.clone(), AnimalContext::for_animal(&animal));
    for &option in &args.answers.0 {
        walk.select(option)?;
    }
    let result = walk.finalize()?;

    let date = match args.date {
        Some(date) => date,
        None => jiff::Zoned::now().date(),
    };
    let payload = result.to_payload().to_json()?;
    let record = store
        .save_assessment(NewAssessment {
            animal_id: animal.id,
            date,
            scale_name: args.scale,
            result: payload,
        })
        .await?;

    println!(
        "{}: {} scored {} ({})",
        record.date, record.scale_name, result.total_score, result.interpretation.label
    );
    for detail in &result.details {
        println!("  {}: {} ({})", detail.question, detail.answer, detail.score);
    }
    Ok(())
}

#[derive(Args, Debug)]
pub struct AssessmentsArgs {
    animal: Uuid,
}

pub async fn list(store: &Store, args: AssessmentsArgs) -> Result<()> {
    let records = store.list_assessments(args.animal).await?;
    if records.is_empty() {
        println!("No assessments recorded.");
        return Ok(());
    }
    for record in &records {
        let row = summary_row(record);
        println!("{}  {}  {}  {}", record.id, row.date, row.scale, row.result);
    }
    Ok(())
}
