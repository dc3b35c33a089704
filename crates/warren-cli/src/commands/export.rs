//! Export: CSV files plus a Markdown report.

use std::fs::File;
use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use uuid::Uuid;

use warren_export::csv::{write_assessment_csv, write_weight_csv};
use warren_export::projection::summary_row;
use warren_export::render::{render_report, ReportContext, DEFAULT_REPORT_TEMPLATE};
use warren_store::Store;

#[derive(Args, Debug)]
pub struct ExportArgs {
    animal: Uuid,
    /// Output directory (created if missing)
    #[arg(long)]
    out: PathBuf,
    /// Custom Tera template for the Markdown report
    #[arg(long)]
    template: Option<PathBuf>,
}

pub async fn run(store: &Store, args: ExportArgs) -> Result<()> {
    let animal = store.get_animal(args.animal).await?;
    let history = store.weight_history(args.animal).await?;
    let records = store.list_assessments(args.animal).await?;

    std::fs::create_dir_all(&args.out)?;

    let rows: Vec<_> = records.iter().map(summary_row).collect();
    write_assessment_csv(File::create(args.out.join("assessments.csv"))?, &rows)?;
    write_weight_csv(File::create(args.out.join("weights.csv"))?, &history)?;

    let template = match &args.template {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_REPORT_TEMPLATE.to_string(),
    };
    let context = ReportContext::build(&animal, &history, &records);
    let report = render_report(&template, &context)?;
    std::fs::write(args.out.join("report.md"), report)?;

    tracing::info!(
        animal = %animal.name,
        out = %args.out.display(),
        assessments = records.len(),
        weights = history.len(),
        "export written"
    );
    println!("Wrote assessments.csv, weights.csv and report.md to {}", args.out.display());
    Ok(())
}
