use clap::Parser;

mod cli;
mod hash;
mod index;
mod ingest;
pub mod output;
mod report;

use cli::Args;
use output::Outputable;
use report::DedupReport;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let path = cli::resolve_source_path(args.file)?;
    let ingestion = ingest::ingest_path(&path)?;

    let report = DedupReport::from_index(
        &ingestion.index,
        ingestion.lines_read,
        ingestion.malformed_lines,
    );
    println!("{}", report.format(args.format));

    Ok(())
}
