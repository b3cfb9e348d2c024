// reset; cargo run
// reset; cargo run -- --input ./data/exhibitors.csv --config ./export.json

use anyhow::Context;
use clap::Parser;
use exporter_lib::{
    DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, ExportConfig, ExportRequest, export_exhibitors,
};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "exhibitor-export")]
#[command(about = "Generate the app's Swift exhibitor list from the career fair Excel file")]
#[command(version)]
struct Args {
    /// Path to the exhibitor workbook (xlsx, xls, ods) or a CSV export of it
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Path of the Swift file to generate
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Optional sheet name to read (if not specified, reads the first sheet)
    #[arg(long)]
    sheet_name: Option<String>,

    /// Optional JSON file overriding id prefix, URL base and purpose rules
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let arguments = Args::parse();
    init_tracing(arguments.verbose);
    debug!(?arguments, "parsed arguments");

    let config = match &arguments.config {
        Some(path) => ExportConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ExportConfig::default(),
    };

    let request = ExportRequest {
        input: arguments.input,
        output: arguments.output,
        sheet_name: arguments.sheet_name,
    };
    info!(input = %request.input.display(), "exporting exhibitors");

    let summary = export_exhibitors(&request, &config).with_context(|| {
        format!(
            "Failed to export exhibitors from {}",
            request.input.display()
        )
    })?;

    println!(
        "Wrote {} exhibitors to {}",
        summary.records,
        summary.output.display()
    );

    Ok(())
}
