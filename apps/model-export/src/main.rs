//! Model export tool
//!
//! Run once by hand to place ONNX artifacts under the models directory.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod exporter;

use cli::Cli;
use exporter::{run_export, ExportOutcome, OptimumCliExporter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    info!("ONNX model export v{}", env!("CARGO_PKG_VERSION"));

    let exporter = OptimumCliExporter {
        bin: cli.exporter_bin.clone(),
    };
    let report = run_export(&exporter, &cli.models_dir, &cli.model, &cli.task).await?;

    match &report.distilbert {
        ExportOutcome::Exported(path) => info!("Exported: {}", path.display()),
        ExportOutcome::Placeholder(path) => info!("Placeholder only: {}", path.display()),
    }
    info!("Placeholder only: {}", report.layoutlm.display());

    let location = std::fs::canonicalize(&cli.models_dir).unwrap_or(cli.models_dir);
    info!("Model export complete. Models location: {}", location.display());

    Ok(())
}
