//! CLI argument parsing

use std::path::PathBuf;

use clap::Parser;

/// ONNX model export for schema inference
///
/// Exports the feature-extraction model through an external exporter and
/// leaves empty placeholder files for anything that could not be produced.
#[derive(Parser, Debug)]
#[command(name = "model-export")]
#[command(version)]
#[command(about = "Export ONNX models for schema inference", long_about = None)]
pub struct Cli {
    /// Directory receiving the exported models
    #[arg(long, default_value = "public/models", env = "MODELS_DIR")]
    pub models_dir: PathBuf,

    /// Hugging Face model id to export
    #[arg(long, default_value = "distilbert-base-uncased", env = "EXPORT_MODEL")]
    pub model: String,

    /// Export task passed to the exporter
    #[arg(long, default_value = "feature-extraction")]
    pub task: String,

    /// Exporter executable
    #[arg(long, default_value = "optimum-cli", env = "ONNX_EXPORTER_BIN")]
    pub exporter_bin: String,
}
