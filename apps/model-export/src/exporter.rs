//! Model export steps. Each step either produces an artifact or leaves an
//! empty placeholder file behind; nothing is retried or validated.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{error, info, warn};

pub const LAYOUTLM_MODEL_URL: &str = "https://huggingface.co/microsoft/layoutlmv3-base";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to launch exporter '{bin}': {source}")]
    Spawn {
        bin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("exporter exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
}

/// Produces ONNX artifacts for a model. Swap implementations in tests or to
/// use a different toolchain.
#[async_trait]
pub trait OnnxExporter: Send + Sync {
    async fn export(&self, model: &str, task: &str, output_dir: &Path) -> Result<(), ExportError>;
}

/// Shells out to `optimum-cli export onnx`.
pub struct OptimumCliExporter {
    pub bin: String,
}

#[async_trait]
impl OnnxExporter for OptimumCliExporter {
    async fn export(&self, model: &str, task: &str, output_dir: &Path) -> Result<(), ExportError> {
        let output = Command::new(&self.bin)
            .args(["export", "onnx", "--model", model, "--task", task])
            .arg(output_dir)
            .output()
            .await
            .map_err(|source| ExportError::Spawn {
                bin: self.bin.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ExportError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Exported(PathBuf),
    Placeholder(PathBuf),
}

/// Creates the file if missing; existing content is left untouched.
pub async fn touch(path: &Path) -> Result<()> {
    tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .with_context(|| format!("failed to create placeholder {}", path.display()))?;
    Ok(())
}

/// Exports the feature-extraction model into `<models_dir>/distilbert`, or
/// touches `<models_dir>/distilbert.onnx` when the exporter fails.
pub async fn export_distilbert(
    exporter: &dyn OnnxExporter,
    models_dir: &Path,
    model: &str,
    task: &str,
) -> Result<ExportOutcome> {
    info!("Exporting {model} to ONNX...");

    let output_dir = models_dir.join("distilbert");
    let placeholder = models_dir.join("distilbert.onnx");

    match exporter.export(model, task, &output_dir).await {
        Ok(()) => {
            info!("{model} exported to {}", output_dir.display());
            Ok(ExportOutcome::Exported(output_dir))
        }
        Err(e) => {
            error!("Failed to export {model}: {e}");
            warn!("Creating placeholder file...");
            touch(&placeholder).await?;
            Ok(ExportOutcome::Placeholder(placeholder))
        }
    }
}

/// LayoutLM has no automated export; it must be downloaded by hand.
pub async fn create_layoutlm_placeholder(models_dir: &Path) -> Result<PathBuf> {
    info!("Creating LayoutLM placeholder...");

    let path = models_dir.join("layoutlm.onnx");
    touch(&path).await?;

    info!("Placeholder created at {}", path.display());
    warn!("For the actual LayoutLM model visit {LAYOUTLM_MODEL_URL}");
    warn!("or run: git lfs install && git clone {LAYOUTLM_MODEL_URL}");
    Ok(path)
}

#[derive(Debug)]
pub struct ExportReport {
    pub distilbert: ExportOutcome,
    pub layoutlm: PathBuf,
}

/// Runs both steps in order against `models_dir`, creating it first.
pub async fn run_export(
    exporter: &dyn OnnxExporter,
    models_dir: &Path,
    model: &str,
    task: &str,
) -> Result<ExportReport> {
    tokio::fs::create_dir_all(models_dir)
        .await
        .with_context(|| format!("failed to create {}", models_dir.display()))?;

    let distilbert = export_distilbert(exporter, models_dir, model, task).await?;
    let layoutlm = create_layoutlm_placeholder(models_dir).await?;

    Ok(ExportReport {
        distilbert,
        layoutlm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingExporter {
        fail: bool,
        calls: Mutex<Vec<(String, String, PathBuf)>>,
    }

    impl RecordingExporter {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl OnnxExporter for RecordingExporter {
        async fn export(
            &self,
            model: &str,
            task: &str,
            output_dir: &Path,
        ) -> Result<(), ExportError> {
            self.calls.lock().unwrap().push((
                model.to_string(),
                task.to_string(),
                output_dir.to_path_buf(),
            ));
            if self.fail {
                Err(ExportError::Failed {
                    status: "exit status: 1".to_string(),
                    stderr: "no such model".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn test_successful_export_writes_no_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = RecordingExporter::new(false);

        let outcome = export_distilbert(
            &exporter,
            dir.path(),
            "distilbert-base-uncased",
            "feature-extraction",
        )
        .await
        .unwrap();

        assert_eq!(outcome, ExportOutcome::Exported(dir.path().join("distilbert")));
        assert!(!dir.path().join("distilbert.onnx").exists());

        let calls = exporter.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "distilbert-base-uncased");
        assert_eq!(calls[0].1, "feature-extraction");
    }

    #[tokio::test]
    async fn test_failed_export_touches_empty_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = RecordingExporter::new(true);

        let outcome = export_distilbert(&exporter, dir.path(), "m", "feature-extraction")
            .await
            .unwrap();

        let placeholder = dir.path().join("distilbert.onnx");
        assert_eq!(outcome, ExportOutcome::Placeholder(placeholder.clone()));
        assert_eq!(std::fs::metadata(&placeholder).unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_touch_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layoutlm.onnx");
        std::fs::write(&path, b"weights").unwrap();

        touch(&path).await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"weights");
    }

    #[tokio::test]
    async fn test_run_export_creates_nested_models_dir() {
        let dir = tempfile::tempdir().unwrap();
        let models_dir = dir.path().join("public").join("models");
        let exporter = RecordingExporter::new(true);

        let report = run_export(&exporter, &models_dir, "m", "feature-extraction")
            .await
            .unwrap();

        assert!(models_dir.is_dir());
        assert_eq!(report.layoutlm, models_dir.join("layoutlm.onnx"));
        assert!(report.layoutlm.exists());
        assert!(matches!(report.distilbert, ExportOutcome::Placeholder(_)));
    }

    #[tokio::test]
    async fn test_missing_exporter_binary_falls_back_to_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = OptimumCliExporter {
            bin: "definitely-not-an-installed-exporter".to_string(),
        };

        let outcome = export_distilbert(&exporter, dir.path(), "m", "feature-extraction")
            .await
            .unwrap();

        assert_eq!(
            outcome,
            ExportOutcome::Placeholder(dir.path().join("distilbert.onnx"))
        );
    }
}
