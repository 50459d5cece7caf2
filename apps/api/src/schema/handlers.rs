//! Axum route handlers for the schema API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::schema::generator::basic_fallback;
use crate::schema::models::RequirementTemplate;
use crate::state::AppState;

pub const EXAM_NAME_REQUIRED: &str = "Exam name is required";
const KEYWORD_NOTE: &str =
    "Using intelligent pattern matching - real web extraction available via Node.js version";
const FALLBACK_MESSAGE: &str = "Generated basic fallback schema";
const FALLBACK_WARNING: &str = "Error occurred during generation";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSchemaRequest {
    /// Kept loose so a non-string value reaches the fallback instead of a 400.
    #[serde(default)]
    pub exam_name: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct GenerateSchemaResponse {
    pub success: bool,
    pub schema: RequirementTemplate,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-schema
///
/// Maps `examName` to a requirement template. Absent, null, or blank names
/// are a 400. A non-string name or a generator failure still answers 200
/// with the basic fallback and a `warning`.
pub async fn handle_generate_schema(
    State(state): State<AppState>,
    payload: Result<Json<GenerateSchemaRequest>, JsonRejection>,
) -> Result<Json<GenerateSchemaResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected generate-schema body: {rejection}");
        AppError::Validation(EXAM_NAME_REQUIRED.to_string())
    })?;

    let (exam_name, generated) = match request.exam_name {
        None | Some(Value::Null) => {
            return Err(AppError::Validation(EXAM_NAME_REQUIRED.to_string()))
        }
        Some(Value::String(raw)) => {
            let exam_name = raw.trim();
            if exam_name.is_empty() {
                return Err(AppError::Validation(EXAM_NAME_REQUIRED.to_string()));
            }
            info!("Generating schema for: {exam_name}");
            let generated = state.generator.generate(exam_name).await;
            (exam_name.to_string(), generated)
        }
        Some(other) => {
            let exam_name = other.to_string();
            let generated = Err(AppError::Generation(format!(
                "examName must be a string, got {exam_name}"
            )));
            (exam_name, generated)
        }
    };

    match generated {
        Ok(schema) => {
            info!("Generated schema for {}", schema.exam);
            Ok(Json(GenerateSchemaResponse {
                success: true,
                message: format!("Generated schema for {}", schema.exam),
                schema,
                note: Some(KEYWORD_NOTE.to_string()),
                warning: None,
            }))
        }
        Err(e) => {
            error!("Error generating schema: {e}");
            Ok(Json(GenerateSchemaResponse {
                success: true,
                schema: basic_fallback(&exam_name),
                message: FALLBACK_MESSAGE.to_string(),
                note: None,
                warning: Some(FALLBACK_WARNING.to_string()),
            }))
        }
    }
}
