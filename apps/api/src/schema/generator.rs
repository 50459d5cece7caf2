//! Schema generation: turns an exam name into a requirement template.

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::errors::AppError;
use crate::schema::catalog::{
    basic_fallback_documents, documents_for, BASIC_FALLBACK_SOURCE, KEYWORD_SOURCE,
};
use crate::schema::matcher::{classify, normalize_exam_name};
use crate::schema::models::RequirementTemplate;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap the schema source (e.g. a live web extractor)
/// without touching the handler.
///
/// Carried in `AppState` as `Arc<dyn SchemaGenerator>`.
#[async_trait]
pub trait SchemaGenerator: Send + Sync {
    async fn generate(&self, exam_name: &str) -> Result<RequirementTemplate, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordSchemaGenerator — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic keyword lookup against the fixed catalog. No I/O.
pub struct KeywordSchemaGenerator;

#[async_trait]
impl SchemaGenerator for KeywordSchemaGenerator {
    async fn generate(&self, exam_name: &str) -> Result<RequirementTemplate, AppError> {
        // Separator-only names normalize to "" and still classify as Generic.
        let exam = normalize_exam_name(exam_name);
        let category = classify(exam_name);
        debug!(?category, exam = %exam, "Classified exam");

        Ok(RequirementTemplate {
            exam,
            documents: documents_for(category),
            extracted_from: KEYWORD_SOURCE.to_string(),
            extracted_at: Utc::now(),
        })
    }
}

/// Best-effort template used when generation fails. Keeps the name as given.
pub fn basic_fallback(exam_name: &str) -> RequirementTemplate {
    RequirementTemplate {
        exam: exam_name.to_string(),
        documents: basic_fallback_documents(),
        extracted_from: BASIC_FALLBACK_SOURCE.to_string(),
        extracted_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::matcher::ExamCategory;
    use crate::schema::models::DocumentType;

    #[tokio::test]
    async fn test_keyword_generator_normalizes_and_tags() {
        let template = KeywordSchemaGenerator.generate("ibps-po_mains").await.unwrap();
        assert_eq!(template.exam, "Ibps Po Mains");
        assert_eq!(template.extracted_from, KEYWORD_SOURCE);
        assert_eq!(template.documents.len(), 3);
        assert_eq!(template.documents[2].doc_type, DocumentType::ThumbImpression);
    }

    #[tokio::test]
    async fn test_keyword_generator_generic_for_unknown_exam() {
        let template = KeywordSchemaGenerator.generate("CLAT").await.unwrap();
        assert_eq!(template.exam, "Clat");
        assert_eq!(template.documents.len(), 2);
    }

    #[tokio::test]
    async fn test_separator_only_name_yields_generic_with_empty_exam() {
        let template = KeywordSchemaGenerator.generate("--__").await.unwrap();
        assert_eq!(template.exam, "");
        assert_eq!(template.extracted_from, KEYWORD_SOURCE);
        assert_eq!(template.documents, documents_for(ExamCategory::Generic));
    }

    #[tokio::test]
    async fn test_extracted_at_is_stamped_per_call() {
        let before = Utc::now();
        let template = KeywordSchemaGenerator.generate("NEET").await.unwrap();
        assert!(template.extracted_at >= before);
    }

    #[test]
    fn test_basic_fallback_keeps_raw_name() {
        let template = basic_fallback("ssc-cgl");
        assert_eq!(template.exam, "ssc-cgl");
        assert_eq!(template.extracted_from, BASIC_FALLBACK_SOURCE);
        assert_eq!(template.documents.len(), 1);
    }
}
