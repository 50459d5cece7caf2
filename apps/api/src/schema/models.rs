use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of upload a document requirement applies to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Photograph,
    Signature,
    ThumbImpression,
}

/// Inclusive file size bounds in kilobytes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SizeRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Requirements {
    pub format: Vec<String>,
    pub size_kb: SizeRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentRequirement {
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub requirements: Requirements,
}

/// Upload requirements for one exam. Built per request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequirementTemplate {
    pub exam: String,
    pub documents: Vec<DocumentRequirement>,
    pub extracted_from: String,
    pub extracted_at: DateTime<Utc>,
}
