//! Fixed upload requirement tables, one per exam category.

use crate::schema::matcher::ExamCategory;
use crate::schema::models::{DocumentRequirement, DocumentType, Requirements, SizeRange};

pub const KEYWORD_SOURCE: &str = "Intelligent Fallback System";
pub const BASIC_FALLBACK_SOURCE: &str = "Basic Fallback";

struct Entry<'a> {
    format: &'a [&'a str],
    size_kb: (u32, u32),
    dimensions: Option<&'a str>,
    color: Option<&'a str>,
    background: Option<&'a str>,
    notes: &'a [&'a str],
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn doc(doc_type: DocumentType, entry: Entry<'_>) -> DocumentRequirement {
    DocumentRequirement {
        doc_type,
        requirements: Requirements {
            format: owned(entry.format),
            size_kb: SizeRange {
                min: entry.size_kb.0,
                max: entry.size_kb.1,
            },
            dimensions: entry.dimensions.map(str::to_string),
            color: entry.color.map(str::to_string),
            background: entry.background.map(str::to_string),
            notes: owned(entry.notes),
        },
    }
}

const JPG_JPEG: &[&str] = &["JPG", "JPEG"];

/// Returns the document list for a category, in display order.
pub fn documents_for(category: ExamCategory) -> Vec<DocumentRequirement> {
    match category {
        ExamCategory::Banking => vec![
            doc(
                DocumentType::Photograph,
                Entry {
                    format: JPG_JPEG,
                    size_kb: (20, 50),
                    dimensions: Some("200x230 pixels"),
                    color: Some("color"),
                    background: Some("light"),
                    notes: &[
                        "Recent colored photograph",
                        "Passport size",
                        "Clear face visibility",
                    ],
                },
            ),
            doc(
                DocumentType::Signature,
                Entry {
                    format: JPG_JPEG,
                    size_kb: (10, 20),
                    dimensions: Some("140x60 pixels"),
                    color: None,
                    background: Some("white"),
                    notes: &["Clear signature in black ink", "Sign on white paper"],
                },
            ),
            doc(
                DocumentType::ThumbImpression,
                Entry {
                    format: JPG_JPEG,
                    size_kb: (10, 20),
                    dimensions: Some("240x240 pixels"),
                    color: None,
                    background: Some("white"),
                    notes: &["Left thumb impression", "Clear impression on white paper"],
                },
            ),
        ],
        ExamCategory::Ssc => vec![
            doc(
                DocumentType::Photograph,
                Entry {
                    format: &["JPEG"],
                    size_kb: (4, 40),
                    dimensions: Some("3.5x4.5 cm"),
                    color: Some("color"),
                    background: Some("light"),
                    notes: &["Recent colored photograph", "Passport size"],
                },
            ),
            doc(
                DocumentType::Signature,
                Entry {
                    format: &["JPEG"],
                    size_kb: (1, 12),
                    dimensions: Some("4x2 cm"),
                    color: None,
                    background: Some("white"),
                    notes: &["Clear signature in black ink"],
                },
            ),
        ],
        ExamCategory::MedicalEngineering => vec![
            doc(
                DocumentType::Photograph,
                Entry {
                    format: JPG_JPEG,
                    size_kb: (10, 200),
                    dimensions: Some("Passport size"),
                    color: Some("color"),
                    background: Some("white"),
                    notes: &[
                        "Recent photograph",
                        "Face should be clearly visible",
                        "No sunglasses or hat",
                    ],
                },
            ),
            doc(
                DocumentType::Signature,
                Entry {
                    format: JPG_JPEG,
                    size_kb: (4, 30),
                    dimensions: None,
                    color: None,
                    background: Some("white"),
                    notes: &["Clear signature in blue or black ink"],
                },
            ),
        ],
        ExamCategory::CivilServices => vec![
            doc(
                DocumentType::Photograph,
                Entry {
                    format: JPG_JPEG,
                    size_kb: (3, 50),
                    dimensions: Some("5x7 cm"),
                    color: Some("color"),
                    background: Some("white"),
                    notes: &[
                        "Recent photograph",
                        "Professional attire preferred",
                        "Clear face visibility",
                    ],
                },
            ),
            doc(
                DocumentType::Signature,
                Entry {
                    format: JPG_JPEG,
                    size_kb: (1, 10),
                    dimensions: Some("4x2 cm"),
                    color: None,
                    background: Some("white"),
                    notes: &["Signature in black ink", "Sign on white paper"],
                },
            ),
        ],
        ExamCategory::Generic => vec![
            doc(
                DocumentType::Photograph,
                Entry {
                    format: &["JPG", "JPEG", "PNG"],
                    size_kb: (10, 100),
                    dimensions: Some("Passport size"),
                    color: Some("color"),
                    background: None,
                    notes: &["Recent photograph", "Clear face visibility"],
                },
            ),
            doc(
                DocumentType::Signature,
                Entry {
                    format: &["JPG", "JPEG", "PNG"],
                    size_kb: (5, 50),
                    dimensions: None,
                    color: None,
                    background: Some("white"),
                    notes: &["Clear signature"],
                },
            ),
        ],
    }
}

/// Single photograph entry returned when generation fails.
pub fn basic_fallback_documents() -> Vec<DocumentRequirement> {
    vec![doc(
        DocumentType::Photograph,
        Entry {
            format: JPG_JPEG,
            size_kb: (10, 100),
            dimensions: Some("Passport size"),
            color: Some("color"),
            background: None,
            notes: &["Recent photograph"],
        },
    )]
}
