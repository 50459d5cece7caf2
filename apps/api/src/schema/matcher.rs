//! Exam name normalization and keyword classification.

/// Family of exams sharing one set of upload requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamCategory {
    Banking,
    Ssc,
    MedicalEngineering,
    CivilServices,
    Generic,
}

/// Checked in order; the first category with a matching keyword wins.
const KEYWORD_TABLE: &[(ExamCategory, &[&str])] = &[
    (ExamCategory::Banking, &["ibps", "bank", "sbi", "rbi"]),
    (ExamCategory::Ssc, &["ssc"]),
    (ExamCategory::MedicalEngineering, &["neet", "jee", "gate"]),
    (ExamCategory::CivilServices, &["upsc", "civil", "ias", "ips"]),
];

/// Plain substring match against the lowercased name, so "Delegate" hits `gate`.
pub fn classify(exam_name: &str) -> ExamCategory {
    let lower = exam_name.to_lowercase();
    KEYWORD_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(ExamCategory::Generic)
}

/// `"ssc-cgl_2024"` becomes `"Ssc Cgl 2024"`.
pub fn normalize_exam_name(raw: &str) -> String {
    raw.replace(['-', '_'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
