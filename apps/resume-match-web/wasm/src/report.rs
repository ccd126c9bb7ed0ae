//! Analysis response types and presentation mapping
//!
//! Mirrors the JSON contract of the backend analysis service and derives
//! the discrete visual tier shown for a match percentage.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Result of one resume/job-description analysis as returned by POST `/analyze`
///
/// Failure bodies carry only `success` and `error`, so every statistic field
/// falls back to its default when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisReport {
    /// Whether the analysis succeeded
    pub success: bool,
    /// Server-supplied message when `success` is false
    pub error: Option<String>,
    /// Overall skill overlap, 0-100
    pub match_percentage: u32,
    /// Human-readable match level (e.g. "Excellent Match")
    pub match_level: String,
    /// Number of required skills found in the resume
    pub matched_count: u32,
    /// Number of required skills absent from the resume
    pub missing_count: u32,
    /// Total skills recognized in the resume
    pub resume_skills_count: u32,
    /// Total skills required by the job description
    pub required_skills_count: u32,
    /// Required skills present in the resume
    pub matched_skills: Vec<String>,
    /// Required skills missing from the resume
    pub missing_skills: Vec<String>,
}

/// Response of GET `/api/sample-data`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleData {
    pub sample_job_description: String,
}

/// Visual severity tier derived from a match percentage
///
/// Boundary values map to the higher tier: 80 is Success, 60 is Info,
/// 40 is Warning.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Danger,
    Warning,
    Info,
    Success,
}

impl MatchTier {
    /// Map a percentage onto its tier
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            MatchTier::Success
        } else if percentage >= 60 {
            MatchTier::Info
        } else if percentage >= 40 {
            MatchTier::Warning
        } else {
            MatchTier::Danger
        }
    }

    /// Class applied to the progress-bar fill
    pub fn bar_class(&self) -> &'static str {
        match self {
            MatchTier::Success => "bg-success",
            MatchTier::Info => "bg-info",
            MatchTier::Warning => "bg-warning",
            MatchTier::Danger => "bg-danger",
        }
    }

    /// Class applied to the textual match-level label
    pub fn text_class(&self) -> &'static str {
        match self {
            MatchTier::Success => "text-success",
            MatchTier::Info => "text-info",
            MatchTier::Warning => "text-warning",
            MatchTier::Danger => "text-danger",
        }
    }
}

/// Whether a skill badge marks a matched or a missing skill
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillKind {
    Matched,
    Missing,
}

impl SkillKind {
    /// Modifier class on the badge element
    pub fn css_class(&self) -> &'static str {
        match self {
            SkillKind::Matched => "matched",
            SkillKind::Missing => "missing",
        }
    }

    /// Font Awesome glyph shown inside the badge
    pub fn icon_class(&self) -> &'static str {
        match self {
            SkillKind::Matched => "fa-check-circle",
            SkillKind::Missing => "fa-times-circle",
        }
    }
}

/// Title-case a skill label per space-separated word
///
/// Only the first character of each word is uppercased; the remainder is
/// left untouched, and interior spacing is preserved exactly.
pub fn title_case_skill(skill: &str) -> String {
    skill
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: tier thresholds hold over the whole percentage range
        #[test]
        fn tier_thresholds(p in 0u32..=100) {
            let tier = MatchTier::from_percentage(p);
            let expected = if p >= 80 {
                MatchTier::Success
            } else if p >= 60 {
                MatchTier::Info
            } else if p >= 40 {
                MatchTier::Warning
            } else {
                MatchTier::Danger
            };
            prop_assert_eq!(tier, expected);
        }

        /// Property: title-casing twice yields the same string as once
        #[test]
        fn title_case_idempotent(s in "[ -~]{0,40}") {
            let once = title_case_skill(&s);
            let twice = title_case_skill(&once);
            prop_assert_eq!(once, twice);
        }

        /// Property: title-casing keeps the word count unchanged
        #[test]
        fn title_case_preserves_word_structure(s in "[a-z ]{0,40}") {
            let titled = title_case_skill(&s);
            prop_assert_eq!(
                s.split(' ').count(),
                titled.split(' ').count()
            );
        }

        /// Property: any failure body with a message decodes losslessly
        #[test]
        fn failure_body_decodes(msg in "[a-zA-Z0-9 .,]{1,60}") {
            let body = format!(r#"{{"success": false, "error": "{}"}}"#, msg);
            let report: AnalysisReport = serde_json::from_str(&body).unwrap();
            prop_assert!(!report.success);
            prop_assert_eq!(report.error, Some(msg));
        }
    }
}
