// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Submission outcomes: the two categorically different success shapes the
// processing service can answer with, and the filename derivation for the
// downloadable one.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use blattwerk_core::registry::OperationDescriptor;

/// What a successful submission produced.
#[derive(Debug, Clone)]
pub enum SubmissionOutcome {
    /// An opaque output file to save locally. `filename` is the name the
    /// service declared via `Content-Disposition`, if any.
    Download {
        bytes: Vec<u8>,
        filename: Option<String>,
    },
    /// A structured analysis payload to render in place.
    Analysis(AnalysisReport),
}

/// Text-analysis payload.
///
/// Every field defaults so a payload missing a section still renders; the
/// missing parts are simply omitted rather than failing the whole view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(default)]
    pub total_words: u64,
    #[serde(default)]
    pub unique_words: u64,
    #[serde(default)]
    pub pages: u64,
    /// Ranked by descending count, as ordered by the service.
    #[serde(default)]
    pub top_keywords: Vec<KeywordCount>,
    /// Likely spelling issues with suggested corrections.
    #[serde(default)]
    pub typos: Vec<FlaggedTerm>,
    /// False when the service's flagging subsystem was not installed.
    #[serde(default = "default_true")]
    pub spell_checker_available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedTerm {
    pub incorrect: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// Pick the name a downloaded result is saved under: the service-declared
/// filename when present, otherwise the operation's deterministic fallback.
pub fn resolve_filename(op: &OperationDescriptor, declared: Option<&str>) -> String {
    match declared {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => fallback_filename(op, Utc::now().timestamp_millis()),
    }
}

/// Deterministic fallback name: `{prefix}_{epoch_millis}.{ext}`, fixed per
/// operation.
pub fn fallback_filename(op: &OperationDescriptor, epoch_millis: i64) -> String {
    format!("{}_{}.{}", op.download_prefix, epoch_millis, op.download_ext)
}

/// Extract the filename from a `Content-Disposition` header value.
///
/// Understands the common `attachment; filename="name.pdf"` shape (quoted or
/// bare). Anything else yields `None` and the fallback name is used.
pub fn disposition_filename(header: &str) -> Option<String> {
    for segment in header.split(';') {
        let segment = segment.trim();
        if let Some(rest) = segment.strip_prefix("filename=") {
            let name = rest.trim().trim_matches('"').trim();
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use blattwerk_core::registry::lookup;

    #[test]
    fn quoted_disposition_filename() {
        assert_eq!(
            disposition_filename(r#"attachment; filename="report.pdf""#),
            Some("report.pdf".into())
        );
    }

    #[test]
    fn bare_disposition_filename() {
        assert_eq!(
            disposition_filename("attachment; filename=report.pdf"),
            Some("report.pdf".into())
        );
    }

    #[test]
    fn disposition_without_filename() {
        assert_eq!(disposition_filename("inline"), None);
        assert_eq!(disposition_filename("attachment; filename=\"\""), None);
    }

    #[test]
    fn declared_name_wins() {
        let op = lookup("merge").unwrap();
        assert_eq!(resolve_filename(op, Some("report.pdf")), "report.pdf");
    }

    #[test]
    fn fallback_name_is_deterministic_per_operation() {
        let merge = lookup("merge").unwrap();
        assert_eq!(fallback_filename(merge, 1700000000000), "merged_1700000000000.pdf");

        let text = lookup("pdf-to-text").unwrap();
        assert_eq!(
            fallback_filename(text, 1700000000000),
            "extracted_text_1700000000000.txt"
        );
    }

    #[test]
    fn full_report_deserializes() {
        let report: AnalysisReport = serde_json::from_str(
            r#"{
                "total_words": 120,
                "unique_words": 80,
                "pages": 3,
                "top_keywords": [{"word": "the", "count": 15}],
                "typos": [{"incorrect": "teh", "suggestions": ["the", "ten"]}],
                "spell_checker_available": true
            }"#,
        )
        .unwrap();

        assert_eq!(report.total_words, 120);
        assert_eq!(report.unique_words, 80);
        assert_eq!(report.pages, 3);
        assert_eq!(report.top_keywords.len(), 1);
        assert_eq!(report.top_keywords[0].word, "the");
        assert_eq!(report.typos[0].suggestions, ["the", "ten"]);
        assert!(report.spell_checker_available);
    }

    #[test]
    fn sparse_report_degrades_to_defaults() {
        let report: AnalysisReport =
            serde_json::from_str(r#"{"total_words": 7}"#).unwrap();
        assert_eq!(report.total_words, 7);
        assert_eq!(report.pages, 0);
        assert!(report.top_keywords.is_empty());
        assert!(report.typos.is_empty());
        assert!(report.spell_checker_available);
    }
}
