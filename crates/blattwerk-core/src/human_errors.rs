// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages.
//
// Every error is mapped to plain English with a clear suggestion. The
// severity level drives how the UI presents it (toast colour, retry hint).

use crate::error::{BlattwerkError, ValidationError};

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Network blip, busy service — trying again is likely to work.
    Transient,
    /// User must change something (add a file, fill a field) before retrying.
    ActionRequired,
    /// Cannot be fixed by retrying — wrong configuration, bad build.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as the toast headline).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether resubmitting unchanged input might succeed.
    pub retriable: bool,
    /// Severity level (drives icon/colour in UI).
    pub severity: Severity,
}

/// Convert a `BlattwerkError` into a `HumanError` anyone can act on.
pub fn humanize_error(err: &BlattwerkError) -> HumanError {
    match err {
        BlattwerkError::UnknownOperation(key) => HumanError {
            message: "That tool isn't available.".into(),
            suggestion: format!("Pick a tool from the home screen. (unknown key: {key})"),
            retriable: false,
            severity: Severity::Permanent,
        },

        BlattwerkError::NoActiveSession => HumanError {
            message: "No tool is open.".into(),
            suggestion: "Choose a tool first, then add your files.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        BlattwerkError::SubmissionInFlight => HumanError {
            message: "Still working on the previous request.".into(),
            suggestion: "Wait for it to finish before submitting again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        BlattwerkError::Validation(v) => humanize_validation(v),

        BlattwerkError::Request(detail) => HumanError {
            message: "We couldn't reach the processing service.".into(),
            suggestion: format!(
                "Check your connection and the service URL in Settings, then try again. ({detail})"
            ),
            retriable: true,
            severity: Severity::Transient,
        },

        BlattwerkError::Processing { detail, .. } => HumanError {
            message: "The service couldn't process your files.".into(),
            suggestion: detail.clone(),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        BlattwerkError::MalformedResponse(detail) => HumanError {
            message: "The service sent back something we didn't understand.".into(),
            suggestion: format!("Try again; if it keeps happening the service may be out of date. ({detail})"),
            retriable: true,
            severity: Severity::Transient,
        },

        BlattwerkError::Io(io_err) => HumanError {
            message: "A file couldn't be read or written.".into(),
            suggestion: format!("Check the file still exists and you have permission. ({io_err})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        BlattwerkError::Serialization(detail) => HumanError {
            message: "Saved settings couldn't be read.".into(),
            suggestion: format!("Defaults were used instead. ({detail})"),
            retriable: false,
            severity: Severity::Permanent,
        },

        BlattwerkError::Config(detail) => HumanError {
            message: "The app configuration is invalid.".into(),
            suggestion: detail.clone(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}

fn humanize_validation(err: &ValidationError) -> HumanError {
    let message = match err {
        ValidationError::MissingFile => "Please add at least one file.".into(),
        ValidationError::MissingField { label } => format!("{label} is required."),
        ValidationError::TooShort { label, min } => {
            format!("{label} must be at least {min} characters.")
        }
    };
    HumanError {
        message,
        suggestion: "Fix the highlighted input, then submit again.".into(),
        retriable: false,
        severity: Severity::ActionRequired,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_are_transient() {
        let err = BlattwerkError::Request("connection refused".into());
        assert_eq!(humanize_error(&err).severity, Severity::Transient);
        assert!(humanize_error(&err).retriable);
    }

    #[test]
    fn server_detail_is_surfaced_verbatim() {
        let err = BlattwerkError::Processing {
            status: 400,
            detail: "bad password".into(),
        };
        assert_eq!(humanize_error(&err).suggestion, "bad password");
    }

    #[test]
    fn validation_errors_require_user_action() {
        let err = BlattwerkError::Validation(ValidationError::MissingFile);
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(!human.retriable);
    }

    #[test]
    fn unknown_operation_is_permanent() {
        let err = BlattwerkError::UnknownOperation("split".into());
        assert_eq!(humanize_error(&err).severity, Severity::Permanent);
    }
}
