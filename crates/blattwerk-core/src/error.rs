// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Blattwerk.

use thiserror::Error;

/// Top-level error type for all Blattwerk operations.
#[derive(Debug, Error)]
pub enum BlattwerkError {
    // -- Session / configuration errors --
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("no session is active")]
    NoActiveSession,

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    // -- Submission errors --
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("request failed: {0}")]
    Request(String),

    /// Non-success status from the processing service. `detail` carries the
    /// server-declared reason when the body was parseable, a generic reason
    /// otherwise.
    #[error("processing failed ({status}): {detail}")]
    Processing { status: u16, detail: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BlattwerkError>;

/// A recoverable pre-submission failure.
///
/// Only the first failing check is surfaced per submit attempt; the session
/// stays interactive so the user can fix it and retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please add at least one file")]
    MissingFile,

    #[error("{label} is required")]
    MissingField { label: &'static str },

    #[error("{label} must be at least {min} characters")]
    TooShort { label: &'static str, min: usize },
}
