// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Blattwerk — async client for the remote document-processing service.

pub mod client;
pub mod outcome;

pub use client::ProcessingClient;
pub use outcome::{AnalysisReport, FlaggedTerm, KeywordCount, SubmissionOutcome};
