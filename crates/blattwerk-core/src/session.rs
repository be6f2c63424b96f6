// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tool-session engine: one user interaction from operation selection through
// validation, submission, and result handling.
//
// The session is an explicitly owned value with an explicit transition API;
// no module-level shared state. Exactly one submission may be in flight.
// Cancelling does not abort the request, it only drops interest in its
// result (the generation counter recognises stale completions).

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::error::{BlattwerkError, Result, ValidationError};
use crate::registry::{self, Cardinality, FieldKind, OperationDescriptor};

/// Lifecycle states of a tool session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No operation selected.
    Idle,
    /// Operation selected; tray and form active.
    Configuring,
    /// Request in flight; tray and form frozen.
    Submitting,
    /// Result rendered.
    Completed,
}

/// A file the user has staged for the current session.
///
/// Never mutated once staged — only appended or removed by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub name: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

impl StagedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            bytes,
        }
    }
}

/// What happened to an `add_files` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// All supplied files were staged.
    Added(usize),
    /// Single-file operation: the previously staged file was replaced.
    Replaced,
    /// Single-file operation given several files: first kept, rest dropped.
    /// Non-fatal; callers should surface a warning.
    TruncatedToFirst,
    /// Nothing staged (no active operation, frozen session, or empty input).
    Rejected,
}

/// The mutable state of one user interaction.
#[derive(Debug, Clone)]
pub struct Session {
    phase: SessionPhase,
    operation: Option<&'static OperationDescriptor>,
    files: Vec<StagedFile>,
    /// Bumped on select/cancel so in-flight results can be recognised as
    /// stale and discarded.
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            operation: None,
            files: Vec::new(),
            generation: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn operation(&self) -> Option<&'static OperationDescriptor> {
        self.operation
    }

    /// Read-only snapshot of the staged files, in staging order.
    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    /// Begin a session for `key`, or restart the current one.
    ///
    /// Valid from `Idle` and `Configuring`. Staged files and any prior
    /// result are discarded. An unknown key is a configuration error: the
    /// session stays `Idle` and the caller must show a visible notice.
    pub fn select(&mut self, key: &str) -> Result<&'static OperationDescriptor> {
        match self.phase {
            SessionPhase::Idle | SessionPhase::Configuring | SessionPhase::Completed => {}
            SessionPhase::Submitting => return Err(BlattwerkError::SubmissionInFlight),
        }

        let Some(op) = registry::lookup(key) else {
            warn!(key, "operation not in registry");
            self.phase = SessionPhase::Idle;
            self.operation = None;
            self.files.clear();
            return Err(BlattwerkError::UnknownOperation(key.to_string()));
        };

        info!(op = op.key, "session started");
        self.phase = SessionPhase::Configuring;
        self.operation = Some(op);
        self.files.clear();
        self.generation += 1;
        Ok(op)
    }

    /// Stage files, honouring the active operation's cardinality.
    ///
    /// Single-file operations keep at most one file: a second add replaces
    /// it, and supplying several at once keeps only the first.
    pub fn add_files(&mut self, new: Vec<StagedFile>) -> AddOutcome {
        if self.phase != SessionPhase::Configuring || new.is_empty() {
            return AddOutcome::Rejected;
        }
        let Some(op) = self.operation else {
            return AddOutcome::Rejected;
        };

        match op.cardinality {
            Cardinality::Single => {
                let truncated = new.len() > 1;
                let had_file = !self.files.is_empty();
                let first = new.into_iter().next().expect("checked non-empty");
                debug!(file = %first.name, "staged (single)");
                self.files.clear();
                self.files.push(first);
                if truncated {
                    AddOutcome::TruncatedToFirst
                } else if had_file {
                    AddOutcome::Replaced
                } else {
                    AddOutcome::Added(1)
                }
            }
            Cardinality::Multiple => {
                let count = new.len();
                debug!(count, total = self.files.len() + count, "staged (multiple)");
                self.files.extend(new);
                AddOutcome::Added(count)
            }
        }
    }

    /// Remove the staged file at `index`.
    ///
    /// A no-op for out-of-range indices; a re-rendered list may hand us a
    /// stale index and that must never panic.
    pub fn remove_file(&mut self, index: usize) {
        if self.phase == SessionPhase::Configuring && index < self.files.len() {
            self.files.remove(index);
        }
    }

    /// Run the pre-submission checks against the current form values.
    pub fn validate(&self, values: &HashMap<String, String>) -> std::result::Result<(), ValidationError> {
        match self.operation {
            Some(op) => validate_submission(op, &self.files, values),
            None => Err(ValidationError::MissingFile),
        }
    }

    /// Validate and move to `Submitting`.
    ///
    /// Only valid from `Configuring`; a second submit while one is in
    /// flight is rejected. Returns a ticket identifying this submission;
    /// pass it back to [`complete`](Self::complete) or
    /// [`fail_submission`](Self::fail_submission) so stale results from a
    /// cancelled session are discarded.
    pub fn begin_submission(&mut self, values: &HashMap<String, String>) -> Result<u64> {
        match self.phase {
            SessionPhase::Configuring => {}
            SessionPhase::Submitting => return Err(BlattwerkError::SubmissionInFlight),
            SessionPhase::Idle | SessionPhase::Completed => {
                return Err(BlattwerkError::NoActiveSession);
            }
        }
        self.validate(values)?;

        self.phase = SessionPhase::Submitting;
        Ok(self.generation)
    }

    /// Record a successful submission. Returns false when the ticket is
    /// stale (session cancelled or restarted meanwhile) and the result must
    /// be discarded.
    pub fn complete(&mut self, ticket: u64) -> bool {
        if ticket != self.generation || self.phase != SessionPhase::Submitting {
            debug!(ticket, "discarding stale completion");
            return false;
        }
        self.phase = SessionPhase::Completed;
        true
    }

    /// Record a failed submission: back to `Configuring` with staged files
    /// intact so the user can retry. Returns false for stale tickets.
    pub fn fail_submission(&mut self, ticket: u64) -> bool {
        if ticket != self.generation || self.phase != SessionPhase::Submitting {
            debug!(ticket, "discarding stale failure");
            return false;
        }
        self.phase = SessionPhase::Configuring;
        true
    }

    /// Auto-close a completed session after its result was handled.
    ///
    /// A no-op when the user already moved on (stale ticket or not
    /// `Completed`). Returns true when the session returned to `Idle`.
    pub fn finish(&mut self, ticket: u64) -> bool {
        if ticket != self.generation || self.phase != SessionPhase::Completed {
            return false;
        }
        self.cancel();
        true
    }

    /// End the session from any state: staged files are discarded and any
    /// in-flight result loses its audience. The request itself is not
    /// aborted.
    pub fn cancel(&mut self) {
        if self.phase != SessionPhase::Idle {
            info!("session closed");
        }
        self.phase = SessionPhase::Idle;
        self.operation = None;
        self.files.clear();
        self.generation += 1;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-submission checks, in order: file presence, declared required fields
/// in descriptor order, then operation-specific field policies. Only the
/// first failure is reported.
pub fn validate_submission(
    op: &OperationDescriptor,
    files: &[StagedFile],
    values: &HashMap<String, String>,
) -> std::result::Result<(), ValidationError> {
    if op.requires_file && files.is_empty() {
        return Err(ValidationError::MissingFile);
    }

    for field in op.fields {
        let value = values.get(field.name).map(String::as_str).unwrap_or("");
        if field.required && value.trim().is_empty() {
            return Err(ValidationError::MissingField { label: field.label });
        }
    }

    for field in op.fields {
        if let FieldKind::Password { min_len, .. } = field.kind {
            let value = values.get(field.name).map(String::as_str).unwrap_or("");
            if !value.is_empty() && value.chars().count() < min_len {
                return Err(ValidationError::TooShort {
                    label: field.label,
                    min: min_len,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{initial_values, lookup};

    fn file(name: &str) -> StagedFile {
        StagedFile::new(name, vec![0u8; 16])
    }

    fn configuring(key: &str) -> Session {
        let mut session = Session::new();
        session.select(key).expect("known operation");
        session
    }

    #[test]
    fn unknown_operation_stays_idle() {
        let mut session = Session::new();
        let err = session.select("split").unwrap_err();
        assert!(matches!(err, BlattwerkError::UnknownOperation(_)));
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.operation().is_none());
    }

    #[test]
    fn select_resets_staged_files() {
        let mut session = configuring("merge");
        session.add_files(vec![file("a.pdf"), file("b.pdf")]);
        assert_eq!(session.files().len(), 2);

        session.select("compress").unwrap();
        assert!(session.files().is_empty());
        assert_eq!(session.phase(), SessionPhase::Configuring);
    }

    #[test]
    fn single_cardinality_keeps_first_of_many() {
        let mut session = configuring("compress");
        let outcome = session.add_files(vec![file("a.pdf"), file("b.pdf"), file("c.pdf")]);
        assert_eq!(outcome, AddOutcome::TruncatedToFirst);
        assert_eq!(session.files().len(), 1);
        assert_eq!(session.files()[0].name, "a.pdf");
    }

    #[test]
    fn single_cardinality_replaces_on_second_add() {
        let mut session = configuring("compress");
        assert_eq!(session.add_files(vec![file("a.pdf")]), AddOutcome::Added(1));
        assert_eq!(session.add_files(vec![file("b.pdf")]), AddOutcome::Replaced);
        assert_eq!(session.files().len(), 1);
        assert_eq!(session.files()[0].name, "b.pdf");
    }

    #[test]
    fn multiple_cardinality_accumulates_in_order() {
        let mut session = configuring("merge");
        session.add_files(vec![file("a.pdf")]);
        session.add_files(vec![file("b.pdf"), file("c.pdf")]);
        let names: Vec<_> = session.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn remove_shifts_later_indices_down() {
        let mut session = configuring("merge");
        session.add_files(vec![file("a.pdf"), file("b.pdf"), file("c.pdf")]);
        session.remove_file(1);
        let names: Vec<_> = session.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "c.pdf"]);
    }

    #[test]
    fn remove_out_of_range_is_a_noop() {
        let mut session = configuring("merge");
        session.add_files(vec![file("a.pdf")]);
        session.remove_file(5);
        assert_eq!(session.files().len(), 1);
    }

    #[test]
    fn submit_without_required_file_is_refused() {
        let mut session = configuring("merge");
        let values = HashMap::new();
        let err = session.begin_submission(&values).unwrap_err();
        assert!(matches!(
            err,
            BlattwerkError::Validation(ValidationError::MissingFile)
        ));
        assert_eq!(session.phase(), SessionPhase::Configuring);
    }

    #[test]
    fn file_check_runs_before_field_checks() {
        let session = configuring("encrypt");
        // No file AND no password: file presence must be reported first.
        let values = initial_values(lookup("encrypt").unwrap().fields);
        assert_eq!(session.validate(&values), Err(ValidationError::MissingFile));
    }

    #[test]
    fn required_field_must_have_nonblank_value() {
        let mut session = configuring("watermark");
        session.add_files(vec![file("a.pdf")]);
        let mut values = initial_values(lookup("watermark").unwrap().fields);
        values.insert("watermark_text".into(), "   ".into());
        assert_eq!(
            session.validate(&values),
            Err(ValidationError::MissingField {
                label: "Watermark text"
            })
        );
    }

    #[test]
    fn short_password_is_refused_and_six_chars_pass() {
        let mut session = configuring("encrypt");
        session.add_files(vec![file("a.pdf")]);
        let mut values = initial_values(lookup("encrypt").unwrap().fields);

        values.insert("password".into(), "12345".into());
        let err = session.begin_submission(&values).unwrap_err();
        assert!(matches!(
            err,
            BlattwerkError::Validation(ValidationError::TooShort { min: 6, .. })
        ));
        assert_eq!(session.phase(), SessionPhase::Configuring);

        values.insert("password".into(), "123456".into());
        assert!(session.begin_submission(&values).is_ok());
        assert_eq!(session.phase(), SessionPhase::Submitting);
    }

    #[test]
    fn restyle_needs_text_but_no_file() {
        let session = configuring("edit-text-style");
        let mut values = initial_values(lookup("edit-text-style").unwrap().fields);
        assert_eq!(
            session.validate(&values),
            Err(ValidationError::MissingField {
                label: "Text content"
            })
        );

        values.insert("text_content".into(), "hello".into());
        assert_eq!(session.validate(&values), Ok(()));
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut session = configuring("merge");
        session.add_files(vec![file("a.pdf"), file("b.pdf")]);
        let values = HashMap::new();
        session.begin_submission(&values).unwrap();
        let err = session.begin_submission(&values).unwrap_err();
        assert!(matches!(err, BlattwerkError::SubmissionInFlight));
    }

    #[test]
    fn failure_returns_to_configuring_with_files_intact() {
        let mut session = configuring("merge");
        session.add_files(vec![file("a.pdf"), file("b.pdf")]);
        let ticket = session.begin_submission(&HashMap::new()).unwrap();
        assert!(session.fail_submission(ticket));
        assert_eq!(session.phase(), SessionPhase::Configuring);
        assert_eq!(session.files().len(), 2);
    }

    #[test]
    fn success_reaches_completed_and_finish_auto_closes() {
        let mut session = configuring("merge");
        session.add_files(vec![file("a.pdf"), file("b.pdf")]);
        let ticket = session.begin_submission(&HashMap::new()).unwrap();
        assert!(session.complete(ticket));
        assert_eq!(session.phase(), SessionPhase::Completed);

        assert!(session.finish(ticket));
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.files().is_empty());
    }

    #[test]
    fn delayed_finish_never_kills_a_newer_session() {
        let mut session = configuring("merge");
        session.add_files(vec![file("a.pdf"), file("b.pdf")]);
        let ticket = session.begin_submission(&HashMap::new()).unwrap();
        session.complete(ticket);

        // User opens another tool before the auto-close timer fires.
        session.select("compress").unwrap();
        assert!(!session.finish(ticket));
        assert_eq!(session.phase(), SessionPhase::Configuring);
        assert_eq!(session.operation().map(|op| op.key), Some("compress"));
    }

    #[test]
    fn cancel_mid_flight_goes_idle_and_discards_late_result() {
        let mut session = configuring("merge");
        session.add_files(vec![file("a.pdf"), file("b.pdf")]);
        let ticket = session.begin_submission(&HashMap::new()).unwrap();

        session.cancel();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.files().is_empty());

        // The in-flight request eventually resolves; its result is stale.
        assert!(!session.complete(ticket));
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn stale_ticket_does_not_resurrect_a_new_session() {
        let mut session = configuring("merge");
        session.add_files(vec![file("a.pdf"), file("b.pdf")]);
        let ticket = session.begin_submission(&HashMap::new()).unwrap();

        // User abandons and starts a different tool before the response lands.
        session.cancel();
        session.select("compress").unwrap();

        assert!(!session.complete(ticket));
        assert!(!session.fail_submission(ticket));
        assert_eq!(session.phase(), SessionPhase::Configuring);
    }

    #[test]
    fn tray_is_frozen_while_submitting() {
        let mut session = configuring("merge");
        session.add_files(vec![file("a.pdf"), file("b.pdf")]);
        session.begin_submission(&HashMap::new()).unwrap();

        assert_eq!(session.add_files(vec![file("c.pdf")]), AddOutcome::Rejected);
        session.remove_file(0);
        assert_eq!(session.files().len(), 2);
    }
}
