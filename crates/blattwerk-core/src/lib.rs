// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Blattwerk — Core types, operation registry, and session engine shared
// across all crates.

pub mod config;
pub mod error;
pub mod format;
pub mod human_errors;
pub mod registry;
pub mod session;

pub use config::AppConfig;
pub use error::BlattwerkError;
pub use registry::{Cardinality, FieldDescriptor, FieldKind, OperationDescriptor};
pub use session::{AddOutcome, Session, SessionPhase, StagedFile};
