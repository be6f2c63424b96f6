// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — reactive signals for the Dioxus UI.

use blattwerk_core::AppConfig;
use blattwerk_core::session::Session;

use crate::services::app_services::AppServices;

/// Visual flavour of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// One transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    /// Headline.
    pub message: String,
    /// Optional second line (suggestion, server-declared reason).
    pub detail: Option<String>,
}

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The one tool session of this window.
    pub session: Session,
    /// Application settings.
    pub config: AppConfig,
    /// Currently visible toasts, oldest first.
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl AppState {
    /// Create initial state from the backend services.
    pub fn new(svc: &AppServices) -> Self {
        Self {
            session: Session::new(),
            config: svc.config(),
            toasts: Vec::new(),
            next_toast_id: 0,
        }
    }

    /// Queue a toast; returns its id for later dismissal.
    pub fn push_toast(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        detail: Option<String>,
    ) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            detail,
        });
        id
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: Session::new(),
            config: AppConfig::default(),
            toasts: Vec::new(),
            next_toast_id: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique_and_dismissable() {
        let mut state = AppState::default();
        let a = state.push_toast(ToastKind::Info, "one", None);
        let b = state.push_toast(ToastKind::Error, "two", Some("why".into()));
        assert_ne!(a, b);
        assert_eq!(state.toasts.len(), 2);

        state.dismiss_toast(a);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].id, b);

        // Dismissing twice is harmless.
        state.dismiss_toast(a);
        assert_eq!(state.toasts.len(), 1);
    }
}
