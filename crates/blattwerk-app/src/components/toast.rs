// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Toast notifications: a fixed overlay host plus fire-and-forget helpers
// that queue a message and schedule its dismissal.

use std::time::Duration;

use dioxus::prelude::*;

use blattwerk_core::error::BlattwerkError;
use blattwerk_core::human_errors::humanize_error;

use crate::state::{AppState, ToastKind};
use crate::theme;

/// Queue a toast and dismiss it after the configured linger time.
pub fn notify(state: Signal<AppState>, kind: ToastKind, message: impl Into<String>) {
    push(state, kind, message.into(), None);
}

/// Queue an error toast with the human-readable message and suggestion.
pub fn notify_error(state: Signal<AppState>, err: &BlattwerkError) {
    let human = humanize_error(err);
    push(state, ToastKind::Error, human.message, Some(human.suggestion));
}

fn push(mut state: Signal<AppState>, kind: ToastKind, message: String, detail: Option<String>) {
    let (id, linger_ms) = {
        let mut st = state.write();
        let linger = st.config.toast_duration_ms;
        (st.push_toast(kind, message, detail), linger)
    };
    spawn(async move {
        tokio::time::sleep(Duration::from_millis(linger_ms)).await;
        state.write().dismiss_toast(id);
    });
}

#[component]
pub fn ToastHost() -> Element {
    let state = use_context::<Signal<AppState>>();
    let palette = theme::palette(state.read().config.theme);

    rsx! {
        div {
            style: "position: fixed; bottom: 16px; right: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 100; max-width: 340px;",
            for toast in state.read().toasts.iter() {
                {
                    let (accent, icon) = match toast.kind {
                        ToastKind::Success => ("#34c759", "\u{2713}"),
                        ToastKind::Error => ("#ff3b30", "\u{2715}"),
                        ToastKind::Info => (palette.accent, "\u{2139}"),
                    };
                    rsx! {
                        div {
                            key: "{toast.id}",
                            style: "display: flex; align-items: flex-start; gap: 10px; padding: 12px 16px; border-radius: 10px; border-left: 4px solid {accent}; background: {palette.card_bg}; color: {palette.fg}; box-shadow: 0 4px 12px rgba(0,0,0,0.25); font-size: 14px;",
                            span { style: "font-size: 16px; font-weight: bold; color: {accent};", "{icon}" }
                            div {
                                p { style: "margin: 0;", "{toast.message}" }
                                if let Some(ref detail) = toast.detail {
                                    p { style: "margin: 4px 0 0 0; font-size: 12px; color: {palette.muted};",
                                        "{detail}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
