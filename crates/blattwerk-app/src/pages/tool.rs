// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tool page — one session: stage files, fill the option form, submit, and
// render the result. Downloads are saved to disk and the session auto-closes
// after a short pause; structured results stay open until the user closes
// them.

use std::collections::HashMap;
use std::time::Duration;

use dioxus::prelude::*;

use blattwerk_client::outcome::{SubmissionOutcome, resolve_filename};
use blattwerk_client::AnalysisReport;
use blattwerk_core::registry::{OperationDescriptor, initial_values};
use blattwerk_core::session::SessionPhase;

use crate::Route;
use crate::components::form::OptionsForm;
use crate::components::results::AnalysisView;
use crate::components::toast::{notify, notify_error};
use crate::components::tray::UploadTray;
use crate::services::app_services::AppServices;
use crate::state::{AppState, ToastKind};
use crate::theme;

/// How long the completion state stays visible before a download session
/// auto-closes.
const CLOSE_DELAY: Duration = Duration::from_millis(1200);

#[component]
pub fn Tool(op_key: String) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let nav = navigator();
    let mut values = use_signal(HashMap::<String, String>::new);
    let mut analysis = use_signal(|| Option::<AnalysisReport>::None);
    let mut saved_to = use_signal(|| Option::<String>::None);

    // Start (or restart) the session for this key. An unknown key aborts
    // with a visible notice and the session stays idle.
    let op: Option<&'static OperationDescriptor> = use_hook(|| {
        match state.write().session.select(&op_key) {
            Ok(op) => {
                values.set(initial_values(op.fields));
                Some(op)
            }
            Err(e) => {
                notify_error(state, &e);
                None
            }
        }
    });

    let palette = theme::palette(state.read().config.theme);

    let Some(op) = op else {
        return rsx! {
            div {
                h1 { "Unknown tool" }
                p { style: "color: {palette.muted};",
                    "This tool doesn't exist. Pick one from the home screen."
                }
                Link { to: Route::Home {}, style: "color: {palette.accent};", "Back to tools" }
            }
        };
    };

    let phase = state.read().session.phase();
    let submitting = phase == SessionPhase::Submitting;

    rsx! {
        div { style: "max-width: 640px; margin: 0 auto;",
            // Header with close
            div { style: "display: flex; justify-content: space-between; align-items: baseline;",
                div {
                    h1 { style: "margin-bottom: 4px;", "{op.title}" }
                    p { style: "color: {palette.muted}; margin-top: 0;", "{op.description}" }
                }
                button {
                    style: "padding: 6px 14px; border-radius: 8px; border: 1px solid {palette.border}; background: {palette.card_bg}; color: {palette.fg}; cursor: pointer;",
                    onclick: move |_| {
                        // Cancel is allowed from any state; an in-flight
                        // request keeps running and its result is discarded.
                        state.write().session.cancel();
                        nav.push(Route::Home {});
                    },
                    if submitting { "Cancel" } else { "Close" }
                }
            }

            if let Some(report) = analysis.read().clone() {
                // Structured result: stays open for reading.
                AnalysisView { report, palette }
            } else {
                // File selection
                section { style: "margin: 16px 0;",
                    h3 {
                        if op.requires_file { "1. Add files" } else { "1. Add a file (optional)" }
                    }
                    UploadTray { disabled: submitting, palette }
                }

                // Options
                if !op.fields.is_empty() {
                    section { style: "margin: 16px 0;",
                        h3 { "2. Options" }
                        OptionsForm { fields: op.fields, values, disabled: submitting, palette }
                    }
                }

                // Submit
                button {
                    style: "width: 100%; padding: 16px; border-radius: 12px; border: none; background: {palette.accent}; color: white; font-size: 17px; font-weight: bold; margin-top: 16px; cursor: pointer;",
                    disabled: submitting,
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            let vals = values.read().clone();
                            let ticket = match state.write().session.begin_submission(&vals) {
                                Ok(ticket) => ticket,
                                Err(e) => {
                                    notify_error(state, &e);
                                    return;
                                }
                            };
                            let files = state.read().session.files().to_vec();
                            let svc = svc.clone();

                            spawn(async move {
                                match svc.submit_operation(op, &files, &vals).await {
                                    Ok(SubmissionOutcome::Analysis(report)) => {
                                        tracing::info!(op = op.key, "analysis ready");
                                        if state.write().session.complete(ticket) {
                                            analysis.set(Some(report));
                                        }
                                    }
                                    Ok(SubmissionOutcome::Download { bytes, filename }) => {
                                        if !state.write().session.complete(ticket) {
                                            return;
                                        }
                                        let name = resolve_filename(op, filename.as_deref());
                                        match svc.save_download(&name, &bytes) {
                                            Ok(path) => {
                                                tracing::info!(op = op.key, path = %path.display(), "download saved");
                                                saved_to.set(Some(path.to_string_lossy().into_owned()));
                                                notify(
                                                    state,
                                                    ToastKind::Success,
                                                    format!("Done. Saved {name}"),
                                                );
                                            }
                                            Err(e) => {
                                                tracing::error!(error = %e, "saving result failed");
                                                notify_error(state, &e);
                                            }
                                        }
                                        tokio::time::sleep(CLOSE_DELAY).await;
                                        if state.write().session.finish(ticket) {
                                            nav.push(Route::Home {});
                                        }
                                    }
                                    Err(e) => {
                                        tracing::error!(op = op.key, error = %e, "submission failed");
                                        if state.write().session.fail_submission(ticket) {
                                            notify_error(state, &e);
                                        }
                                    }
                                }
                            });
                        }
                    },
                    if submitting { "Processing..." } else { "Process" }
                }
            }

            // Stage feedback
            if submitting {
                div { style: "margin-top: 16px; padding: 16px; border-radius: 12px; background: {palette.card_bg}; text-align: center;",
                    p { style: "color: {palette.accent}; font-weight: bold; margin: 0;",
                        // Indeterminate on purpose: the only real signal is
                        // request completion.
                        "Sending to the processing service..."
                    }
                }
            }
            if let Some(ref path) = *saved_to.read() {
                p { style: "color: {palette.muted}; font-size: 13px; margin-top: 12px; text-align: center;",
                    "Saved to {path}"
                }
            }
        }
    }
}
