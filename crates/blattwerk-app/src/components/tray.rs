// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Upload tray: stage files for the active session, list them with
// human-readable sizes, remove per row.

use dioxus::prelude::*;

use blattwerk_core::format::format_size;
use blattwerk_core::registry::Cardinality;
use blattwerk_core::session::{AddOutcome, StagedFile};

use crate::components::toast::notify;
use crate::state::{AppState, ToastKind};
use crate::theme::Palette;

#[component]
pub fn UploadTray(disabled: bool, palette: Palette) -> Element {
    let mut state = use_context::<Signal<AppState>>();

    let Some(op) = state.read().session.operation() else {
        return rsx! {};
    };
    let pick_label = match op.cardinality {
        Cardinality::Single => "Choose file",
        Cardinality::Multiple => "Choose files",
    };

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 8px;",
            // Staged files
            for (index, file) in state.read().session.files().iter().enumerate() {
                div {
                    key: "{index}-{file.name}",
                    style: "display: flex; justify-content: space-between; align-items: center; padding: 10px 12px; border: 1px solid {palette.border}; border-radius: 8px; background: {palette.card_bg};",
                    div {
                        p { style: "margin: 0; font-size: 14px;", "{file.name}" }
                        p { style: "margin: 0; font-size: 12px; color: {palette.muted};",
                            {format_size(file.size)}
                        }
                    }
                    button {
                        style: "padding: 4px 10px; border-radius: 6px; border: 1px solid {palette.border}; background: transparent; color: {palette.muted}; cursor: pointer;",
                        disabled: disabled,
                        onclick: move |_| {
                            // Stale indices from a re-rendered list are a no-op.
                            state.write().session.remove_file(index);
                        },
                        "Remove"
                    }
                }
            }

            button {
                style: "padding: 12px 24px; border-radius: 8px; border: 1px dashed {palette.accent}; color: {palette.accent}; background: transparent; font-size: 15px; cursor: pointer;",
                disabled: disabled,
                onclick: move |_| {
                    let picked = match op.cardinality {
                        Cardinality::Multiple => rfd::FileDialog::new()
                            .add_filter(op.accept.label(), op.accept.extensions())
                            .pick_files()
                            .unwrap_or_default(),
                        Cardinality::Single => rfd::FileDialog::new()
                            .add_filter(op.accept.label(), op.accept.extensions())
                            .pick_file()
                            .into_iter()
                            .collect(),
                    };
                    if picked.is_empty() {
                        return;
                    }

                    let mut staged = Vec::new();
                    for path in picked {
                        let name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().to_string())
                            .unwrap_or_else(|| "unknown".into());
                        match std::fs::read(&path) {
                            Ok(bytes) => {
                                tracing::info!(file = %name, bytes = bytes.len(), "file loaded");
                                staged.push(StagedFile::new(name, bytes));
                            }
                            Err(e) => {
                                tracing::error!(error = %e, file = %name, "failed to read file");
                                notify(
                                    state,
                                    ToastKind::Error,
                                    format!("Could not read {name}. {e}"),
                                );
                            }
                        }
                    }

                    let outcome = state.write().session.add_files(staged);
                    match outcome {
                        AddOutcome::TruncatedToFirst => notify(
                            state,
                            ToastKind::Info,
                            "This tool takes a single file; kept the first one.",
                        ),
                        AddOutcome::Replaced => {
                            notify(state, ToastKind::Info, "Replaced the staged file.")
                        }
                        AddOutcome::Added(_) | AddOutcome::Rejected => {}
                    }
                },
                "{pick_label}"
            }
        }
    }
}
