// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Home page — the tool card grid. One click starts a session.

use dioxus::prelude::*;

use blattwerk_core::registry::OPERATIONS;

use crate::Route;
use crate::state::AppState;
use crate::theme;

#[component]
pub fn Home() -> Element {
    let state = use_context::<Signal<AppState>>();
    let palette = theme::palette(state.read().config.theme);

    rsx! {
        div {
            h1 { "Document Tools" }
            p { style: "color: {palette.muted};",
                "Pick a tool, add your files, and let the processing service do the rest."
            }

            div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 12px; margin-top: 24px;",
                for op in OPERATIONS.iter() {
                    Link {
                        key: "{op.key}",
                        to: Route::Tool { op_key: op.key.to_string() },
                        style: "display: block; padding: 16px; border: 1px solid {palette.border}; border-radius: 12px; background: {palette.card_bg}; text-decoration: none; color: {palette.fg};",
                        strong { "{op.title}" }
                        p { style: "margin: 6px 0 0 0; font-size: 13px; color: {palette.muted};",
                            "{op.description}"
                        }
                    }
                }
            }
        }
    }
}
