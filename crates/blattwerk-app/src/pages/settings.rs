// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings page — persistent app configuration.

use dioxus::prelude::*;

use blattwerk_core::config::Theme;

use crate::services::app_services::AppServices;
use crate::state::AppState;
use crate::theme;

#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut save_msg = use_signal(|| Option::<String>::None);
    let palette = theme::palette(state.read().config.theme);

    let input_style = format!(
        "padding: 8px; border: 1px solid {}; border-radius: 8px; background: {}; color: {}; width: 320px;",
        palette.border, palette.card_bg, palette.fg
    );
    let download_dir = state.read().config.download_dir.clone().unwrap_or_default();
    let placeholder_dir = svc.download_dir().to_string_lossy().into_owned();

    rsx! {
        div {
            h1 { "Settings" }

            section { style: "margin: 16px 0;",
                h3 { "Processing service" }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid {palette.border};",
                    span { "Service URL" }
                    input {
                        r#type: "text",
                        style: "{input_style}",
                        value: "{state.read().config.service_url}",
                        onchange: move |evt| {
                            state.write().config.service_url = evt.value();
                        },
                    }
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Downloads" }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid {palette.border};",
                    span { "Save results to" }
                    input {
                        r#type: "text",
                        style: "{input_style}",
                        value: "{download_dir}",
                        placeholder: "{placeholder_dir}",
                        onchange: move |evt| {
                            let value = evt.value();
                            state.write().config.download_dir =
                                if value.trim().is_empty() { None } else { Some(value) };
                        },
                    }
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Appearance" }
                div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid {palette.border};",
                    span { "Dark theme" }
                    input {
                        r#type: "checkbox",
                        checked: state.read().config.theme == Theme::Dark,
                        onchange: move |evt| {
                            state.write().config.theme =
                                if evt.checked() { Theme::Dark } else { Theme::Light };
                        },
                    }
                }
            }

            // Save button
            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: {palette.accent}; color: white; font-size: 16px; margin-top: 8px; cursor: pointer;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let config = state.read().config.clone();
                        match svc.save_config(&config) {
                            Ok(()) => {
                                tracing::info!("settings saved");
                                save_msg.set(Some("Settings saved.".into()));
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "failed to save settings");
                                save_msg.set(Some(format!("Save failed: {e}")));
                            }
                        }
                    }
                },
                "Save Settings"
            }
            if let Some(ref msg) = *save_msg.read() {
                p { style: "color: #34c759; font-size: 14px; text-align: center; margin-top: 8px;",
                    "{msg}"
                }
            }

            section { style: "margin: 24px 0;",
                h3 { "About" }
                p { style: "color: {palette.muted}; font-size: 14px;",
                    "Blattwerk v0.2.0"
                    br {}
                    "Desktop toolbox for a remote document-processing service"
                    br {}
                    "PMPL-1.0-or-later"
                }
            }
        }
    }
}
