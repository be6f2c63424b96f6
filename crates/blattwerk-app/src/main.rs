// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Blattwerk — desktop toolbox for a remote document-processing service.
//
// Entry point. Initialises logging, backend services, app state, and launches
// the Dioxus UI.

mod components;
mod pages;
mod services;
mod state;
mod theme;

use dioxus::prelude::*;

use pages::home::Home;
use pages::settings::Settings;
use pages::tool::Tool;

use components::toast::ToastHost;
use services::app_services::AppServices;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Blattwerk starting");

    dioxus::launch(app);
}

/// Top-level route enum.
#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/tool/:op_key")]
    Tool { op_key: String },
    #[route("/settings")]
    Settings {},
}

/// Root component.
fn app() -> Element {
    // Initialise backend services (config, processing client)
    let svc = use_hook(|| match AppServices::init() {
        Ok(s) => {
            tracing::info!("backend services initialised");
            s
        }
        Err(e) => {
            tracing::error!(error = %e, "service init failed — using defaults");
            AppServices::fallback()
        }
    });

    // Provide services and state as context for all pages
    use_context_provider(|| svc.clone());
    use_context_provider(|| Signal::new(state::AppState::new(&svc)));

    rsx! {
        Router::<Route> {}
    }
}

/// Persistent top-bar layout wrapping all pages.
#[component]
fn Shell() -> Element {
    let mut state = use_context::<Signal<state::AppState>>();
    let svc = use_context::<AppServices>();
    let palette = theme::palette(state.read().config.theme);

    rsx! {
        div { class: "app-container",
            style: "display: flex; flex-direction: column; height: 100vh; font-family: system-ui, -apple-system, sans-serif; background: {palette.bg}; color: {palette.fg};",

            // Top bar
            header {
                style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; border-bottom: 1px solid {palette.border};",
                Link {
                    to: Route::Home {},
                    style: "font-size: 18px; font-weight: bold; text-decoration: none; color: {palette.fg};",
                    "Blattwerk"
                }
                div { style: "display: flex; align-items: center; gap: 12px;",
                    button {
                        style: "padding: 6px 10px; border-radius: 8px; border: 1px solid {palette.border}; background: {palette.card_bg}; color: {palette.fg}; cursor: pointer;",
                        onclick: {
                            let svc = svc.clone();
                            move |_| {
                                let mut st = state.write();
                                st.config.theme = st.config.theme.toggled();
                                let config = st.config.clone();
                                drop(st);
                                if let Err(e) = svc.save_config(&config) {
                                    tracing::warn!(error = %e, "theme not persisted");
                                }
                            }
                        },
                        {theme::toggle_label(state.read().config.theme)}
                    }
                    Link {
                        to: Route::Settings {},
                        style: "text-decoration: none; color: {palette.muted}; font-size: 14px;",
                        "Settings"
                    }
                }
            }

            // Page content
            div { class: "page-content",
                style: "flex: 1; overflow-y: auto; padding: 16px;",
                Outlet::<Route> {}
            }

            // Toast overlay
            ToastHost {}
        }
    }
}
