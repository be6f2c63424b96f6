// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Light/dark palettes for inline styles.

use blattwerk_core::config::Theme;

/// Colours used by the inline page styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub fg: &'static str,
    pub card_bg: &'static str,
    pub border: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            bg: "#fafafa",
            fg: "#1c1c1e",
            card_bg: "#ffffff",
            border: "#e0e0e0",
            muted: "#666666",
            accent: "#007aff",
        },
        Theme::Dark => Palette {
            bg: "#1c1c1e",
            fg: "#f2f2f7",
            card_bg: "#2c2c2e",
            border: "#3a3a3c",
            muted: "#98989e",
            accent: "#0a84ff",
        },
    }
}

pub fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    }
}
