// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

/// UI colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Persistent application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the remote processing service.
    pub service_url: String,
    /// Where downloaded results are written. `None` means the platform
    /// downloads directory.
    pub download_dir: Option<String>,
    /// UI colour theme.
    pub theme: Theme,
    /// How long toast notifications stay visible, in milliseconds.
    pub toast_duration_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_url: "http://localhost:8000".into(),
            download_dir: None,
            theme: Theme::Dark,
            toast_duration_ms: 3000,
        }
    }
}
