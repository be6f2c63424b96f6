// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — owns the processing client and config persistence,
// and provides async-friendly methods for the Dioxus UI to call.
//
// All fields are cheaply cloneable (Arc-wrapped) so the struct can be passed
// into closures and async blocks without lifetime issues. The client is
// cloned out of its mutex before any await, so no lock is held across a
// suspension point.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use blattwerk_client::{ProcessingClient, SubmissionOutcome};
use blattwerk_core::AppConfig;
use blattwerk_core::error::Result;
use blattwerk_core::registry::OperationDescriptor;
use blattwerk_core::session::StagedFile;

use super::data_dir;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
#[derive(Clone)]
pub struct AppServices {
    client: Arc<Mutex<ProcessingClient>>,
    config: Arc<Mutex<AppConfig>>,
    data_dir: PathBuf,
}

impl AppServices {
    /// Initialise all services. Call once at app startup.
    pub fn init() -> Result<Self> {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");

        let config = load_config(&dir).unwrap_or_default();
        let client = ProcessingClient::new(&config.service_url)?;

        Ok(Self {
            client: Arc::new(Mutex::new(client)),
            config: Arc::new(Mutex::new(config)),
            data_dir: dir,
        })
    }

    /// In-memory services with default settings, for when the persisted
    /// config is unusable.
    pub fn fallback() -> Self {
        let config = AppConfig::default();
        let client = ProcessingClient::new(&config.service_url)
            .expect("default service URL must be valid");
        Self {
            client: Arc::new(Mutex::new(client)),
            config: Arc::new(Mutex::new(config)),
            data_dir: data_dir::data_dir(),
        }
    }

    // -- Submission ----------------------------------------------------------

    /// Submit one job to the processing service.
    pub async fn submit_operation(
        &self,
        op: &'static OperationDescriptor,
        files: &[StagedFile],
        options: &HashMap<String, String>,
    ) -> Result<SubmissionOutcome> {
        let client = self.client.lock().expect("client lock poisoned").clone();
        client.submit(op, files, options).await
    }

    // -- Downloads -----------------------------------------------------------

    /// Write a downloaded result under `filename` into the download
    /// directory. Returns the full path written.
    pub fn save_download(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        let dir = self.download_dir();
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(filename);
        std::fs::write(&path, bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "result saved");
        Ok(path)
    }

    /// The effective download directory: the configured override when set,
    /// the platform downloads directory otherwise.
    pub fn download_dir(&self) -> PathBuf {
        let config = self.config.lock().expect("config lock poisoned");
        match config.download_dir.as_deref() {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => data_dir::downloads_dir(),
        }
    }

    // -- Config Persistence --------------------------------------------------

    /// Get a clone of the current config.
    pub fn config(&self) -> AppConfig {
        self.config.lock().expect("config lock poisoned").clone()
    }

    /// Update and persist the config. Rebuilds the processing client when
    /// the service URL changed.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        {
            let mut client = self.client.lock().expect("client lock poisoned");
            if client.base_url() != config.service_url.trim().trim_end_matches('/') {
                *client = ProcessingClient::new(&config.service_url)?;
                info!(url = %client.base_url(), "processing client retargeted");
            }
        }
        *self.config.lock().expect("config lock poisoned") = config.clone();
        persist_config(&self.data_dir, config)
    }
}

// -- Config file persistence -------------------------------------------------

const CONFIG_FILE: &str = "config.json";

fn load_config(data_dir: &Path) -> Option<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&data) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!(error = %e, "persisted config unreadable — using defaults");
            None
        }
    }
}

fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blattwerk_core::config::Theme;

    #[test]
    fn config_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.service_url = "http://processing.local:9000".into();
        config.theme = Theme::Light;

        persist_config(dir.path(), &config).unwrap();
        let loaded = load_config(dir.path()).unwrap();
        assert_eq!(loaded.service_url, "http://processing.local:9000");
        assert_eq!(loaded.theme, Theme::Light);
    }

    #[test]
    fn unreadable_config_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "not json").unwrap();
        assert!(load_config(dir.path()).is_none());
    }

    #[test]
    fn save_download_writes_into_override_dir() {
        let dir = tempfile::tempdir().unwrap();
        let svc = AppServices::fallback();
        let mut config = svc.config();
        config.download_dir = Some(dir.path().to_string_lossy().into_owned());
        *svc.config.lock().unwrap() = config;

        let path = svc.save_download("merged_1.pdf", b"%PDF-1.7").unwrap();
        assert_eq!(path, dir.path().join("merged_1.pdf"));
        assert_eq!(std::fs::read(path).unwrap(), b"%PDF-1.7");
    }
}
