//! Credentials storage for the PetFriends CLI.
//!
//! Two things live here: the account credentials (email + password, supplied
//! through env vars or `login` prompts) and the auth key the service issued
//! for them. The key is stored as JSON under the platform config dir and
//! treated as valid for the lifetime of a run; the service does not expose
//! expiry to this client.
//!
//! Env var precedence: `PETFRIENDS_AUTH_KEY` overrides the stored key.
//! Account email and password come in through the login command's flags,
//! which also read `PETFRIENDS_EMAIL` / `PETFRIENDS_PASSWORD` for
//! non-interactive runs.

use crate::config::Config;
use crate::error::CliError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Stored auth key plus the email it was issued for.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub auth_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// When the key was obtained from the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl Credentials {
    pub fn new(auth_key: String, email: Option<String>) -> Self {
        Self {
            auth_key: Some(auth_key),
            email,
            saved_at: Some(Utc::now()),
        }
    }

    pub fn load() -> Result<Self, CliError> {
        Self::load_from_path(&Self::path()?)
    }

    /// Load credentials from a specific path (for testing). The
    /// `PETFRIENDS_AUTH_KEY` env var takes precedence over the file.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, CliError> {
        if let Ok(key) = std::env::var("PETFRIENDS_AUTH_KEY") {
            return Ok(Self {
                auth_key: Some(key),
                email: None,
                saved_at: None,
            });
        }

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(CliError::ConfigRead)?;
        serde_json::from_str(&content).map_err(|_| CliError::CredentialsCorrupted)
    }

    pub fn save(&self) -> Result<(), CliError> {
        self.save_to_path(&Self::path()?)
    }

    /// Save credentials to a specific path (for testing).
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), CliError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CliError::ConfigWrite)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(CliError::ConfigWrite)?;
        Ok(())
    }

    pub fn clear() -> Result<(), CliError> {
        Self::clear_at_path(&Self::path()?)
    }

    /// Clear credentials at a specific path.
    pub fn clear_at_path(path: &std::path::Path) -> Result<(), CliError> {
        if path.exists() {
            std::fs::remove_file(path).map_err(CliError::ConfigWrite)?;
        }
        Ok(())
    }

    pub fn path() -> Result<PathBuf, CliError> {
        Ok(Config::config_dir()?.join("credentials.json"))
    }

    pub fn auth_key(&self) -> Option<&str> {
        self.auth_key.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_key.is_some()
    }

    pub fn require_auth_key(&self) -> Result<&str, CliError> {
        self.auth_key().ok_or(CliError::NotAuthenticated)
    }
}
