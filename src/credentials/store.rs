//! TOML-backed credential store

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::{Credential, CredentialKind, CredentialsProvider};
use crate::core::CREDENTIALS_FILE;
use crate::error::ConfigError;
use crate::utils::config_dir;

/// One `[[credentials]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialEntry {
    pub id: String,
    #[serde(flatten)]
    pub credential: Credential,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CredentialsFile {
    #[serde(default)]
    credentials: Vec<CredentialEntry>,
}

/// Credentials loaded from a TOML file
///
/// ```toml
/// [[credentials]]
/// id = "aws-ci"
/// kind = "aws"
/// access_key_id = "AKIA..."
/// secret_access_key = "..."
///
/// [[credentials]]
/// id = "git-ssh"
/// kind = "ssh-private-key"
/// username = "APKA..."
/// private_key_path = "/home/ci/.ssh/codecommit_rsa"
/// ```
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    entries: Vec<CredentialEntry>,
}

impl CredentialStore {
    /// Builds a store from entries, rejecting duplicate ids
    pub fn from_entries(entries: Vec<CredentialEntry>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(ConfigError::DuplicateCredentials(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let file: CredentialsFile = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        Self::from_entries(file.credentials)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Default location under the user's configuration directory
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join(CREDENTIALS_FILE))
    }

    pub fn entries(&self) -> &[CredentialEntry] {
        &self.entries
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }
}

impl CredentialsProvider for CredentialStore {
    fn lookup(&self, id: &str, kind: CredentialKind) -> Option<Credential> {
        self.entries
            .iter()
            .find(|entry| entry.id == id && entry.credential.matches(kind))
            .map(|entry| entry.credential.clone())
    }
}
