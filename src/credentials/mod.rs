//! Credential lookup for the CodeCommit API and git transport
//!
//! The navigator needs two credentials per run: AWS keys to call the API, and a
//! git transport credential whose concrete type decides between SSH and HTTPS
//! clone URLs.

pub mod store;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub use store::{CredentialEntry, CredentialStore};

/// What a lookup is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    /// AWS access keys for the CodeCommit API
    Aws,
    /// Username-based git transport credentials (SSH key or username/password)
    GitTransport,
}

/// A resolved credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Credential {
    Aws(AwsCredentials),
    SshPrivateKey(SshPrivateKey),
    UsernamePassword(UsernamePassword),
}

impl Credential {
    pub fn matches(&self, kind: CredentialKind) -> bool {
        match self {
            Credential::Aws(_) => kind == CredentialKind::Aws,
            Credential::SshPrivateKey(_) | Credential::UsernamePassword(_) => {
                kind == CredentialKind::GitTransport
            }
        }
    }

    /// True for SSH key credentials, which select SSH clone URLs
    pub fn is_ssh_key(&self) -> bool {
        matches!(self, Credential::SshPrivateKey(_))
    }

    pub fn as_aws(&self) -> Option<&AwsCredentials> {
        match self {
            Credential::Aws(credentials) => Some(credentials),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Credential::Aws(_) => "aws",
            Credential::SshPrivateKey(_) => "ssh-private-key",
            Credential::UsernamePassword(_) => "username-password",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshPrivateKey {
    pub username: String,
    pub private_key_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernamePassword {
    pub username: String,
    pub password: String,
}

const REDACTED: &str = "<redacted>";

impl fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &REDACTED)
            .field("session_token", &self.session_token.as_ref().map(|_| REDACTED))
            .finish()
    }
}

impl fmt::Debug for SshPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SshPrivateKey")
            .field("username", &self.username)
            .field("private_key_path", &self.private_key_path)
            .field("passphrase", &self.passphrase.as_ref().map(|_| REDACTED))
            .finish()
    }
}

impl fmt::Debug for UsernamePassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UsernamePassword")
            .field("username", &self.username)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Resolves credential ids to credentials
pub trait CredentialsProvider: Send + Sync {
    /// Returns the credential with `id` if it exists and is of `kind`
    fn lookup(&self, id: &str, kind: CredentialKind) -> Option<Credential>;
}

/// Looks up `id` unless it is absent or blank
pub fn resolve_credentials(
    provider: &dyn CredentialsProvider,
    id: Option<&str>,
    kind: CredentialKind,
) -> Option<Credential> {
    let id = id.filter(|id| !id.trim().is_empty())?;
    provider.lookup(id, kind)
}
