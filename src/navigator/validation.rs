//! Configuration checks run before a navigator is saved or used

use crate::core::{compile_full_match, is_code_commit_url, CODE_COMMIT_URL_PATTERN};
use crate::credentials::{CredentialKind, CredentialsProvider};

use super::NavigatorConfig;

/// Outcome of a single field check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Ok,
    Error(String),
}

impl Validation {
    pub fn is_ok(&self) -> bool {
        matches!(self, Validation::Ok)
    }
}

/// The endpoint URL must be a whole `https://codecommit.<region>.amazonaws.com`
pub fn check_endpoint_url(endpoint_url: &str) -> Validation {
    if is_code_commit_url(endpoint_url) {
        Validation::Ok
    } else {
        Validation::Error(format!(
            "The CodeCommit URL must match {CODE_COMMIT_URL_PATTERN}"
        ))
    }
}

pub fn check_credentials_id(credentials_id: &str) -> Validation {
    if credentials_id.trim().is_empty() {
        Validation::Error("Credentials are required".to_string())
    } else {
        Validation::Ok
    }
}

pub fn check_pattern(pattern: &str) -> Validation {
    match compile_full_match(pattern) {
        Ok(_) => Validation::Ok,
        Err(e) => Validation::Error(e.to_string()),
    }
}

/// One checked field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    pub field: &'static str,
    pub result: Validation,
}

/// Results of [`validate_config`], in field order
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub checks: Vec<FieldCheck>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.checks.iter().all(|check| check.result.is_ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = &FieldCheck> {
        self.checks.iter().filter(|check| !check.result.is_ok())
    }

    fn push(&mut self, field: &'static str, result: Validation) {
        self.checks.push(FieldCheck { field, result });
    }
}

/// Checks every field of `config`
///
/// When a credentials provider is given, credential ids must also resolve to a
/// credential of the right kind.
pub fn validate_config(
    config: &NavigatorConfig,
    credentials: Option<&dyn CredentialsProvider>,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    report.push(
        "endpoint_url",
        check_endpoint_url(config.endpoint_url().unwrap_or_default()),
    );

    if let Some(pattern) = config.pattern() {
        report.push("pattern", check_pattern(pattern));
    }

    let credential_fields = [
        ("api_credentials_id", config.api_credentials_id(), CredentialKind::Aws),
        (
            "transport_credentials_id",
            config.transport_credentials_id(),
            CredentialKind::GitTransport,
        ),
    ];
    for (field, id, kind) in credential_fields {
        let id = id.unwrap_or_default();
        let mut result = check_credentials_id(id);
        if let (Validation::Ok, Some(provider)) = (&result, credentials) {
            if provider.lookup(id, kind).is_none() {
                result = Validation::Error(format!("No {kind:?} credentials with id '{id}'"));
            }
        }
        report.push(field, result);
    }

    report
}
