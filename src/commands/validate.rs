//! Checks the navigator configuration without contacting AWS

use anyhow::{bail, Result};
use std::path::Path;

use crate::credentials::{CredentialStore, CredentialsProvider};
use crate::navigator::{validate_config, NavigatorConfig, Validation, ValidationReport};

/// Handles `ccnav validate`
pub fn handle_validate_command(config_path: &Path, credentials_path: &Path) -> Result<()> {
    let config = NavigatorConfig::load(config_path)?;
    let store = if credentials_path.exists() {
        Some(CredentialStore::load(credentials_path)?)
    } else {
        println!(
            "⚠️  {} not found, credential ids are only checked for presence",
            credentials_path.display()
        );
        None
    };

    let report = validate_config(
        &config,
        store.as_ref().map(|store| store as &dyn CredentialsProvider),
    );
    println!("{}", render_report(&config, &report));

    let failures = report.errors().count();
    if failures > 0 {
        bail!("{failures} configuration problem(s) in {}", config_path.display());
    }
    Ok(())
}

fn render_report(config: &NavigatorConfig, report: &ValidationReport) -> String {
    let mut lines = vec![format!("🔧 Navigator {}", config.id())];
    for check in &report.checks {
        match &check.result {
            Validation::Ok => lines.push(format!("   ✅ {}", check.field)),
            Validation::Error(message) => {
                lines.push(format!("   ❌ {:26} # {message}", check.field))
            }
        }
    }
    if let Some(region) = config.region() {
        lines.push(format!("   Region: {region}"));
    }
    lines.join("\n")
}
