//! Writes starter configuration files

use anyhow::{bail, Result};
use std::path::Path;

use crate::navigator::NavigatorConfig;
use crate::utils::write_config_file;

const CREDENTIALS_TEMPLATE: &str = r#"# Credentials referenced by navigator.toml
#
# [[credentials]]
# id = "aws-ci"
# kind = "aws"
# access_key_id = "AKIA..."
# secret_access_key = "..."
#
# [[credentials]]
# id = "git-ssh"
# kind = "ssh-private-key"
# username = "APKA..."
# private_key_path = "~/.ssh/codecommit_rsa"
#
# [[credentials]]
# id = "git-https"
# kind = "username-password"
# username = "ci-at-123456789012"
# password = "..."
"#;

/// Handles `ccnav init`
///
/// Writes a default navigator configuration. An existing configuration is only
/// replaced with `force`; an existing credentials file is never touched.
pub fn handle_init_command(config_path: &Path, credentials_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists, pass --force to overwrite it",
            config_path.display()
        );
    }

    NavigatorConfig::default().save(config_path)?;
    println!("✅ Wrote {}", config_path.display());

    if credentials_path.exists() {
        println!("   Keeping {}", credentials_path.display());
    } else {
        write_config_file(credentials_path, CREDENTIALS_TEMPLATE)?;
        println!("✅ Wrote {}", credentials_path.display());
    }

    println!();
    println!("Set api_credentials_id and transport_credentials_id, then run `ccnav validate`.");
    Ok(())
}
