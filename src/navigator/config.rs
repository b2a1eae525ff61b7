//! Navigator configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::{
    extract_region, ABSENT_ID_PART, DEFAULT_PATTERN, DEFAULT_SERVER_URL, NAVIGATOR_CONFIG_FILE,
    SEPARATOR_ID,
};
use crate::error::ConfigError;
use crate::source::SourceTrait;
use crate::utils::{config_dir, write_config_file};

fn empty_traits() -> Arc<[SourceTrait]> {
    Arc::from(Vec::new())
}

/// Settings for one CodeCommit navigator
///
/// Values are fixed once built; the `with_*` methods return an updated copy.
/// `Default` gives the settings a freshly created navigator starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    endpoint_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_credentials_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    transport_credentials_id: Option<String>,
    #[serde(default = "empty_traits")]
    traits: Arc<[SourceTrait]>,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self::unconfigured()
            .with_endpoint_url(DEFAULT_SERVER_URL)
            .with_pattern(DEFAULT_PATTERN)
            .with_traits(Some(vec![SourceTrait::BranchDiscovery]))
    }
}

impl NavigatorConfig {
    /// A navigator with nothing set
    pub fn unconfigured() -> Self {
        Self {
            endpoint_url: None,
            pattern: None,
            api_credentials_id: None,
            transport_credentials_id: None,
            traits: empty_traits(),
        }
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_api_credentials_id(mut self, id: impl Into<String>) -> Self {
        self.api_credentials_id = Some(id.into());
        self
    }

    pub fn with_transport_credentials_id(mut self, id: impl Into<String>) -> Self {
        self.transport_credentials_id = Some(id.into());
        self
    }

    /// Replaces the traits; `None` clears them
    pub fn with_traits(mut self, traits: Option<Vec<SourceTrait>>) -> Self {
        self.traits = traits.map(Arc::from).unwrap_or_else(empty_traits);
        self
    }

    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn api_credentials_id(&self) -> Option<&str> {
        self.api_credentials_id.as_deref()
    }

    pub fn transport_credentials_id(&self) -> Option<&str> {
        self.transport_credentials_id.as_deref()
    }

    pub fn traits(&self) -> &Arc<[SourceTrait]> {
        &self.traits
    }

    /// `<endpoint url>::<api credentials id>`, absent parts rendered as `null`
    pub fn id(&self) -> String {
        format!(
            "{}{SEPARATOR_ID}{}",
            self.endpoint_url.as_deref().unwrap_or(ABSENT_ID_PART),
            self.api_credentials_id.as_deref().unwrap_or(ABSENT_ID_PART),
        )
    }

    /// Region parsed from the endpoint URL
    pub fn region(&self) -> Option<String> {
        extract_region(self.endpoint_url.as_deref())
    }

    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        write_config_file(path, &self.to_toml_string()?)
    }

    /// Default location under the user's configuration directory
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join(NAVIGATOR_CONFIG_FILE))
    }
}
