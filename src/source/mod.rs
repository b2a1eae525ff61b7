//! Git source definitions produced for discovered repositories

pub mod endpoint;
pub mod factory;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::navigator::NavigatorRequest;

pub use endpoint::resolve_remote;
pub use factory::SourceFactory;

/// Behaviour attached to every materialized git source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SourceTrait {
    /// Discover branches
    BranchDiscovery,
    /// Discover tags
    TagDiscovery,
    /// Clean the workspace before every checkout
    CleanBeforeCheckout,
    /// Shallow clone with the given history depth
    ShallowClone { depth: u32 },
}

/// Immutable git-backed source record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitSource {
    id: String,
    project_name: String,
    remote: String,
    credentials_id: Option<String>,
    traits: Arc<[SourceTrait]>,
}

impl GitSource {
    /// `<navigator id>::<repository name>`
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Clone URL handed to git
    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Transport credentials used for cloning
    pub fn credentials_id(&self) -> Option<&str> {
        self.credentials_id.as_deref()
    }

    pub fn traits(&self) -> &[SourceTrait] {
        &self.traits
    }
}

/// Consuming builder for [`GitSource`]
#[derive(Debug, Clone)]
pub struct GitSourceBuilder {
    id: String,
    project_name: String,
    remote: String,
    credentials_id: Option<String>,
    traits: Arc<[SourceTrait]>,
}

impl GitSourceBuilder {
    pub fn new(id: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            project_name: project_name.into(),
            remote: String::new(),
            credentials_id: None,
            traits: Arc::from(Vec::new()),
        }
    }

    /// Takes traits and transport credentials from the discovery request
    pub fn with_request(mut self, request: &NavigatorRequest) -> Self {
        self.traits = Arc::clone(request.traits());
        self.credentials_id = request.transport_credentials_id().map(str::to_string);
        self
    }

    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    pub fn build(self) -> GitSource {
        GitSource {
            id: self.id,
            project_name: self.project_name,
            remote: self.remote,
            credentials_id: self.credentials_id,
            traits: self.traits,
        }
    }
}
