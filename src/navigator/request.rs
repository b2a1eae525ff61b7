//! Per-run discovery session

use std::sync::Arc;
use tracing::debug;

use crate::codecommit::CodeCommitApi;
use crate::core::Interrupt;
use crate::source::SourceTrait;

/// Everything a discovery run shares with its source factory
pub struct NavigatorContext {
    pub navigator_id: String,
    pub traits: Arc<[SourceTrait]>,
    pub client: Arc<dyn CodeCommitApi>,
    pub transport_credentials_id: Option<String>,
    pub clone_ssh: bool,
    pub interrupt: Interrupt,
}

impl NavigatorContext {
    /// Opens the session; it is released when the returned request is dropped
    pub fn open(self) -> NavigatorRequest {
        debug!(navigator = %self.navigator_id, clone_ssh = self.clone_ssh, "discovery session opened");
        NavigatorRequest {
            navigator_id: self.navigator_id,
            traits: self.traits,
            client: self.client,
            transport_credentials_id: self.transport_credentials_id,
            clone_ssh: self.clone_ssh,
            interrupt: self.interrupt,
        }
    }
}

/// Scoped session for one discovery run
///
/// Owns the run's client handle. Dropping the request releases it, which covers
/// normal completion as well as early returns and propagated errors.
pub struct NavigatorRequest {
    navigator_id: String,
    traits: Arc<[SourceTrait]>,
    client: Arc<dyn CodeCommitApi>,
    transport_credentials_id: Option<String>,
    clone_ssh: bool,
    interrupt: Interrupt,
}

impl NavigatorRequest {
    pub fn navigator_id(&self) -> &str {
        &self.navigator_id
    }

    pub fn traits(&self) -> &Arc<[SourceTrait]> {
        &self.traits
    }

    pub fn client(&self) -> &dyn CodeCommitApi {
        self.client.as_ref()
    }

    pub fn transport_credentials_id(&self) -> Option<&str> {
        self.transport_credentials_id.as_deref()
    }

    /// Clone over SSH rather than HTTPS
    pub fn clone_ssh(&self) -> bool {
        self.clone_ssh
    }

    pub fn interrupt(&self) -> &Interrupt {
        &self.interrupt
    }
}

impl Drop for NavigatorRequest {
    fn drop(&mut self) {
        debug!(navigator = %self.navigator_id, "discovery session released");
    }
}

impl std::fmt::Debug for NavigatorRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigatorRequest")
            .field("navigator_id", &self.navigator_id)
            .field("traits", &self.traits)
            .field("transport_credentials_id", &self.transport_credentials_id)
            .field("clone_ssh", &self.clone_ssh)
            .finish_non_exhaustive()
    }
}
