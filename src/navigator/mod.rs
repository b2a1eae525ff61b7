//! CodeCommit navigator
//!
//! A discovery run lists every repository visible to the configured account,
//! filters names through the navigator's pattern, and offers each match to the
//! host through [`SourceObserver::process`] together with a [`SourceFactory`]
//! that can turn the name into a [`crate::source::GitSource`].

pub mod config;
pub mod lister;
pub mod request;
pub mod validation;
pub mod witness;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::codecommit::ClientFactory;
use crate::core::{Interrupt, PatternFilter};
use crate::credentials::{resolve_credentials, Credential, CredentialKind, CredentialsProvider};
use crate::error::DiscoveryError;
use crate::source::SourceFactory;

pub use config::NavigatorConfig;
pub use lister::{list_all, ListingSummary};
pub use request::{NavigatorContext, NavigatorRequest};
pub use validation::{validate_config, Validation, ValidationReport};
pub use witness::{LoggerWitness, RecordingWitness, Witness};

/// Event that triggered a run; scheduled runs carry none
#[derive(Debug, Clone, PartialEq)]
pub struct SourceEvent {
    pub origin: String,
    pub payload: serde_json::Value,
}

/// Host side of a discovery run
#[async_trait]
pub trait SourceObserver: Send + Sync {
    /// Credentials available to the run
    fn credentials(&self) -> &dyn CredentialsProvider;

    /// Signal that aborts pending remote calls
    fn interrupt(&self) -> Interrupt {
        Interrupt::never()
    }

    /// Called once per accepted repository, in listing order
    ///
    /// The host decides whether to call `factory.create(project_name)` at all.
    /// An error ends the run and is returned from [`Navigator::visit_sources`].
    async fn process(
        &self,
        project_name: &str,
        factory: &SourceFactory<'_>,
        event: Option<&SourceEvent>,
        witness: &dyn Witness,
    ) -> Result<(), DiscoveryError>;
}

/// Why a run ended without contacting CodeCommit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The endpoint URL is missing or carries no region
    MissingRegion,
    /// The transport credentials id is missing or resolves to nothing
    MissingTransportCredentials,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Skipped(SkipReason),
    Completed(ListingSummary),
}

/// Discovers CodeCommit repositories for one [`NavigatorConfig`]
pub struct Navigator {
    config: NavigatorConfig,
    clients: Arc<dyn ClientFactory>,
    witness: Arc<dyn Witness>,
}

impl Navigator {
    pub fn new(config: NavigatorConfig, clients: Arc<dyn ClientFactory>) -> Self {
        Self {
            config,
            clients,
            witness: Arc::new(LoggerWitness),
        }
    }

    /// Replaces the witness handed to the host (a [`LoggerWitness`] by default)
    pub fn with_witness(mut self, witness: Arc<dyn Witness>) -> Self {
        self.witness = witness;
        self
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn id(&self) -> String {
        self.config.id()
    }

    /// Runs discovery, offering every matching repository to `observer`
    ///
    /// A navigator without a region or transport credentials is skipped with a
    /// warning. A missing API credential is not: the client then falls back to
    /// the default AWS credential chain.
    pub async fn visit_sources(
        &self,
        observer: &dyn SourceObserver,
    ) -> Result<RunOutcome, DiscoveryError> {
        let credentials = observer.credentials();
        let api_credentials = resolve_credentials(
            credentials,
            self.config.api_credentials_id(),
            CredentialKind::Aws,
        );
        let transport_credentials = resolve_credentials(
            credentials,
            self.config.transport_credentials_id(),
            CredentialKind::GitTransport,
        );
        let region = self.config.region();

        let (region, transport_credentials) = match (region, transport_credentials) {
            (Some(region), Some(transport)) => (region, transport),
            (region, _) => {
                warn!(
                    endpoint = ?self.config.endpoint_url(),
                    api_credentials_id = ?self.config.api_credentials_id(),
                    transport_credentials_id = ?self.config.transport_credentials_id(),
                    region = ?region,
                    "navigator is not fully configured, skipping discovery"
                );
                let reason = if region.is_none() {
                    SkipReason::MissingRegion
                } else {
                    SkipReason::MissingTransportCredentials
                };
                return Ok(RunOutcome::Skipped(reason));
            }
        };

        let navigator_id = self.id();
        info!(
            navigator = %navigator_id,
            region = %region,
            traits = self.config.traits().len(),
            "starting discovery"
        );

        let api_credentials = api_credentials.as_ref().and_then(Credential::as_aws);
        if api_credentials.is_none() {
            debug!("no API credentials resolved, using the default AWS credential chain");
        }
        let client = self.clients.build(&region, api_credentials).await?;

        let request = NavigatorContext {
            navigator_id,
            traits: Arc::clone(self.config.traits()),
            client,
            transport_credentials_id: self.config.transport_credentials_id().map(str::to_string),
            clone_ssh: transport_credentials.is_ssh_key(),
            interrupt: observer.interrupt(),
        }
        .open();

        let summary = self.process_repositories(&request, observer).await?;
        info!(
            navigator = %request.navigator_id(),
            pages = summary.pages,
            candidates = summary.candidates,
            accepted = summary.accepted,
            "discovery finished"
        );
        Ok(RunOutcome::Completed(summary))
    }

    /// Lists repositories through `request` and hands matches to `observer`
    pub async fn process_repositories(
        &self,
        request: &NavigatorRequest,
        observer: &dyn SourceObserver,
    ) -> Result<ListingSummary, DiscoveryError> {
        let pattern = PatternFilter::new(self.config.pattern())?;
        let factory = SourceFactory::new(request.navigator_id(), request);
        let witness = self.witness.as_ref();

        list_all(request.client(), request.interrupt(), &pattern, move |name| async move {
            observer.process(&name, &factory, None, witness).await
        })
        .await
    }
}
