//! `aws-sdk-codecommit` backed client

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_codecommit::config::Region;
use aws_sdk_codecommit::error::DisplayErrorContext;
use aws_sdk_codecommit::Client;
use std::sync::Arc;
use tracing::debug;

use super::{ClientFactory, CodeCommitApi, RepositoryMetadata, RepositoryPage};
use crate::credentials::AwsCredentials;
use crate::error::{ApiError, DiscoveryError};

const LIST_REPOSITORIES: &str = "ListRepositories";
const GET_REPOSITORY: &str = "GetRepository";

/// CodeCommit client bound to one region and credential set
#[derive(Debug, Clone)]
pub struct SdkClient {
    client: Client,
}

impl SdkClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CodeCommitApi for SdkClient {
    async fn list_repositories(&self, next_token: Option<&str>) -> Result<RepositoryPage, ApiError> {
        let output = self
            .client
            .list_repositories()
            .set_next_token(next_token.map(str::to_string))
            .send()
            .await
            .map_err(|e| ApiError::Service {
                operation: LIST_REPOSITORIES,
                message: DisplayErrorContext(&e).to_string(),
            })?;

        let repository_names = output
            .repositories()
            .iter()
            .filter_map(|pair| pair.repository_name().map(str::to_string))
            .collect();

        Ok(RepositoryPage {
            repository_names,
            next_token: output.next_token().map(str::to_string),
        })
    }

    async fn get_repository(&self, repository_name: &str) -> Result<RepositoryMetadata, ApiError> {
        let output = self
            .client
            .get_repository()
            .repository_name(repository_name)
            .send()
            .await
            .map_err(|e| {
                let not_found = e
                    .as_service_error()
                    .is_some_and(|service| service.is_repository_does_not_exist_exception());
                if not_found {
                    ApiError::RepositoryNotFound(repository_name.to_string())
                } else {
                    ApiError::Service {
                        operation: GET_REPOSITORY,
                        message: DisplayErrorContext(&e).to_string(),
                    }
                }
            })?;

        let metadata = output.repository_metadata().ok_or(ApiError::MissingField {
            operation: GET_REPOSITORY,
            field: "repositoryMetadata",
        })?;

        let clone_url_http = metadata.clone_url_http().ok_or(ApiError::MissingField {
            operation: GET_REPOSITORY,
            field: "cloneUrlHttp",
        })?;
        let clone_url_ssh = metadata.clone_url_ssh().ok_or(ApiError::MissingField {
            operation: GET_REPOSITORY,
            field: "cloneUrlSsh",
        })?;

        Ok(RepositoryMetadata {
            repository_name: repository_name.to_string(),
            clone_url_http: clone_url_http.to_string(),
            clone_url_ssh: clone_url_ssh.to_string(),
        })
    }
}

/// Builds [`SdkClient`]s
///
/// Static keys are used when the navigator resolved an API credential; otherwise
/// the AWS default credential chain (environment, profile, instance role) applies.
#[derive(Debug, Clone, Default)]
pub struct SdkClientFactory {
    endpoint_url: Option<String>,
}

impl SdkClientFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends API calls to `endpoint_url` instead of the regional endpoint
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }
}

#[async_trait]
impl ClientFactory for SdkClientFactory {
    async fn build(
        &self,
        region: &str,
        credentials: Option<&AwsCredentials>,
    ) -> Result<Arc<dyn CodeCommitApi>, DiscoveryError> {
        let mut config_builder = aws_sdk_codecommit::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(region.to_string()));

        if let Some(ref endpoint) = self.endpoint_url {
            debug!(endpoint = %endpoint, "using endpoint override");
            config_builder = config_builder.endpoint_url(endpoint);
        }

        if let Some(credentials) = credentials {
            let static_credentials = Credentials::new(
                credentials.access_key_id.clone(),
                credentials.secret_access_key.clone(),
                credentials.session_token.clone(),
                None, // expiration
                "codecommit-navigator",
            );
            config_builder = config_builder.credentials_provider(static_credentials);
        } else {
            let sdk_config = aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(region.to_string()))
                .load()
                .await;
            match sdk_config.credentials_provider() {
                Some(provider) => {
                    config_builder = config_builder.credentials_provider(provider.clone());
                }
                None => {
                    return Err(DiscoveryError::Client(format!(
                        "no API credentials configured and no default AWS credentials for {region}"
                    )))
                }
            }
        }

        let client = Client::from_conf(config_builder.build());
        Ok(Arc::new(SdkClient::new(client)))
    }
}
