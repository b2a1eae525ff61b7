//! CodeCommit API seam
//!
//! The navigator only talks to CodeCommit through [`CodeCommitApi`], which keeps
//! the pipeline testable against in-memory fakes. [`sdk`] provides the
//! production implementation on top of `aws-sdk-codecommit`.

pub mod sdk;

use async_trait::async_trait;
use std::sync::Arc;

use crate::credentials::AwsCredentials;
use crate::error::{ApiError, DiscoveryError};

pub use sdk::{SdkClient, SdkClientFactory};

/// One page of the repository listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryPage {
    pub repository_names: Vec<String>,
    pub next_token: Option<String>,
}

impl RepositoryPage {
    /// Continuation token, treating an empty token as the last page
    pub fn continuation(&self) -> Option<&str> {
        self.next_token.as_deref().filter(|token| !token.is_empty())
    }
}

/// Clone URLs of a single repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryMetadata {
    pub repository_name: String,
    pub clone_url_http: String,
    pub clone_url_ssh: String,
}

impl RepositoryMetadata {
    pub fn clone_url(&self, clone_ssh: bool) -> &str {
        if clone_ssh {
            &self.clone_url_ssh
        } else {
            &self.clone_url_http
        }
    }
}

/// Remote repository listing and metadata operations
#[async_trait]
pub trait CodeCommitApi: Send + Sync {
    /// Lists one page of repositories starting at `next_token`
    async fn list_repositories(&self, next_token: Option<&str>) -> Result<RepositoryPage, ApiError>;

    /// Fetches clone URLs for `repository_name`
    async fn get_repository(&self, repository_name: &str) -> Result<RepositoryMetadata, ApiError>;
}

/// Builds region- and credential-bound API clients
#[async_trait]
pub trait ClientFactory: Send + Sync {
    async fn build(
        &self,
        region: &str,
        credentials: Option<&AwsCredentials>,
    ) -> Result<Arc<dyn CodeCommitApi>, DiscoveryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuation_treats_empty_token_as_end() {
        let page = RepositoryPage {
            repository_names: vec![],
            next_token: Some(String::new()),
        };
        assert_eq!(page.continuation(), None);

        let page = RepositoryPage {
            repository_names: vec![],
            next_token: Some("t1".to_string()),
        };
        assert_eq!(page.continuation(), Some("t1"));

        assert_eq!(RepositoryPage::default().continuation(), None);
    }

    #[test]
    fn test_clone_url_variant() {
        let metadata = RepositoryMetadata {
            repository_name: "repository-name-1".to_string(),
            clone_url_http: "https://git-codecommit.us-east-1.amazonaws.com/v1/repos/repository-name-1"
                .to_string(),
            clone_url_ssh: "ssh://git-codecommit.us-east-1.amazonaws.com/v1/repos/repository-name-1"
                .to_string(),
        };

        assert!(metadata.clone_url(true).starts_with("ssh://"));
        assert!(metadata.clone_url(false).starts_with("https://"));
    }
}
