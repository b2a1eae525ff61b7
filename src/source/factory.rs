//! Builds [`GitSource`]s for discovered repositories

use crate::core::SEPARATOR_ID;
use crate::error::DiscoveryError;
use crate::navigator::NavigatorRequest;

use super::{resolve_remote, GitSource, GitSourceBuilder};

/// Deferred source construction handed to the host for each accepted repository.
///
/// Borrows the run's session, so it cannot outlive the discovery run. Each
/// `create` call resolves the clone URL again and returns a fresh source.
#[derive(Debug, Clone, Copy)]
pub struct SourceFactory<'a> {
    id: &'a str,
    request: &'a NavigatorRequest,
}

impl<'a> SourceFactory<'a> {
    /// `id` prefixes every source id, normally the navigator id
    pub fn new(id: &'a str, request: &'a NavigatorRequest) -> Self {
        Self { id, request }
    }

    pub async fn create(&self, project_name: &str) -> Result<GitSource, DiscoveryError> {
        let request = self.request;
        let remote = request
            .interrupt()
            .guard(async {
                Ok::<_, DiscoveryError>(
                    resolve_remote(request.client(), project_name, request.clone_ssh()).await?,
                )
            })
            .await?;

        let source_id = format!("{}{SEPARATOR_ID}{project_name}", self.id);
        Ok(GitSourceBuilder::new(source_id, project_name)
            .with_request(request)
            .with_remote(remote)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codecommit::{CodeCommitApi, RepositoryMetadata, RepositoryPage};
    use crate::core::Interrupt;
    use crate::error::ApiError;
    use crate::navigator::NavigatorContext;
    use crate::source::SourceTrait;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct Repositories;

    #[async_trait]
    impl CodeCommitApi for Repositories {
        async fn list_repositories(&self, _next_token: Option<&str>) -> Result<RepositoryPage, ApiError> {
            Ok(RepositoryPage::default())
        }

        async fn get_repository(&self, repository_name: &str) -> Result<RepositoryMetadata, ApiError> {
            if repository_name == "missing" {
                return Err(ApiError::RepositoryNotFound(repository_name.to_string()));
            }
            Ok(RepositoryMetadata {
                repository_name: repository_name.to_string(),
                clone_url_http: format!("https://git-codecommit.us-east-1.amazonaws.com/v1/repos/{repository_name}"),
                clone_url_ssh: format!("ssh://git-codecommit.us-east-1.amazonaws.com/v1/repos/{repository_name}"),
            })
        }
    }

    fn request(clone_ssh: bool, interrupt: Interrupt) -> crate::navigator::NavigatorRequest {
        NavigatorContext {
            navigator_id: "https://codecommit.us-east-1.amazonaws.com::cred-1".to_string(),
            traits: Arc::from(vec![SourceTrait::BranchDiscovery]),
            client: Arc::new(Repositories),
            transport_credentials_id: Some("git-ssh".to_string()),
            clone_ssh,
            interrupt,
        }
        .open()
    }

    #[tokio::test]
    async fn test_create_composes_id_and_copies_request() {
        let request = request(true, Interrupt::never());
        let factory = SourceFactory::new(request.navigator_id(), &request);

        let source = factory.create("myrepo").await.unwrap();

        assert_eq!(source.id(), "https://codecommit.us-east-1.amazonaws.com::cred-1::myrepo");
        assert_eq!(source.project_name(), "myrepo");
        assert_eq!(source.remote(), "ssh://git-codecommit.us-east-1.amazonaws.com/v1/repos/myrepo");
        assert_eq!(source.credentials_id(), Some("git-ssh"));
        assert_eq!(source.traits(), &[SourceTrait::BranchDiscovery]);
    }

    #[tokio::test]
    async fn test_create_uses_http_without_ssh() {
        let request = request(false, Interrupt::never());
        let factory = SourceFactory::new(request.navigator_id(), &request);

        let source = factory.create("myrepo").await.unwrap();
        assert_eq!(source.remote(), "https://git-codecommit.us-east-1.amazonaws.com/v1/repos/myrepo");
    }

    #[tokio::test]
    async fn test_create_is_repeatable() {
        let request = request(false, Interrupt::never());
        let factory = SourceFactory::new(request.navigator_id(), &request);

        let first = factory.create("myrepo").await.unwrap();
        let second = factory.create("myrepo").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_not_found_is_not_wrapped() {
        let request = request(false, Interrupt::never());
        let factory = SourceFactory::new(request.navigator_id(), &request);

        let err = factory.create("missing").await.unwrap_err();
        assert!(matches!(err, DiscoveryError::Api(ApiError::RepositoryNotFound(name)) if name == "missing"));
    }

    #[tokio::test]
    async fn test_interrupted_run_fails_create() {
        let (handle, interrupt) = Interrupt::new();
        let request = request(false, interrupt);
        let factory = SourceFactory::new(request.navigator_id(), &request);
        handle.trigger();

        let err = factory.create("myrepo").await.unwrap_err();
        assert!(matches!(err, DiscoveryError::Interrupted));
    }
}
