//! In-memory CodeCommit client

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use codecommit_navigator::codecommit::{
    ClientFactory, CodeCommitApi, RepositoryMetadata, RepositoryPage,
};
use codecommit_navigator::credentials::AwsCredentials;
use codecommit_navigator::error::{ApiError, DiscoveryError};

/// A remote call seen by [`ScriptedCodeCommit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List(Option<String>),
    Get(String),
}

enum PageScript {
    Page(RepositoryPage),
    Fail(String),
    Hang,
}

/// Serves listing pages keyed by the request token, and metadata for any
/// name not registered as missing
#[derive(Default)]
pub struct ScriptedCodeCommit {
    pages: HashMap<Option<String>, PageScript>,
    missing: Vec<String>,
    calls: Mutex<Vec<ApiCall>>,
}

impl ScriptedCodeCommit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers a listing call made with `token` by `names` and `next_token`
    pub fn with_page(mut self, token: Option<&str>, names: &[&str], next_token: Option<&str>) -> Self {
        let page = RepositoryPage {
            repository_names: names.iter().map(|name| name.to_string()).collect(),
            next_token: next_token.map(str::to_string),
        };
        self.pages.insert(token.map(str::to_string), PageScript::Page(page));
        self
    }

    pub fn with_failing_page(mut self, token: Option<&str>, message: &str) -> Self {
        self.pages
            .insert(token.map(str::to_string), PageScript::Fail(message.to_string()));
        self
    }

    /// A listing call with `token` never completes
    pub fn with_hanging_page(mut self, token: Option<&str>) -> Self {
        self.pages.insert(token.map(str::to_string), PageScript::Hang);
        self
    }

    pub fn with_missing_repository(mut self, name: &str) -> Self {
        self.missing.push(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> Vec<Option<String>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::List(token) => Some(token),
                ApiCall::Get(_) => None,
            })
            .collect()
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::Get(name) => Some(name),
                ApiCall::List(_) => None,
            })
            .collect()
    }
}

pub fn http_url(name: &str) -> String {
    format!("https://git-codecommit.us-east-1.amazonaws.com/v1/repos/{name}")
}

pub fn ssh_url(name: &str) -> String {
    format!("ssh://git-codecommit.us-east-1.amazonaws.com/v1/repos/{name}")
}

#[async_trait]
impl CodeCommitApi for ScriptedCodeCommit {
    async fn list_repositories(&self, next_token: Option<&str>) -> Result<RepositoryPage, ApiError> {
        let key = next_token.map(str::to_string);
        self.calls.lock().unwrap().push(ApiCall::List(key.clone()));
        match self.pages.get(&key) {
            Some(PageScript::Page(page)) => Ok(page.clone()),
            Some(PageScript::Fail(message)) => Err(ApiError::Service {
                operation: "ListRepositories",
                message: message.clone(),
            }),
            Some(PageScript::Hang) => std::future::pending().await,
            None => panic!("unexpected continuation token {key:?}"),
        }
    }

    async fn get_repository(&self, repository_name: &str) -> Result<RepositoryMetadata, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(ApiCall::Get(repository_name.to_string()));
        if self.missing.iter().any(|name| name == repository_name) {
            return Err(ApiError::RepositoryNotFound(repository_name.to_string()));
        }
        Ok(RepositoryMetadata {
            repository_name: repository_name.to_string(),
            clone_url_http: http_url(repository_name),
            clone_url_ssh: ssh_url(repository_name),
        })
    }
}

/// Hands out one shared [`ScriptedCodeCommit`] and records every build
pub struct FakeClientFactory {
    pub client: Arc<ScriptedCodeCommit>,
    builds: Mutex<Vec<(String, Option<String>)>>,
}

impl FakeClientFactory {
    pub fn new(client: ScriptedCodeCommit) -> Self {
        Self {
            client: Arc::new(client),
            builds: Mutex::new(Vec::new()),
        }
    }

    /// `(region, access key id)` per build, in order
    pub fn builds(&self) -> Vec<(String, Option<String>)> {
        self.builds.lock().unwrap().clone()
    }

    /// Handles to the client held outside this factory
    pub fn outstanding_clients(&self) -> usize {
        Arc::strong_count(&self.client) - 1
    }
}

#[async_trait]
impl ClientFactory for FakeClientFactory {
    async fn build(
        &self,
        region: &str,
        credentials: Option<&AwsCredentials>,
    ) -> Result<Arc<dyn CodeCommitApi>, DiscoveryError> {
        self.builds.lock().unwrap().push((
            region.to_string(),
            credentials.map(|credentials| credentials.access_key_id.clone()),
        ));
        let client: Arc<dyn CodeCommitApi> = self.client.clone();
        Ok(client)
    }
}
