//! Clone URL resolution

use tracing::debug;

use crate::codecommit::CodeCommitApi;
use crate::error::ApiError;

/// Fetches the clone URL of `repository_name`, SSH when `clone_ssh` is set
///
/// Every call is a fresh `GetRepository` request.
pub async fn resolve_remote(
    client: &dyn CodeCommitApi,
    repository_name: &str,
    clone_ssh: bool,
) -> Result<String, ApiError> {
    let metadata = client.get_repository(repository_name).await?;
    let remote = metadata.clone_url(clone_ssh).to_string();
    debug!(repository = repository_name, clone_ssh, remote = %remote, "resolved remote");
    Ok(remote)
}
