//! Paginated repository listing

use std::future::Future;
use tracing::debug;

use crate::codecommit::CodeCommitApi;
use crate::core::{Interrupt, PatternFilter};
use crate::error::DiscoveryError;

/// Counters for one pass over the listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingSummary {
    /// Listing calls issued
    pub pages: usize,
    /// Repository names returned across all pages
    pub candidates: usize,
    /// Names accepted by the pattern
    pub accepted: usize,
}

/// Walks every listing page and hands accepted names to `visit`
///
/// At least one listing call is made. Paging stops only when a page carries no
/// continuation token (an empty token counts as none); empty pages in between are
/// read through. Names are visited in listing order, each `visit` completing
/// before the next name is looked at. The first listing or visit error ends the
/// walk and is returned unchanged.
pub async fn list_all<F, Fut>(
    client: &dyn CodeCommitApi,
    interrupt: &Interrupt,
    pattern: &PatternFilter,
    mut visit: F,
) -> Result<ListingSummary, DiscoveryError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<(), DiscoveryError>>,
{
    debug!(pattern = ?pattern.pattern(), "listing repositories");

    let mut summary = ListingSummary::default();
    let mut next_token: Option<String> = None;

    loop {
        let page = interrupt
            .guard(async {
                Ok::<_, DiscoveryError>(client.list_repositories(next_token.as_deref()).await?)
            })
            .await?;
        summary.pages += 1;
        summary.candidates += page.repository_names.len();

        let continuation = page.continuation().map(str::to_string);

        for name in page.repository_names {
            if pattern.accepts(&name) {
                debug!(repository = %name, "matches");
                summary.accepted += 1;
                visit(name).await?;
            } else {
                debug!(repository = %name, "no match");
            }
        }

        next_token = continuation;
        if next_token.is_none() {
            break;
        }
    }

    Ok(summary)
}
