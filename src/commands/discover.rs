//! Repository discovery command implementation
//!
//! Runs one navigator against CodeCommit and prints the discovered sources,
//! either as a tree for humans or as a JSON report.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use indicatif::ProgressBar;
use serde::Serialize;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::warn;

use crate::codecommit::SdkClientFactory;
use crate::core::{Interrupt, DISCOVERING_MESSAGE, NAME_DISPLAY_WIDTH, NO_SOURCES_MESSAGE};
use crate::credentials::{CredentialStore, CredentialsProvider};
use crate::error::DiscoveryError;
use crate::navigator::{
    Navigator, NavigatorConfig, RunOutcome, SkipReason, SourceEvent, SourceObserver, Witness,
};
use crate::source::{GitSource, SourceFactory};
use crate::utils::{create_spinner, set_terminal_title, set_terminal_title_and_flush, shorten_name};

/// Report layout for `ccnav discover`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Flags of `ccnav discover`
#[derive(Debug, Clone, Default)]
pub struct DiscoverOptions {
    pub format: OutputFormat,
    /// Report names only, without resolving clone URLs
    pub names_only: bool,
    /// Send API calls to this URL instead of the regional endpoint
    pub endpoint_override: Option<String>,
}

/// One accepted repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredRepository {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<GitSource>,
}

/// Result of a discovery run
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryReport {
    pub navigator_id: String,
    pub region: Option<String>,
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<&'static str>,
    pub pages: usize,
    pub candidates: usize,
    pub repositories: Vec<DiscoveredRepository>,
}

/// Observer that materializes and collects every accepted repository
pub struct CollectingObserver {
    credentials: CredentialStore,
    interrupt: Interrupt,
    names_only: bool,
    progress: ProgressBar,
    found: Mutex<Vec<DiscoveredRepository>>,
}

impl CollectingObserver {
    pub fn new(
        credentials: CredentialStore,
        interrupt: Interrupt,
        names_only: bool,
        progress: ProgressBar,
    ) -> Self {
        Self {
            credentials,
            interrupt,
            names_only,
            progress,
            found: Mutex::new(Vec::new()),
        }
    }

    pub fn into_found(self) -> Vec<DiscoveredRepository> {
        self.found.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl SourceObserver for CollectingObserver {
    fn credentials(&self) -> &dyn CredentialsProvider {
        &self.credentials
    }

    fn interrupt(&self) -> Interrupt {
        self.interrupt.clone()
    }

    async fn process(
        &self,
        project_name: &str,
        factory: &SourceFactory<'_>,
        _event: Option<&SourceEvent>,
        witness: &dyn Witness,
    ) -> Result<(), DiscoveryError> {
        self.progress.set_message(format!(
            "{DISCOVERING_MESSAGE} {}",
            shorten_name(project_name, NAME_DISPLAY_WIDTH)
        ));

        let source = if self.names_only {
            None
        } else {
            Some(factory.create(project_name).await?)
        };
        witness.record(project_name, true);

        if let Ok(mut found) = self.found.lock() {
            found.push(DiscoveredRepository {
                name: project_name.to_string(),
                source,
            });
        }
        Ok(())
    }
}

/// Runs `navigator` and collects its findings into a report
pub async fn collect_report(
    navigator: &Navigator,
    observer: CollectingObserver,
) -> Result<DiscoveryReport, DiscoveryError> {
    let outcome = navigator.visit_sources(&observer).await?;

    let (skipped, pages, candidates) = match outcome {
        RunOutcome::Completed(summary) => (None, summary.pages, summary.candidates),
        RunOutcome::Skipped(reason) => (Some(skip_message(reason)), 0, 0),
    };

    Ok(DiscoveryReport {
        navigator_id: navigator.id(),
        region: navigator.config().region(),
        generated_at: Utc::now(),
        skipped,
        pages,
        candidates,
        repositories: observer.into_found(),
    })
}

fn skip_message(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::MissingRegion => "endpoint URL has no CodeCommit region",
        SkipReason::MissingTransportCredentials => "transport credentials could not be resolved",
    }
}

/// Renders a report as a tree
pub fn render_text(report: &DiscoveryReport) -> String {
    let mut lines = Vec::new();
    let region = report.region.as_deref().unwrap_or("no region");
    lines.push(format!("🔍 {} ({region})", report.navigator_id));

    if let Some(reason) = report.skipped {
        lines.push(format!("⚠️  Skipped: {reason}"));
        return lines.join("\n");
    }

    if report.repositories.is_empty() {
        lines.push(NO_SOURCES_MESSAGE.to_string());
    }
    for (i, repository) in report.repositories.iter().enumerate() {
        let tree_char = if i == report.repositories.len() - 1 { "└─" } else { "├─" };
        let name = shorten_name(&repository.name, NAME_DISPLAY_WIDTH);
        match &repository.source {
            Some(source) => lines.push(format!(
                "   {tree_char} {name:width$} {}",
                source.remote(),
                width = NAME_DISPLAY_WIDTH
            )),
            None => lines.push(format!("   {tree_char} {name}")),
        }
    }

    let page_word = if report.pages == 1 { "page" } else { "pages" };
    lines.push(String::new());
    lines.push(format!(
        "✅ {} of {} repositories matched • {} {page_word}",
        report.repositories.len(),
        report.candidates,
        report.pages
    ));
    lines.join("\n")
}

/// Handles `ccnav discover`
pub async fn handle_discover_command(
    config_path: &Path,
    credentials_path: &Path,
    options: DiscoverOptions,
) -> Result<()> {
    set_terminal_title("🔍 ccnav");

    let config = NavigatorConfig::load(config_path)?;
    let credentials = if credentials_path.exists() {
        CredentialStore::load(credentials_path)?
    } else {
        warn!(path = %credentials_path.display(), "credentials file not found");
        CredentialStore::default()
    };

    let mut clients = SdkClientFactory::new();
    if let Some(endpoint) = options.endpoint_override {
        clients = clients.with_endpoint_url(endpoint);
    }
    let navigator = Navigator::new(config, Arc::new(clients));

    let (handle, interrupt) = Interrupt::new();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.trigger();
        }
    });

    let progress = match options.format {
        OutputFormat::Text => create_spinner(DISCOVERING_MESSAGE)?,
        OutputFormat::Json => ProgressBar::hidden(),
    };
    let observer = CollectingObserver::new(credentials, interrupt, options.names_only, progress.clone());

    let result = collect_report(&navigator, observer).await;
    ctrl_c.abort();
    progress.finish_and_clear();
    set_terminal_title_and_flush("✅ ccnav");

    let report = result.with_context(|| format!("Discovery failed for {}", navigator.id()))?;
    match options.format {
        OutputFormat::Text => println!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
