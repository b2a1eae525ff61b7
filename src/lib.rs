//! # codecommit-navigator
//!
//! `codecommit-navigator` discovers the repositories of an AWS CodeCommit
//! account and turns them into git source definitions. It powers the `ccnav`
//! CLI tool.
//!
//! ## Core Features
//!
//! - **Paginated Discovery**: Walks every `ListRepositories` page, sequentially.
//! - **Name Filtering**: Whole-name regular expression matching.
//! - **Lazy Sources**: Clone URLs are resolved only for repositories the host takes up.
//! - **Scoped Sessions**: The per-run client is released however a run ends.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use codecommit_navigator::codecommit::SdkClientFactory;
//! use codecommit_navigator::credentials::{CredentialStore, CredentialsProvider};
//! use codecommit_navigator::error::DiscoveryError;
//! use codecommit_navigator::navigator::{
//!     Navigator, NavigatorConfig, SourceEvent, SourceObserver, Witness,
//! };
//! use codecommit_navigator::source::SourceFactory;
//!
//! struct Printer(CredentialStore);
//!
//! #[async_trait]
//! impl SourceObserver for Printer {
//!     fn credentials(&self) -> &dyn CredentialsProvider {
//!         &self.0
//!     }
//!
//!     async fn process(
//!         &self,
//!         project_name: &str,
//!         factory: &SourceFactory<'_>,
//!         _event: Option<&SourceEvent>,
//!         witness: &dyn Witness,
//!     ) -> Result<(), DiscoveryError> {
//!         let source = factory.create(project_name).await?;
//!         witness.record(project_name, true);
//!         println!("{} -> {}", source.id(), source.remote());
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = NavigatorConfig::load(&NavigatorConfig::default_path()?)?;
//!     let store = CredentialStore::load(&CredentialStore::default_path()?)?;
//!     let navigator = Navigator::new(config, Arc::new(SdkClientFactory::default()));
//!     navigator.visit_sources(&Printer(store)).await?;
//!     Ok(())
//! }
//! ```

pub mod codecommit;
pub mod commands;
pub mod core;
pub mod credentials;
pub mod error;
pub mod navigator;
pub mod source;
pub mod utils;
