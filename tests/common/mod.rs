//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod fake;
pub mod fixtures;

pub use self::fake::{ApiCall, FakeClientFactory, ScriptedCodeCommit};
pub use self::fixtures::{
    credential_store, navigator_config, two_page_listing, RecordingObserver,
    CREDENTIALS_TOML,
};
