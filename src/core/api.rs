//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Repository name filtering
//! - Region extraction from endpoint URLs
//! - Interruption of in-flight runs
//! - Configuration constants
//!
//! Internal implementation details are not exposed through this API.

// Filtering
pub use super::pattern::PatternFilter;

// Endpoint parsing
pub use super::region::{extract_region, is_code_commit_url};

// Interruption
pub use super::interrupt::{Interrupt, InterruptHandle};

// Configuration
pub use super::config::{
    ABSENT_ID_PART, CODE_COMMIT_URL_PATTERN, DEFAULT_PATTERN, DEFAULT_SERVER_URL, SEPARATOR_ID,
};
pub use super::config::{CONFIG_DIR_NAME, CREDENTIALS_FILE, NAVIGATOR_CONFIG_FILE};

// User-facing messages
pub use super::config::{DISCOVERING_MESSAGE, NO_SOURCES_MESSAGE};

// Internal helpers for command modules
pub(crate) use super::config::{
    DEFAULT_LOG_FILTER, NAME_DISPLAY_WIDTH, SPINNER_TEMPLATE, SPINNER_TICK_MILLIS,
    VERBOSE_LOG_FILTER,
};
pub(crate) use super::pattern::compile_full_match;
