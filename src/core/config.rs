//! Configuration constants and settings

// Navigator defaults
pub const DEFAULT_SERVER_URL: &str = "https://codecommit.us-east-1.amazonaws.com";
pub const DEFAULT_PATTERN: &str = ".*";

// Identity composition
//
// Navigator ids are `<endpoint>::<api credentials id>`, source ids append
// `::<repository name>`. Absent parts render as `null`.
pub const SEPARATOR_ID: &str = "::";
pub const ABSENT_ID_PART: &str = "null";

// Endpoint URL matcher; group 1 is the region
pub const CODE_COMMIT_URL_PATTERN: &str = r"https://codecommit\.(.*)\.amazonaws\.com";

// Configuration file locations
pub const CONFIG_DIR_NAME: &str = "codecommit-navigator";
pub const NAVIGATOR_CONFIG_FILE: &str = "navigator.toml";
pub const CREDENTIALS_FILE: &str = "credentials.toml";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "codecommit_navigator=info";
pub const VERBOSE_LOG_FILTER: &str = "codecommit_navigator=debug";

// UI Constants
pub const DISCOVERING_MESSAGE: &str = "🔍 Discovering CodeCommit repositories...";
pub const NO_SOURCES_MESSAGE: &str = "No matching CodeCommit repositories found.";
pub const SPINNER_TEMPLATE: &str = "{spinner} {wide_msg}";
pub const SPINNER_TICK_MILLIS: u64 = 100;
pub const NAME_DISPLAY_WIDTH: usize = 30;
