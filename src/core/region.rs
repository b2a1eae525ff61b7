//! Region extraction from CodeCommit endpoint URLs

use regex::Regex;
use std::sync::LazyLock;

use super::config::CODE_COMMIT_URL_PATTERN;

static CODE_COMMIT_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CODE_COMMIT_URL_PATTERN).expect("endpoint pattern is valid"));

static CODE_COMMIT_URL_EXACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^(?:{CODE_COMMIT_URL_PATTERN})$")).expect("endpoint pattern is valid")
});

/// Returns the region embedded in `https://codecommit.<region>.amazonaws.com`
///
/// The URL is searched rather than fully matched, so a trailing path is tolerated.
pub fn extract_region(endpoint_url: Option<&str>) -> Option<String> {
    let captures = CODE_COMMIT_URL.captures(endpoint_url?)?;
    captures.get(1).map(|m| m.as_str().to_string())
}

/// True when the whole string is a CodeCommit endpoint URL
pub fn is_code_commit_url(endpoint_url: &str) -> bool {
    CODE_COMMIT_URL_EXACT.is_match(endpoint_url)
}
