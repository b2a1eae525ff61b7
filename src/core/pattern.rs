//! Repository name filtering

use regex::Regex;

use crate::error::DiscoveryError;

/// Compiled repository name filter.
///
/// Matching is full-string and case-sensitive: `repo-1000` accepts `repo-1000`
/// but not `repo-1000x`. Without a pattern every name is accepted.
#[derive(Debug, Clone, Default)]
pub struct PatternFilter {
    pattern: Option<String>,
    regex: Option<Regex>,
}

impl PatternFilter {
    /// Compiles `pattern` once; `None` builds a filter that accepts everything
    pub fn new(pattern: Option<&str>) -> Result<Self, DiscoveryError> {
        match pattern {
            None => Ok(Self::default()),
            Some(pattern) => {
                let regex = compile_full_match(pattern)?;
                Ok(Self {
                    pattern: Some(pattern.to_string()),
                    regex: Some(regex),
                })
            }
        }
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn accepts(&self, name: &str) -> bool {
        match &self.regex {
            None => true,
            Some(regex) => regex.is_match(name),
        }
    }
}

/// Anchors `pattern` on both ends so `is_match` behaves as a full match
pub(crate) fn compile_full_match(pattern: &str) -> Result<Regex, DiscoveryError> {
    // Validate the raw expression first so error positions refer to user input
    Regex::new(pattern).map_err(|source| DiscoveryError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| DiscoveryError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
