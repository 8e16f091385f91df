use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// The single capturing wildcard a glob may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wildcard {
    /// `*` - matches within one path segment
    Segment,
    /// `**` - matches across path segments
    Deep,
}

impl Wildcard {
    pub fn token(&self) -> &'static str {
        match self {
            Wildcard::Segment => "*",
            Wildcard::Deep => "**",
        }
    }

    fn capture_group(&self) -> &'static str {
        match self {
            Wildcard::Segment => "([^/]+)",
            Wildcard::Deep => "(.+)",
        }
    }
}

/// Why a glob was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GlobError {
    #[error("glob has no wildcard")]
    NoWildcard,

    #[error("glob has {0} wildcards, only one is supported")]
    MultipleWildcards(usize),

    #[error("wildcard of {0} stars is not supported, use * or **")]
    WildcardTooLong(usize),

    #[error("glob could not be compiled: {0}")]
    Invalid(String),
}

/// A workspace-relative glob with exactly one capturing wildcard.
///
/// Everything outside the wildcard matches literally and case-sensitively,
/// against the full relative path (not just the file name).
#[derive(Debug, Clone)]
pub struct GlobPattern {
    source: String,
    prefix: String,
    wildcard: Wildcard,
    suffix: String,
    matcher: Regex,
}

impl GlobPattern {
    pub fn parse(source: &str) -> Result<Self, GlobError> {
        let runs = star_runs(source);
        let (start, len) = match runs.as_slice() {
            [] => return Err(GlobError::NoWildcard),
            [run] => *run,
            many => return Err(GlobError::MultipleWildcards(many.len())),
        };

        let wildcard = match len {
            1 => Wildcard::Segment,
            2 => Wildcard::Deep,
            n => return Err(GlobError::WildcardTooLong(n)),
        };

        let prefix = &source[..start];
        let suffix = &source[start + len..];
        let expr = format!(
            "^{}{}{}$",
            regex::escape(prefix),
            wildcard.capture_group(),
            regex::escape(suffix)
        );
        let matcher = Regex::new(&expr).map_err(|e| GlobError::Invalid(e.to_string()))?;

        Ok(Self {
            source: source.to_string(),
            prefix: prefix.to_string(),
            wildcard,
            suffix: suffix.to_string(),
            matcher,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn wildcard(&self) -> Wildcard {
        self.wildcard
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }

    /// Match `path` and return the text the wildcard consumed
    pub fn capture(&self, path: &str) -> Option<String> {
        self.matcher
            .captures(path)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Build a path from the glob by putting `name` where the wildcard is
    pub fn instantiate(&self, name: &str) -> String {
        format!("{}{}{}", self.prefix, name, self.suffix)
    }
}

impl PartialEq for GlobPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for GlobPattern {}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Serialize for GlobPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

/// (byte offset, length) of every run of consecutive `*`
fn star_runs(source: &str) -> Vec<(usize, usize)> {
    let bytes = source.as_bytes();
    let mut runs = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'*' {
            let start = i;
            while i < bytes.len() && bytes[i] == b'*' {
                i += 1;
            }
            runs.push((start, i - start));
        } else {
            i += 1;
        }
    }
    runs
}
