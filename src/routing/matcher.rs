//! Route matching logic.
//!
//! # Responsibilities
//! - Match path exactly (case-sensitive)
//! - Match path prefix and capture the remainder
//! - Combine conditions with OR semantics
//!
//! # Design Decisions
//! - Prefixes are stripped with `str::strip_prefix`, never by index, so
//!   no path can cause an out-of-range slice
//! - A capture may be empty; deciding what that means is the handler's job
//! - No regex to guarantee O(n) matching

/// Trait for matching request paths.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns the captured remainder if the path matches, `None` otherwise.
    /// Exact matchers capture the empty string.
    fn capture<'p>(&self, path: &'p str) -> Option<&'p str>;

    /// Human readable pattern, used in logs and the CLI route listing.
    fn pattern(&self) -> String;

    fn matches(&self, path: &str) -> bool {
        self.capture(path).is_some()
    }
}

/// Matches a single path exactly.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    path: String,
}

impl ExactMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Matcher for ExactMatcher {
    fn capture<'p>(&self, path: &'p str) -> Option<&'p str> {
        (path == self.path).then_some("")
    }

    fn pattern(&self) -> String {
        self.path.clone()
    }
}

/// Matches a path prefix; the capture is everything after it.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn capture<'p>(&self, path: &'p str) -> Option<&'p str> {
        path.strip_prefix(self.prefix.as_str())
    }

    fn pattern(&self) -> String {
        format!("{}{{*}}", self.prefix)
    }
}

/// Combines multiple matchers with OR semantics; first match wins.
#[derive(Debug)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AnyMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AnyMatcher {
    fn capture<'p>(&self, path: &'p str) -> Option<&'p str> {
        self.matchers.iter().find_map(|m| m.capture(path))
    }

    fn pattern(&self) -> String {
        self.matchers
            .iter()
            .map(|m| m.pattern())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
