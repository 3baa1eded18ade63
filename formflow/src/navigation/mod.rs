//! Navigation: the current location and a `push(path)` capability.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A navigation location split into path and query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// The path component, e.g. `/reset-password`.
    pub pathname: String,
    /// The query component including the leading `?`, or empty.
    pub search: String,
}

impl Location {
    /// Parses `path?query`. A fragment, if any, is dropped.
    #[must_use]
    pub fn parse(href: &str) -> Self {
        let href = href.split_once('#').map_or(href, |(before, _)| before);
        match href.split_once('?') {
            Some((pathname, query)) => Self {
                pathname: pathname.to_string(),
                search: format!("?{query}"),
            },
            None => Self {
                pathname: href.to_string(),
                search: String::new(),
            },
        }
    }

    /// Returns the value of the first occurrence of query key `key`.
    ///
    /// The value is form-urlencoded decoded, so `%2B` yields `+` and a bare
    /// `+` yields a space. An empty first occurrence counts as absent; later
    /// occurrences are not consulted.
    #[must_use]
    pub fn query_param(&self, key: &str) -> Option<String> {
        let query = self.search.strip_prefix('?').unwrap_or(&self.search);
        // Tokens are expected URL-safe or percent-encoded by whoever built the link.
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .filter(|v| !v.is_empty())
    }

    /// Returns the location as `path?query`.
    #[must_use]
    pub fn href(&self) -> String {
        format!("{}{}", self.pathname, self.search)
    }
}

/// Access to the current location and the ability to navigate.
pub trait Navigator: Send + Sync {
    /// Returns the current location.
    fn location(&self) -> Location;

    /// Navigates to `path`. Fire-and-forget.
    fn push(&self, path: &str);
}

/// An in-memory navigator with a history stack.
#[derive(Debug)]
pub struct MemoryNavigator {
    history: RwLock<Vec<Location>>,
}

impl MemoryNavigator {
    /// Creates a navigator positioned at `href`.
    #[must_use]
    pub fn new(href: &str) -> Self {
        Self {
            history: RwLock::new(vec![Location::parse(href)]),
        }
    }

    /// Returns every visited location as `path?query`, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.read().iter().map(Location::href).collect()
    }

    /// Returns the number of `push` calls made so far.
    #[must_use]
    pub fn push_count(&self) -> usize {
        self.history.read().len().saturating_sub(1)
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for MemoryNavigator {
    fn location(&self) -> Location {
        self.history.read().last().cloned().unwrap_or_default()
    }

    fn push(&self, path: &str) {
        debug!(path = %path, "Navigating");
        self.history.write().push(Location::parse(path));
    }
}
