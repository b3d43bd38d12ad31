//! Query options for collection endpoints.

use std::fmt;

/// Sort direction for list requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

/// Options accepted by every collection endpoint. All fields are
/// optional; unset fields produce no query parameter.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// UUID of the last item of the previous page.
    pub marker: Option<String>,
    /// Maximum number of items to return.
    pub limit: Option<u32>,
    /// Attribute to sort by.
    pub sort_key: Option<String>,
    pub sort_dir: Option<SortDir>,
}

impl ListQuery {
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn sort(mut self, key: impl Into<String>, dir: SortDir) -> Self {
        self.sort_key = Some(key.into());
        self.sort_dir = Some(dir);
        self
    }

    /// Render the set options as query pairs, in a fixed order so the
    /// same options always produce the same request line.
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(ref marker) = self.marker {
            params.push(("marker", marker.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(ref key) = self.sort_key {
            params.push(("sort_key", key.clone()));
        }
        if let Some(dir) = self.sort_dir {
            params.push(("sort_dir", dir.to_string()));
        }
        params
    }
}
