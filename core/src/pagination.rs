// catalog/src/pagination.rs

/// Page size used when `limit` is missing, unparseable or below one.
pub const DEFAULT_LIMIT: i64 = 10;

/// A 1-based page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl PageRequest {
    /// Clamps `page` to at least 1 and replaces a `limit` below 1 with [`DEFAULT_LIMIT`].
    pub fn new(page: i64, limit: i64) -> Self {
        PageRequest {
            page: page.max(1),
            limit: if limit < 1 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// Builds a page from raw query-string values. Anything that is not an integer counts as 0.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let lenient = |raw: Option<&str>| raw.and_then(|v| v.trim().parse::<i64>().ok()).unwrap_or(0);
        PageRequest::new(lenient(page), lenient(limit))
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest::new(1, DEFAULT_LIMIT)
    }
}
