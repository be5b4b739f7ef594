//! Pagination utilities for service layer
//!
//! Offset/limit pairs as taken from the query string, plus the page-size cap.

/// Largest page a single request may fetch unless configured otherwise.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Page size used when the request gives none.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Postgres binds OFFSET/LIMIT as signed 64-bit integers.
pub const MAX_SQL_WINDOW: u64 = i64::MAX as u64;

/// Offset/limit window over an ordered result set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// rows to skip
    pub offset: u64,
    /// rows to return
    pub limit: u64,
}

impl Pagination {
    pub fn new(offset: u64, limit: u64) -> Self { Self { offset, limit } }

    /// Cap `limit` at `max_limit` and both values at [`MAX_SQL_WINDOW`].
    /// A zero limit stays zero and yields an empty page.
    pub fn normalize(self, max_limit: u64) -> Self {
        Self {
            offset: self.offset.min(MAX_SQL_WINDOW),
            limit: self.limit.min(max_limit).min(MAX_SQL_WINDOW),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { offset: 0, limit: DEFAULT_PAGE_SIZE } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_upper_bound() {
        let p = Pagination::new(5, 1000).normalize(MAX_PAGE_SIZE);
        assert_eq!(p.offset, 5);
        assert_eq!(p.limit, 100);
    }

    #[test]
    fn normalize_keeps_small_limits() {
        assert_eq!(Pagination::new(0, 7).normalize(MAX_PAGE_SIZE).limit, 7);
        assert_eq!(Pagination::new(0, 0).normalize(MAX_PAGE_SIZE).limit, 0);
    }

    #[test]
    fn normalize_keeps_offset_bindable() {
        let p = Pagination::new(u64::MAX, 10).normalize(MAX_PAGE_SIZE);
        assert_eq!(p.offset, i64::MAX as u64);
        assert_eq!(Pagination::new(9_223_372_036_854_775_808, 10).normalize(MAX_PAGE_SIZE).offset, MAX_SQL_WINDOW);
        assert_eq!(Pagination::new(0, u64::MAX).normalize(u64::MAX).limit, MAX_SQL_WINDOW);
    }

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.offset, 0);
        assert_eq!(d.limit, 10);
    }
}
