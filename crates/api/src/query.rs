//! Shared query parameter types for API handlers.

use serde::Deserialize;

use hemline_core::error::CoreError;

/// Upper bound on page size, so a single request cannot drag the whole
/// catalog.
const MAX_PER_PAGE: i64 = 100;

/// One-based pagination parameters (`?page=&per_page=`).
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl PaginationParams {
    /// Resolve to `(limit, offset)`, validating both values.
    ///
    /// `page` defaults to 1, `per_page` to `default_per_page`; values below
    /// 1 are rejected, `per_page` is capped at [`MAX_PER_PAGE`].
    pub fn resolve(&self, default_per_page: i64) -> Result<(i64, i64), CoreError> {
        let page = self.page.unwrap_or(1);
        let per_page = self.per_page.unwrap_or(default_per_page);

        if page < 1 {
            return Err(CoreError::Validation("page must be at least 1".into()));
        }
        if per_page < 1 {
            return Err(CoreError::Validation("per_page must be at least 1".into()));
        }

        let per_page = per_page.min(MAX_PER_PAGE);
        Ok((per_page, (page - 1) * per_page))
    }
}
