//! Shared pagination computation for list endpoints.
//!
//! Every listing (users, products, sales) pages the same way: a 1-based page
//! number and a per-page limit become a row offset, and the storage-level
//! total count becomes a page count. Malformed or non-positive inputs never
//! fail a request - they silently fall back to the defaults.

use serde::Serialize;

/// Default page when the caller omits or mangles the `page` parameter.
pub const DEFAULT_PAGE: i64 = 1;

/// Default per-page limit when the caller omits or mangles `limit`.
pub const DEFAULT_LIMIT: i64 = 10;

/// Resolved pagination window for one listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Rows to skip before the first returned row.
    pub skip: i64,
    /// Effective 1-based page number.
    pub page: i64,
    /// Effective per-page limit.
    pub limit: i64,
    /// Total number of pages for `total` rows: `ceil(total / limit)`.
    pub total_pages: i64,
}

/// Compute the pagination window for a listing.
///
/// `page` values below 1 fall back to [`DEFAULT_PAGE`]; `limit` values below
/// 1 fall back to [`DEFAULT_LIMIT`]. A negative `total` is treated as empty.
///
/// Guarantees `skip >= 0`, and `total_pages == ceil(total / limit)`.
#[must_use]
pub fn paginate(page: i64, limit: i64, total: i64) -> Pagination {
    let page = if page < 1 { DEFAULT_PAGE } else { page };
    let limit = if limit < 1 { DEFAULT_LIMIT } else { limit };
    let total = total.max(0);

    Pagination {
        skip: (page - 1) * limit,
        page,
        limit,
        total_pages: i64::try_from((total as u64).div_ceil(limit as u64)).unwrap_or(i64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        let p = paginate(1, 10, 35);
        assert_eq!(p.skip, 0);
        assert_eq!(p.total_pages, 4);
    }

    #[test]
    fn skip_is_page_minus_one_times_limit() {
        let p = paginate(3, 25, 1000);
        assert_eq!(p.skip, 50);
        assert_eq!(p.total_pages, 40);
    }

    #[test]
    fn exact_division_has_no_extra_page() {
        assert_eq!(paginate(1, 10, 100).total_pages, 10);
        assert_eq!(paginate(1, 10, 101).total_pages, 11);
    }

    #[test]
    fn empty_listing_has_zero_pages() {
        let p = paginate(1, 10, 0);
        assert_eq!(p.total_pages, 0);
        assert_eq!(p.skip, 0);
    }

    #[test]
    fn non_positive_inputs_fall_back_to_defaults() {
        let p = paginate(0, 0, 50);
        assert_eq!(p.page, DEFAULT_PAGE);
        assert_eq!(p.limit, DEFAULT_LIMIT);
        assert_eq!(p.skip, 0);

        let p = paginate(-3, -1, 50);
        assert_eq!(p.page, DEFAULT_PAGE);
        assert_eq!(p.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn negative_total_is_treated_as_empty() {
        assert_eq!(paginate(1, 10, -5).total_pages, 0);
    }

    #[test]
    fn pages_tile_the_listing_exactly_once() {
        // Concatenating all windows reconstructs 0..total without overlap.
        let total = 47;
        let limit = 10;
        let total_pages = paginate(1, limit, total).total_pages;
        let mut covered = Vec::new();
        for page in 1..=total_pages {
            let p = paginate(page, limit, total);
            let end = (p.skip + p.limit).min(total);
            covered.extend(p.skip..end);
        }
        let expected: Vec<i64> = (0..total).collect();
        assert_eq!(covered, expected);
    }
}
