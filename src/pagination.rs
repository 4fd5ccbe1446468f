//! Pagination math for catalog listings.
//!
//! Raw URL query parameters arrive as optional strings; everything here is
//! defensively normalized rather than rejected, so offset math stays valid
//! no matter what the client sends.

/// Number of components per listing page.
pub const PER_PAGE: i64 = 20;

/// Resolve a raw `page` query parameter to a 1-based page index.
///
/// Absent, non-numeric, and sub-1 values all resolve to page 1.
#[must_use]
pub fn page_from_query_param(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Total page count for `total` matching rows: `ceil(total / per_page)`.
/// Zero when there are no rows (or the inputs are nonsensical).
#[must_use]
pub fn page_count(total: i64, per_page: i64) -> i64 {
    if total <= 0 || per_page <= 0 {
        return 0;
    }
    total.saturating_add(per_page - 1) / per_page
}

/// Convert a 1-based page index into `(offset, limit)` bounds. The offset
/// saturates: a page index near `i64::MAX` yields an offset past every row,
/// never a wrapped negative one.
#[must_use]
pub fn page_bounds(page_index: i64, per_page: i64) -> (i64, i64) {
    let page_index = page_index.max(1);
    ((page_index - 1).saturating_mul(per_page), per_page)
}

#[cfg(test)]
#[path = "pagination_test.rs"]
mod tests;
