//! Pagination parameters, response envelope, and the shared page-fetch
//! helper used by every repository list method.

use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, QueryBuilder};

use crate::filter::{push_filters, Filter};

/// Default page size when the client omits `limit`.
pub const DEFAULT_LIMIT: i64 = 10;

/// Maximum page size.
pub const MAX_LIMIT: i64 = 100;

/// Validated pagination parameters. `page` is 1-based.
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    pub page: i64,
    pub limit: i64,
}

impl PageParams {
    /// Build from optional query values, clamping into the valid range.
    ///
    /// Range violations are rejected with 422 before reaching this point;
    /// the clamp keeps the repository layer safe when called directly.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        }
    }

    /// Saturates rather than overflowing: an absurdly large `page` lands
    /// past the last row and yields an empty page, the same as any other
    /// out-of-range page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Standard pagination envelope returned by every list endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub total_items: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(total_items: i64, params: &PageParams, items: Vec<T>) -> Self {
        Self {
            total_items,
            // Ceiling division; limit is clamped to at least 1.
            total_pages: (total_items + params.limit - 1) / params.limit,
            current_page: params.page,
            items,
        }
    }
}

/// Run a filtered, ordered, paginated list query plus its COUNT twin.
///
/// `table`, `columns`, and `order_by` are compile-time constants owned by
/// the calling repository. A page beyond the last one yields an empty
/// `items` vector, not an error.
pub async fn fetch_page<T>(
    pool: &PgPool,
    table: &'static str,
    columns: &'static str,
    order_by: &'static str,
    filters: &[Filter],
    params: &PageParams,
) -> Result<Page<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let mut count_qb = QueryBuilder::new(format!("SELECT COUNT(*) FROM {table}"));
    push_filters(&mut count_qb, filters);
    let total_items: i64 = count_qb.build_query_scalar().fetch_one(pool).await?;

    let mut qb = QueryBuilder::new(format!("SELECT {columns} FROM {table}"));
    push_filters(&mut qb, filters);
    qb.push(format!(" ORDER BY {order_by}"));
    qb.push(" LIMIT ").push_bind(params.limit);
    qb.push(" OFFSET ").push_bind(params.offset());

    let items = qb.build_query_as::<T>().fetch_all(pool).await?;
    Ok(Page::new(total_items, params, items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_values_omitted() {
        let params = PageParams::new(None, None);
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, DEFAULT_LIMIT);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let params = PageParams::new(Some(0), Some(1000));
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, MAX_LIMIT);
    }

    #[test]
    fn offset_is_page_minus_one_times_limit() {
        let params = PageParams::new(Some(3), Some(25));
        assert_eq!(params.offset(), 50);
    }

    #[test]
    fn offset_saturates_for_huge_page_numbers() {
        let params = PageParams::new(Some(i64::MAX), Some(100));
        assert_eq!(params.offset(), i64::MAX);
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        let params = PageParams::new(Some(1), Some(10));
        assert_eq!(Page::<()>::new(0, &params, vec![]).total_pages, 0);
        assert_eq!(Page::<()>::new(1, &params, vec![]).total_pages, 1);
        assert_eq!(Page::<()>::new(10, &params, vec![]).total_pages, 1);
        assert_eq!(Page::<()>::new(11, &params, vec![]).total_pages, 2);
    }

    #[test]
    fn envelope_reports_requested_page() {
        let params = PageParams::new(Some(7), Some(10));
        let page = Page::<()>::new(42, &params, vec![]);
        assert_eq!(page.current_page, 7);
        assert_eq!(page.total_items, 42);
        assert_eq!(page.total_pages, 5);
    }
}
