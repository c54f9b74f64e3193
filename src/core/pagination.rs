use crate::models::QueryState;

/// Number of pages needed for `total` items, 0 when there are none
#[inline]
pub fn page_count(total: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total.div_ceil(page_size)
}

/// Clamp a page index into `[0, max(page_count - 1, 0)]`
#[inline]
pub fn clamp_page_index(page_index: usize, page_count: usize) -> usize {
    page_index.min(page_count.saturating_sub(1))
}

/// Half-open item range covered by `page_index`, bounded by `total`
#[inline]
pub fn page_bounds(page_index: usize, page_size: usize, total: usize) -> (usize, usize) {
    let start = page_index.saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    (start, end)
}

/// Circular next/previous navigation
///
/// Returns `(page_index + delta) mod page_count` with a non-negative modulo,
/// so stepping back from page 0 lands on the last page. Zero pages gives 0.
pub fn advance_page(state: &QueryState, page_count: usize, delta: i64) -> usize {
    if page_count == 0 {
        return 0;
    }

    let count = page_count as i128;
    let next = (state.page_index as i128 + delta as i128).rem_euclid(count);
    next as usize
}
