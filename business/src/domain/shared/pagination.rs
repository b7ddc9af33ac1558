/// Rows per page on the admin screens.
pub const PAGE_SIZE: usize = 7;

/// Number of pages needed for `len` rows. Zero rows means zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Rows shown on the 1-based `page`. Out-of-range pages are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(items.len());
    items.get(start..end).unwrap_or(&[])
}
