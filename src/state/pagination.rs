//! Page arithmetic for the pagination control (pure).

/// Maximum number of page-number buttons shown at once.
pub const PAGE_WINDOW: u32 = 5;

/// Page numbers shown around `current`.
///
/// Candidates are `current - 2 ..= current + 2` (as many as
/// `min(PAGE_WINDOW, total)`); candidates outside `[1, total]` are dropped, not
/// replaced, so the window shrinks near either end.
///
/// ```
/// use tripboard::state::pagination::page_window;
///
/// assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
/// assert_eq!(page_window(1, 10), vec![1, 2, 3]);
/// assert_eq!(page_window(1, 0), Vec::<u32>::new());
/// ```
pub fn page_window(current: u32, total: u32) -> Vec<u32> {
    let slots = PAGE_WINDOW.min(total) as i64;
    let start = current as i64 - 2;
    (0..slots)
        .map(|i| start + i)
        .filter(|p| *p >= 1 && *p <= total as i64)
        .map(|p| p as u32)
        .collect()
}

/// Prev is enabled everywhere except page 1.
pub fn can_prev(current: u32) -> bool {
    current > 1
}

/// Next is enabled while there is a later page.
///
/// Equivalent to `current != total` whenever `current` lies in `[1, total]`;
/// with no pages at all it is disabled as well.
pub fn can_next(current: u32, total: u32) -> bool {
    current < total
}

/// Bring `page` into `[1, total]`, or to 1 when there are no pages.
pub fn clamp_page(page: u32, total: u32) -> u32 {
    if total == 0 {
        1
    } else {
        page.clamp(1, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_centered_in_the_middle() {
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_is_clipped_at_start() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3]);
        assert_eq!(page_window(2, 10), vec![1, 2, 3, 4]);
    }

    #[test]
    fn window_is_clipped_at_end() {
        assert_eq!(page_window(10, 10), vec![8, 9, 10]);
        assert_eq!(page_window(9, 10), vec![7, 8, 9, 10]);
    }

    #[test]
    fn window_with_fewer_pages_than_slots() {
        // Only three slots exist: current-2 ..= current.
        assert_eq!(page_window(2, 3), vec![1, 2]);
        assert_eq!(page_window(3, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 1), Vec::<u32>::new());
    }

    #[test]
    fn window_is_empty_without_pages() {
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn prev_disabled_only_on_first_page() {
        assert!(!can_prev(1));
        assert!(can_prev(2));
    }

    #[test]
    fn next_disabled_on_last_page_and_without_pages() {
        assert!(can_next(1, 2));
        assert!(!can_next(2, 2));
        assert!(!can_next(1, 0));
    }

    #[test]
    fn clamp_page_bounds() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(7, 5), 5);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }
}
