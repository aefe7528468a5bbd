/// Selector for an in-page link's `href`, or `None` when it names no element.
/// A bare `#` is not a usable selector and would make `querySelector` throw.
pub fn fragment_selector(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.trim().is_empty() => Some(href),
        _ => None,
    }
}

/// Document scroll offset that puts `target_top` just below the fixed header.
pub fn scroll_destination(target_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    target_top + page_y_offset - header_offset
}
