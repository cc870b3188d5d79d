/// Selector for links that scroll inside the page.
pub const IN_PAGE_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Returns the element selector an in-page link points at.
///
/// `#results` -> `Some("#results")`; a bare `#` or an external href has no target.
pub fn anchor_target(href: &str) -> Option<&str> {
    let href = href.trim();
    let id = href.strip_prefix('#')?;
    if id.trim().is_empty() {
        None
    } else {
        Some(href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#results"), Some("#results"));
        assert_eq!(anchor_target("  #about "), Some("#about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("# "), None);
        assert_eq!(anchor_target("/upload#form"), None);
        assert_eq!(anchor_target(""), None);
    }
}
