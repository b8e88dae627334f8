use tracing::{debug, warn};

/// Open/closed state of the collapsible navigation links plus the header
/// offset applied to in-page scrolls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Navigation {
    menu_open: bool,
    header_offset: f64,
}

impl Navigation {
    pub fn new(header_offset: f64) -> Self {
        Self {
            menu_open: false,
            header_offset,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        debug!(open = self.menu_open, "menu toggled");
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Class list of the nav-links element.
    pub fn links_class(&self) -> &'static str {
        if self.menu_open {
            "nav-links active"
        } else {
            "nav-links"
        }
    }

    /// Resolves a click on an in-page link.
    ///
    /// `locate` maps an element id to that element's document offset. Returns
    /// the window scroll position to glide to, closing the menu on the way,
    /// or `None` when the link goes nowhere.
    pub fn scroll_request<F>(&mut self, href: &str, locate: F) -> Option<f64>
    where
        F: FnOnce(&str) -> Option<f64>,
    {
        let target_id = anchor_target(href)?;
        let Some(offset_top) = locate(target_id) else {
            warn!(target_id, "anchor target not found");
            return None;
        };

        self.close_menu();
        let top = scroll_top(offset_top, self.header_offset);
        debug!(target_id, top, "scrolling to anchor");
        Some(top)
    }
}

/// Element id named by an in-page link, or `None` for a bare `#` and for
/// links that leave the page.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that leaves `header_offset` units between the viewport
/// top and the target.
pub fn scroll_top(offset_top: f64, header_offset: f64) -> f64 {
    offset_top - header_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggle_flips_each_time() {
        let mut nav = Navigation::new(80.0);
        assert!(!nav.is_menu_open());
        assert_eq!(nav.links_class(), "nav-links");
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        assert_eq!(nav.links_class(), "nav-links active");
        nav.toggle_menu();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn bare_hash_is_ignored() {
        let mut nav = Navigation::new(80.0);
        nav.toggle_menu();
        let top = nav.scroll_request("#", |_| panic!("bare hash must not look up a target"));
        assert!(top.is_none());
        assert!(nav.is_menu_open());
    }

    #[test]
    fn scroll_lands_below_header_and_closes_menu() {
        let mut nav = Navigation::new(80.0);
        nav.toggle_menu();
        let top = nav.scroll_request("#products", |id| (id == "products").then_some(1_200.0));
        assert_eq!(top, Some(1_120.0));
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn missing_target_keeps_menu_state() {
        let mut nav = Navigation::new(80.0);
        nav.toggle_menu();
        let top = nav.scroll_request("#nowhere", |_| None);
        assert!(top.is_none());
        assert!(nav.is_menu_open());
    }

    #[test]
    fn anchor_target_strips_hash() {
        assert_eq!(anchor_target("#todo"), Some("todo"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com"), None);
    }
}
