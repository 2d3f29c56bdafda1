use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config::NAV_OFFSET_PX;

/// Element id named by an in-page link such as `#invest`.
pub fn section_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts a section's top edge just below the fixed navbar.
pub fn section_scroll_top(offset_top: i32) -> f64 {
    f64::from(offset_top - NAV_OFFSET_PX)
}

/// Smooth-scrolls to the section named by `href`. Unknown targets are ignored.
pub fn scroll_to_section(href: &str) {
    let id = match section_id(href) {
        Some(id) => id,
        None => return,
    };
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let section = window
        .document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    match section {
        Some(section) => {
            let options = ScrollToOptions::new();
            options.set_top(section_scroll_top(section.offset_top()));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        None => log::debug!("Target section not found for {}", href),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_id_requires_fragment() {
        assert_eq!(section_id("#invest"), Some("invest"));
        assert_eq!(section_id("#"), None);
        assert_eq!(section_id("/about"), None);
    }

    #[test]
    fn scroll_top_accounts_for_navbar() {
        assert_eq!(section_scroll_top(1000), 920.0);
        assert_eq!(section_scroll_top(0), -80.0);
    }
}
