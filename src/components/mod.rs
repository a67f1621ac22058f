pub mod brand_carousel;
pub mod contact;
pub mod faq;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod navbar;
pub mod projects;
pub mod youtube_carousel;

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Smooth-scroll to a section by element id; `"home"` means the top of the page.
pub fn scroll_to_section(section_id: &str) {
    let Some(window) = web_sys::window() else { return };
    if section_id == "home" {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
        return;
    }
    match window.document().and_then(|d| d.get_element_by_id(section_id)) {
        Some(element) => {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        None => leptos::logging::warn!("No section with id {section_id}"),
    }
}
