pub const NAV_HEADER_OFFSET_PX: f64 = 70.0;

// Scroll position that leaves the fixed header clear of the target.
pub fn scroll_offset(target_top: f64) -> f64 {
    (target_top - NAV_HEADER_OFFSET_PX).max(0.0)
}

// Returns true when the fragment resolved and the scroll was issued; callers
// leave native anchor behavior alone otherwise.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_fragment(fragment: &str) -> bool {
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };
    let id = fragment.trim_start_matches('#');
    let Some(element) = document.get_element_by_id(id) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };

    let options = web_sys::ScrollToOptions::new();
    options.set_top(scroll_offset(element.offset_top() as f64));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_fragment(_fragment: &str) -> bool {
    false
}
