//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions,
    Window,
};

use crate::config::protection::PROTECTED_SELECTOR;
use crate::core::{KeyChord, TargetInfo};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document object.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

fn body() -> Option<HtmlElement> {
    document()?.body()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

/// Go back one history entry.
pub fn history_back() {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.back();
    }
}

pub fn set_document_title(title: &str) {
    if let Some(document) = document() {
        document.set_title(title);
    }
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Smooth-scroll the element with the given id into view.
pub fn scroll_into_view(id: &str) {
    if let Some(element) = document().and_then(|d| d.get_element_by_id(id)) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

// =============================================================================
// Event Inspection
// =============================================================================

/// Describe the target of a pointer event for the protection controller.
///
/// Events whose target is not an element (text nodes, the document) are
/// reported as unprotected.
pub fn target_info(event: &Event) -> TargetInfo {
    let Some(element) = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
    else {
        return TargetInfo::UNPROTECTED;
    };

    TargetInfo {
        is_image: element.tag_name().eq_ignore_ascii_case("img"),
        in_protected_region: element.closest(PROTECTED_SELECTOR).ok().flatten().is_some(),
    }
}

/// Key and modifier state of a keyboard event.
pub fn key_chord(event: &KeyboardEvent) -> KeyChord {
    KeyChord {
        key: event.key(),
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
        shift: event.shift_key(),
    }
}

// =============================================================================
// Scroll Lock
// =============================================================================

/// Hide body overflow. Returns the previous value for [`unlock_body_scroll`].
pub fn lock_body_scroll() -> Option<String> {
    let style = body()?.style();
    let previous = style.get_property_value("overflow").ok()?;
    style.set_property("overflow", "hidden").ok()?;
    Some(previous)
}

/// Restore the body overflow saved by [`lock_body_scroll`].
pub fn unlock_body_scroll(previous: Option<String>) {
    if let Some(body) = body() {
        let style = body.style();
        let _ = match previous.as_deref() {
            Some(value) if !value.is_empty() => style.set_property("overflow", value),
            _ => style.remove_property("overflow").map(|_| ()),
        };
    }
}

/// Blur the focused element, if it is an HTML element.
pub fn blur_active_element() {
    if let Some(element) = document()
        .and_then(|d| d.active_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = element.blur();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn dispatch_on(element: &Element) -> Event {
        let event = Event::new("contextmenu").unwrap();
        element.dispatch_event(&event).unwrap();
        event
    }

    #[wasm_bindgen_test]
    fn test_hash_round_trip() {
        set_hash("#/about");
        assert_eq!(get_hash(), "/about");
    }

    #[wasm_bindgen_test]
    fn test_target_info_classifies_elements() {
        let doc = document().unwrap();
        let body = body().unwrap();

        let region = doc.create_element("div").unwrap();
        region.set_attribute("data-protected", "true").unwrap();
        let inner = doc.create_element("span").unwrap();
        region.append_child(&inner).unwrap();
        body.append_child(&region).unwrap();

        let image = doc.create_element("img").unwrap();
        body.append_child(&image).unwrap();

        let plain = doc.create_element("p").unwrap();
        body.append_child(&plain).unwrap();

        assert_eq!(target_info(&dispatch_on(&inner)), TargetInfo::PROTECTED_REGION);
        assert_eq!(target_info(&dispatch_on(&image)), TargetInfo::IMAGE);
        assert_eq!(target_info(&dispatch_on(&plain)), TargetInfo::UNPROTECTED);
    }

    #[wasm_bindgen_test]
    fn test_lightbox_backdrop_is_unprotected() {
        let doc = document().unwrap();
        let backdrop = doc.create_element("div").unwrap();
        let stage = doc.create_element("div").unwrap();
        stage.set_attribute("data-protected", "true").unwrap();
        let image = doc.create_element("img").unwrap();
        stage.append_child(&image).unwrap();
        backdrop.append_child(&stage).unwrap();
        body().unwrap().append_child(&backdrop).unwrap();

        assert_eq!(target_info(&dispatch_on(&backdrop)), TargetInfo::UNPROTECTED);
        assert!(target_info(&dispatch_on(&stage)).is_protected());
        assert!(target_info(&dispatch_on(&image)).is_protected());
    }

    #[wasm_bindgen_test]
    fn test_scroll_lock_restores_overflow() {
        let saved = lock_body_scroll();
        let style = body().unwrap().style();
        assert_eq!(style.get_property_value("overflow").unwrap(), "hidden");
        unlock_body_scroll(saved);
        assert_ne!(style.get_property_value("overflow").unwrap(), "hidden");
    }
}
