use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, window, Event, EventTarget, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollToOptions};
use yew::NodeRef;

/// Event listener that unregisters itself when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                callback,
            }),
            Err(e) => {
                log::error!("Failed to register {} listener: {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Listens for Escape on the whole document.
pub fn on_escape<F>(mut handler: F) -> Option<EventListener>
where
    F: FnMut() + 'static,
{
    let document = window()?.document()?;
    EventListener::new(&document, "keydown", move |e: Event| {
        if is_escape(&e) {
            handler();
        }
    })
}

pub fn is_escape(event: &Event) -> bool {
    event
        .dyn_ref::<KeyboardEvent>()
        .map(|k| k.key() == "Escape")
        .unwrap_or(false)
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

pub fn supports_intersection_observer() -> bool {
    window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Writes the body's `overflow` style. Callers go through
/// `scroll_lock::set_scroll_locked` so several holders can share it.
pub(crate) fn set_body_overflow_hidden(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(e) = result {
        log::warn!("Failed to update body overflow: {:?}", e);
    }
}

pub fn focus(node: &NodeRef) {
    if let Some(element) = node.cast::<HtmlElement>() {
        if let Err(e) = element.focus() {
            log::warn!("Failed to move focus: {:?}", e);
        }
    }
}

/// Returns the section id for an in-page link, `None` for anything else.
pub fn section_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Where the window should land so the section clears the fixed header.
pub fn scroll_target_top(section_offset_top: f64, header_offset: f64) -> f64 {
    (section_offset_top - header_offset).max(0.0)
}

pub fn scroll_behavior(reduced_motion: bool) -> ScrollBehavior {
    if reduced_motion {
        ScrollBehavior::Instant
    } else {
        ScrollBehavior::Smooth
    }
}

/// Scrolls to the section named by `href` and records it in the address bar
/// without navigating. Returns false when no such section exists.
pub fn scroll_to_section(href: &str, header_offset: f64) -> bool {
    let Some(id) = section_id(href) else {
        return false;
    };
    let Some(window) = window() else {
        return false;
    };
    let Some(section) = window
        .document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::warn!("No section found for {}", href);
        return false;
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_target_top(section.offset_top() as f64, header_offset));
    options.set_behavior(scroll_behavior(prefers_reduced_motion()));
    window.scroll_to_with_scroll_to_options(&options);

    if let Ok(history) = window.history() {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(href)) {
            log::warn!("Failed to update history: {:?}", e);
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fragment_links_have_a_section() {
        assert_eq!(section_id("#projetos"), Some("projetos"));
        assert_eq!(section_id("#"), None);
        assert_eq!(section_id("https://github.com"), None);
        assert_eq!(section_id("/about"), None);
    }

    #[test]
    fn target_subtracts_header_offset() {
        assert_eq!(scroll_target_top(900.0, 80.0), 820.0);
        assert_eq!(scroll_target_top(30.0, 80.0), 0.0);
    }

    #[test]
    fn reduced_motion_scrolls_instantly() {
        assert_eq!(scroll_behavior(true), ScrollBehavior::Instant);
        assert_eq!(scroll_behavior(false), ScrollBehavior::Smooth);
    }
}
