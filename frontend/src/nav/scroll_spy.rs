use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, window, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

use crate::utils::dom;

/// A section counts as current while it crosses the band between 20% and
/// 30% from the top of the viewport.
const SPY_ROOT_MARGIN: &str = "-20% 0px -70% 0px";

pub struct ScrollSpyHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for ScrollSpyHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observes the sections named by `section_ids` and reports each one that
/// enters the band. Entries are reported in delivery order, so the last
/// intersecting section of a batch ends up active.
pub fn attach(section_ids: &[String], on_enter: Callback<String>) -> Option<ScrollSpyHandle> {
    if !dom::supports_intersection_observer() {
        return None;
    }
    let document = window()?.document()?;
    let sections: Vec<_> = section_ids
        .iter()
        .filter_map(|id| document.get_element_by_id(id))
        .collect();
    if sections.is_empty() {
        return None;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_enter.emit(entry.target().id());
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(SPY_ROOT_MARGIN);
    init.set_threshold(&JsValue::from_f64(0.0));

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(e) => {
            log::error!("Failed to start scroll spy: {:?}", e);
            return None;
        }
    };
    for section in &sections {
        observer.observe(section);
    }

    Some(ScrollSpyHandle {
        observer,
        _callback: callback,
    })
}
