pub mod models;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::utils::dom;
use models::RevealTracker;

pub const ANIMATE_SELECTOR: &str = "[data-animate]";
pub const REVEALED_CLASS: &str = "animated";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub delay_step_ms: u32,
    pub threshold: f64,
}

/// Keeps the observer alive; dropping it stops observing.
pub struct RevealHandle {
    observer: Option<IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

fn marked_elements(root: &Element) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(ANIMATE_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn show(element: &Element) {
    if let Err(e) = element.class_list().add_1(REVEALED_CLASS) {
        log::warn!("Failed to reveal element: {:?}", e);
    }
}

/// Maps observer hits back to element positions by identity, in hit order.
/// Hits on elements this pass does not own are skipped.
fn batch_indices<E, T>(elements: &[E], hits: &[T], same: impl Fn(&E, &T) -> bool) -> Vec<usize> {
    hits.iter()
        .filter_map(|hit| elements.iter().position(|el| same(el, hit)))
        .collect()
}

/// Starts revealing every `[data-animate]` element under `root`.
pub fn attach(root: &Element, options: RevealOptions) -> RevealHandle {
    let elements = marked_elements(root);
    let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len(), options.delay_step_ms)));

    let idle = RevealHandle {
        observer: None,
        _callback: None,
    };
    if elements.is_empty() {
        return idle;
    }

    if !dom::supports_intersection_observer() || dom::prefers_reduced_motion() {
        for index in tracker.borrow_mut().reveal_all() {
            show(&elements[index]);
        }
        return idle;
    }

    let callback = {
        let tracker = tracker.clone();
        let elements = elements.clone();
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let mut hits = Vec::new();
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    hits.push(target);
                }
                let batch = batch_indices(&elements, &hits, |el, hit| {
                    el.is_same_node(Some(hit.as_ref()))
                });

                for reveal in tracker.borrow_mut().schedule(&batch) {
                    let tracker = tracker.clone();
                    let element = elements[reveal.index].clone();
                    Timeout::new(reveal.delay_ms, move || {
                        if tracker.borrow_mut().mark_revealed(reveal.index) {
                            show(&element);
                        }
                    })
                    .forget();
                }
            },
        )
    };

    let init = IntersectionObserverInit::new();
    init.set_root_margin("0px");
    init.set_threshold(&JsValue::from_f64(options.threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for element in &elements {
                observer.observe(element);
            }
            RevealHandle {
                observer: Some(observer),
                _callback: Some(callback),
            }
        }
        Err(e) => {
            log::error!("IntersectionObserver unavailable, revealing all: {:?}", e);
            for index in tracker.borrow_mut().reveal_all() {
                show(&elements[index]);
            }
            idle
        }
    }
}
