use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{window, Event};
use yew::prelude::*;

use super::models::{NavAction, NavState};
use super::scroll_spy;
use crate::config::SiteConfig;
use crate::modal::use_escape;
use crate::utils::dom::{self, EventListener};
use crate::utils::scroll_lock::{self, LockHolder};
use crate::utils::throttle::Throttle;

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub href: AttrValue,
    pub label: AttrValue,
}

impl NavLink {
    pub fn new(href: &'static str, label: &'static str) -> Self {
        Self {
            href: AttrValue::from(href),
            label: AttrValue::from(label),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub config: SiteConfig,
    pub brand: AttrValue,
    pub links: Vec<NavLink>,
}

#[function_component]
pub fn Navbar(props: &NavbarProps) -> Html {
    let state = {
        let config = props.config.clone();
        use_reducer(move || NavState::new(&config, dom::scroll_y()))
    };

    // Throttled scroll listener
    {
        let state = state.clone();
        let interval = props.config.scroll_throttle_ms;
        use_effect_with_deps(
            move |_| {
                let throttle = Rc::new(RefCell::new(Throttle::new(interval)));
                let listener = window().and_then(|w| {
                    EventListener::new(&w, "scroll", move |_: Event| {
                        if throttle.borrow_mut().try_fire(dom::now_ms()) {
                            state.dispatch(NavAction::Scrolled(dom::scroll_y()));
                        }
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    // Scroll spy over every in-page link target
    {
        let state = state.clone();
        let section_ids: Vec<String> = props
            .links
            .iter()
            .filter_map(|link| dom::section_id(&link.href).map(str::to_string))
            .collect();
        use_effect_with_deps(
            move |ids| {
                let handle = scroll_spy::attach(
                    ids,
                    Callback::from(move |id: String| state.dispatch(NavAction::SectionEntered(id))),
                );
                move || drop(handle)
            },
            section_ids,
        );
    }

    {
        let state = state.clone();
        use_escape(Callback::from(move |_| state.dispatch(NavAction::Escape)));
    }

    // Menu and body scroll lock always move together
    use_effect_with_deps(
        move |open| {
            scroll_lock::set_scroll_locked(LockHolder::NavMenu, *open);
            || ()
        },
        state.menu_open,
    );

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::ToggleMenu))
    };

    let links = props.links.iter().map(|link| {
        let active = state.is_active(&link.href);
        let onclick = {
            let state = state.clone();
            let href = link.href.clone();
            let offset = props.config.scroll_offset;
            Callback::from(move |e: MouseEvent| {
                state.dispatch(NavAction::LinkClicked);
                if dom::section_id(&href).is_some() {
                    e.prevent_default();
                    dom::scroll_to_section(&href, offset);
                }
            })
        };
        html! {
            <li class="nav-item">
                <a
                    href={link.href.clone()}
                    class={classes!("nav-link", active.then_some("active"))}
                    aria-current={active.then_some("page")}
                    {onclick}
                >
                    {link.label.clone()}
                </a>
            </li>
        }
    });

    html! {
        <nav id="navbar" class={classes!(state.navbar_classes())} aria-label="Navegação principal">
            <div class="nav-container">
                <a href="#inicio" class="nav-logo">{props.brand.clone()}</a>
                <button
                    id="navToggle"
                    class="nav-toggle"
                    type="button"
                    aria-label="Abrir menu"
                    aria-controls="navMenu"
                    aria-expanded={state.menu_open.to_string()}
                    onclick={on_toggle}
                >
                    <span class="hamburger"></span>
                </button>
                <ul id="navMenu" class={classes!("nav-menu", state.menu_open.then_some("active"))}>
                    { for links }
                </ul>
            </div>
        </nav>
    }
}
