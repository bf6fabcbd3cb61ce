use std::rc::Rc;
use yew::Reducible;

use crate::config::SiteConfig;

#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    /// Throttled scroll tick carrying `window.scrollY`.
    Scrolled(f64),
    ToggleMenu,
    LinkClicked,
    Escape,
    /// Scroll-spy saw this section enter its band.
    SectionEntered(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub hidden: bool,
    pub menu_open: bool,
    pub active_section: Option<String>,
    last_scroll_y: f64,
    scrolled_at: f64,
    hide_threshold: f64,
}

impl NavState {
    pub fn new(config: &SiteConfig, initial_scroll_y: f64) -> Self {
        Self {
            scrolled: false,
            hidden: false,
            menu_open: false,
            active_section: None,
            last_scroll_y: initial_scroll_y,
            scrolled_at: config.navbar_scrolled_at,
            hide_threshold: config.navbar_hide_threshold,
        }
    }

    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::Scrolled(y) => {
                self.scrolled = y > self.scrolled_at;
                self.hidden = if y > self.hide_threshold {
                    y > self.last_scroll_y && !self.menu_open
                } else {
                    false
                };
                self.last_scroll_y = y;
            }
            NavAction::ToggleMenu => self.menu_open = !self.menu_open,
            NavAction::LinkClicked | NavAction::Escape => self.menu_open = false,
            NavAction::SectionEntered(id) => self.active_section = Some(id),
        }
    }

    pub fn is_active(&self, href: &str) -> bool {
        match (&self.active_section, href.strip_prefix('#')) {
            (Some(active), Some(id)) => active == id,
            _ => false,
        }
    }

    pub fn navbar_classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["navbar"];
        if self.scrolled {
            classes.push("scrolled");
        }
        if self.hidden {
            classes.push("hidden");
        }
        classes
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> NavState {
        NavState::new(&SiteConfig::default(), 0.0)
    }

    fn scroll(state: &mut NavState, ys: &[f64]) {
        for y in ys {
            state.apply(NavAction::Scrolled(*y));
        }
    }

    #[test]
    fn scrolled_flag_tracks_fifty_pixels() {
        let mut nav = state();
        for y in [0.0, 10.0, 50.0, 50.5, 51.0, 400.0, 49.0, 3000.0] {
            nav.apply(NavAction::Scrolled(y));
            assert_eq!(nav.scrolled, y > 50.0, "scrollY = {}", y);
        }
    }

    #[test]
    fn hides_when_scrolling_down_past_threshold() {
        let mut nav = state();
        scroll(&mut nav, &[80.0, 150.0]);
        assert!(nav.hidden);
        scroll(&mut nav, &[120.0]);
        assert!(!nav.hidden);
    }

    #[test]
    fn never_hidden_at_or_below_threshold() {
        let mut nav = state();
        scroll(&mut nav, &[300.0, 400.0]);
        assert!(nav.hidden);
        scroll(&mut nav, &[100.0]);
        assert!(!nav.hidden);
        scroll(&mut nav, &[20.0, 90.0]);
        assert!(!nav.hidden);
    }

    #[test]
    fn open_menu_keeps_navbar_visible() {
        let mut nav = state();
        nav.apply(NavAction::ToggleMenu);
        scroll(&mut nav, &[200.0, 500.0]);
        assert!(!nav.hidden);
        assert!(nav.navbar_classes().contains(&"scrolled"));
    }

    #[test]
    fn menu_closes_on_link_click_and_escape() {
        let mut nav = state();
        nav.apply(NavAction::ToggleMenu);
        assert!(nav.menu_open);
        nav.apply(NavAction::LinkClicked);
        assert!(!nav.menu_open);

        nav.apply(NavAction::ToggleMenu);
        nav.apply(NavAction::Escape);
        assert!(!nav.menu_open);

        nav.apply(NavAction::Escape);
        assert!(!nav.menu_open);
    }

    #[test]
    fn last_intersecting_section_wins() {
        let mut nav = state();
        nav.apply(NavAction::SectionEntered("sobre".into()));
        nav.apply(NavAction::SectionEntered("projetos".into()));
        assert!(nav.is_active("#projetos"));
        assert!(!nav.is_active("#sobre"));
        assert!(!nav.is_active("projetos"));
    }

    #[test]
    fn redundant_actions_keep_the_same_state() {
        let nav = Rc::new(state());
        let next = nav.clone().reduce(NavAction::Escape);
        assert!(Rc::ptr_eq(&nav, &next));
    }
}
