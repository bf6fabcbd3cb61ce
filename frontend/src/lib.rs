pub mod config;
pub mod contact;
pub mod gallery;
pub mod modal;
pub mod nav;
pub mod reveal;

pub mod pages {
    pub mod home;
}

pub mod utils {
    pub mod api;
    pub mod dom;
    pub mod scroll_lock;
    pub mod throttle;
}

use config::SiteConfig;
use pages::home::{Home, HomeProps};

/// Mounts the page under `root`, with every component wired to `config`.
pub fn attach(root: web_sys::Element, config: SiteConfig) {
    yew::Renderer::<Home>::with_root_and_props(root, HomeProps { config }).render();
}
