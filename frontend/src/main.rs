use portfolio_frontend::config::SiteConfig;
use web_sys::window;

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    let Some(document) = window().and_then(|w| w.document()) else {
        log::error!("No document available, nothing to mount");
        return;
    };
    let config = SiteConfig::from_build_env();
    if config.form_endpoint.is_none() {
        log::warn!("PORTFOLIO_FORM_ENDPOINT not set, contact form runs in development mode");
    }

    match document.get_element_by_id("app") {
        Some(root) => portfolio_frontend::attach(root, config),
        None => {
            log::warn!("#app not found, mounting on body");
            if let Some(body) = document.body() {
                portfolio_frontend::attach(body.into(), config);
            }
        }
    }
}
