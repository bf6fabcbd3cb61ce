/// Relative path of the project feed served next to the page.
pub const PROJECTS_URL: &str = "assets/data/projects.json";
/// Shown in place of a project image when the feed entry has none.
pub const FALLBACK_IMAGE: &str = "assets/img/header-banner.svg";

pub const SCROLL_OFFSET: f64 = 80.0;
pub const NAVBAR_SCROLLED_AT: f64 = 50.0;
pub const NAVBAR_HIDE_THRESHOLD: f64 = 100.0;
pub const SCROLL_THROTTLE_MS: u32 = 100;
pub const REVEAL_DELAY_MS: u32 = 100;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const STATUS_CLEAR_MS: u32 = 5_000;
pub const DEV_RESET_MS: u32 = 1_000;

/// Returns the contact form endpoint baked in at build time.
///
/// An unset or blank `PORTFOLIO_FORM_ENDPOINT` means the page runs in
/// development mode and submissions are never sent.
pub fn get_form_endpoint() -> Option<String> {
    normalize_endpoint(option_env!("PORTFOLIO_FORM_ENDPOINT"))
}

fn normalize_endpoint(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Everything the page components need from the outside world.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub form_endpoint: Option<String>,
    pub projects_url: String,
    pub fallback_image: String,
    pub scroll_offset: f64,
    pub navbar_scrolled_at: f64,
    pub navbar_hide_threshold: f64,
    pub scroll_throttle_ms: u32,
    pub reveal_delay_ms: u32,
    pub reveal_threshold: f64,
    pub status_clear_ms: u32,
    pub dev_reset_ms: u32,
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self {
            form_endpoint: get_form_endpoint(),
            ..Self::default()
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form_endpoint: None,
            projects_url: PROJECTS_URL.to_string(),
            fallback_image: FALLBACK_IMAGE.to_string(),
            scroll_offset: SCROLL_OFFSET,
            navbar_scrolled_at: NAVBAR_SCROLLED_AT,
            navbar_hide_threshold: NAVBAR_HIDE_THRESHOLD,
            scroll_throttle_ms: SCROLL_THROTTLE_MS,
            reveal_delay_ms: REVEAL_DELAY_MS,
            reveal_threshold: REVEAL_THRESHOLD,
            status_clear_ms: STATUS_CLEAR_MS,
            dev_reset_ms: DEV_RESET_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_endpoint_means_development_mode() {
        assert_eq!(normalize_endpoint(None), None);
        assert_eq!(normalize_endpoint(Some("")), None);
        assert_eq!(normalize_endpoint(Some("   ")), None);
    }

    #[test]
    fn endpoint_is_trimmed() {
        assert_eq!(
            normalize_endpoint(Some(" https://forms.example.com/f/abc ")),
            Some("https://forms.example.com/f/abc".to_string())
        );
    }

    #[test]
    fn default_config_uses_page_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.projects_url, "assets/data/projects.json");
        assert_eq!(config.scroll_offset, 80.0);
        assert_eq!(config.status_clear_ms, 5_000);
        assert!(config.form_endpoint.is_none());
    }
}
