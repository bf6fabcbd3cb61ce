pub mod models;
pub mod navbar;
pub mod scroll_spy;
