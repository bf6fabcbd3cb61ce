pub mod gallery;
pub mod models;
