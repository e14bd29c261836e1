//! HTTP API handlers for dscope-ui

pub mod catalog;
pub mod compare;
pub mod explorer;
pub mod health;
pub mod ui_assets;
pub mod wizard;

pub use catalog::{get_distro, list_bases, list_catalog, list_tags};
pub use compare::{clear_comparison, get_comparison, remove_from_comparison, toggle_comparison};
pub use explorer::explore;
pub use health::health_routes;
pub use ui_assets::{serve_app_js, serve_index};
pub use wizard::run_wizard;
