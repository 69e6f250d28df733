pub mod app;
pub mod config;
pub mod error;
pub mod fetch;
pub mod host;
pub mod logging;
pub mod model;
pub mod page;
pub mod ui;
#[cfg(not(target_arch = "wasm32"))]
pub mod preview;
#[cfg(target_arch = "wasm32")]
pub mod web;
#[cfg(test)]
mod testing;

pub use app::{DashboardController, LoadOutcome, ThemeSync};
pub use config::DashboardConfig;
pub use error::DashboardError;
