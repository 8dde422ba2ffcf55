pub mod components;
pub mod design_system;
pub mod forecast_app;
pub mod ui;
pub mod view_models;

pub use forecast_app::{ForecastApp, ForecastOutcome};
