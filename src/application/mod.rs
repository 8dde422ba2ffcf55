// Startup load
pub mod bootstrap;
pub mod fetcher;

// Per-request forecasting
pub mod forecaster;
pub mod preprocessor;
pub mod regression;

// Presentation support
pub mod export;
pub mod selection;
