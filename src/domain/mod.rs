pub mod dataset;
pub mod errors;
pub mod forecast;
pub mod ports;
pub mod record;
