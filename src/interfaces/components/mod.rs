pub mod card;
pub mod forecast_chart;
pub mod forecast_table;
pub mod selectors;
