use crate::domain::forecast::Forecast;
use chrono::{Datelike, NaiveDate};

/// One rendered table line
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRow {
    pub date: String,
    pub price: String,
}

/// Display-ready form of a forecast: titles, table rows, and plot series
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastViewModel {
    pub title: String,
    pub chart_title: String,
    pub summary: String,
    pub rows: Vec<ForecastRow>,
    /// (month index, price) pairs ordered by date
    pub points: Vec<[f64; 2]>,
}

impl ForecastViewModel {
    pub fn from_forecast(forecast: &Forecast) -> Self {
        let segment = &forecast.segment;
        let mut ordered = forecast.points.clone();
        ordered.sort_by_key(|p| p.date);

        let (start, end, change) = match (ordered.first(), ordered.last()) {
            (Some(first), Some(last)) => (
                first.date.year(),
                last.date.year(),
                last.predicted_price - first.predicted_price,
            ),
            _ => (0, 0, 0.0),
        };

        let rows = ordered
            .iter()
            .map(|p| ForecastRow {
                date: p.date.format("%Y-%m-%d").to_string(),
                price: format_price(p.predicted_price),
            })
            .collect();
        let points = ordered
            .iter()
            .map(|p| [month_index(p.date), p.predicted_price])
            .collect();

        Self {
            title: format!(
                "Forecasted prices for {} in {} from {} to {}:",
                segment.flat_type, segment.town, start, end
            ),
            chart_title: format!(
                "Forecasted Prices for {} in {} ({}-{})",
                segment.flat_type, segment.town, start, end
            ),
            summary: format!(
                "Fitted on {} transactions; {} over the horizon",
                forecast.sample_count,
                format_signed_price(change)
            ),
            rows,
            points,
        }
    }
}

/// Months since year 0, used as the chart's x coordinate
pub fn month_index(date: NaiveDate) -> f64 {
    (date.year() * 12 + date.month0() as i32) as f64
}

/// Inverse of [`month_index`], rendered as "YYYY-MM"
pub fn format_month_index(value: f64) -> String {
    let index = value.round() as i64;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) + 1;
    format!("{}-{:02}", year, month)
}

/// "$1,234,567.89"; negative values keep their sign
pub fn format_price(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u128;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

fn format_signed_price(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", format_price(value))
    } else {
        format_price(value)
    }
}
