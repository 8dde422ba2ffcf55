//! CSV export of a forecast table.

use crate::domain::forecast::ForecastPoint;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub const EXPORT_FILE_NAME: &str = "forecast.csv";
pub const EXPORT_MIME_TYPE: &str = "text/csv";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Serialize)]
struct ExportRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Forecasted Price")]
    forecasted_price: f64,
}

/// Serializes `points` as `Date,Forecasted Price` rows
pub fn forecast_to_csv(points: &[ForecastPoint]) -> Result<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(Vec::new());

    if points.is_empty() {
        wtr.write_record(["Date", "Forecasted Price"])
            .context("Failed to write CSV header")?;
    }
    for point in points {
        wtr.serialize(ExportRow {
            date: point.date.format(DATE_FORMAT).to_string(),
            forecasted_price: point.predicted_price,
        })
        .context("Failed to serialize forecast row")?;
    }

    wtr.into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV buffer: {}", e))
}

/// Writes the CSV bytes to `dir/forecast.csv` and returns the full path
pub fn write_export(dir: &Path, bytes: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {:?}", dir))?;
    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, bytes).with_context(|| format!("Failed to write {:?}", path))?;
    info!("Exported {} bytes ({}) to {:?}", bytes.len(), EXPORT_MIME_TYPE, path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(year: i32, month: u32, price: f64) -> ForecastPoint {
        ForecastPoint {
            date: NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
            predicted_price: price,
        }
    }

    #[test]
    fn test_csv_layout() {
        let bytes = forecast_to_csv(&[point(2024, 1, 402179.5), point(2024, 2, -12.25)]).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text,
            "Date,Forecasted Price\n2024-01-01,402179.5\n2024-02-01,-12.25\n"
        );
    }

    #[test]
    fn test_empty_export_still_has_header() {
        let text = String::from_utf8(forecast_to_csv(&[]).unwrap()).unwrap();
        assert_eq!(text, "Date,Forecasted Price\n");
    }

    #[test]
    fn test_csv_parses_back() {
        let points = vec![point(2027, 11, 512_345.678_9), point(2027, 12, 513_000.0)];
        let bytes = forecast_to_csv(&points).unwrap();

        let mut rdr = csv::Reader::from_reader(bytes.as_slice());
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers, vec!["Date", "Forecasted Price"]);

        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "2027-11-01");
        assert_eq!(rows[0][1].parse::<f64>().unwrap(), 512_345.678_9);
    }

    #[test]
    fn test_write_export_uses_fixed_name() {
        let dir = std::env::temp_dir().join(format!("hdb-forecast-export-{}", std::process::id()));
        let path = write_export(&dir, b"Date,Forecasted Price\n").unwrap();

        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Date,Forecasted Price\n"
        );
        std::fs::remove_dir_all(&dir).ok();
    }
}
