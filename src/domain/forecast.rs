use super::record::Segment;
use chrono::{Datelike, Months, NaiveDate};

/// Regression input derived from one record: (year, month number 1-12)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureRow {
    pub year: i32,
    pub month: u32,
}

impl FeatureRow {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn as_f64(&self) -> [f64; 2] {
        [self.year as f64, self.month as f64]
    }
}

/// Inclusive range of calendar months the forecast covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizon {
    start: NaiveDate,
    end: NaiveDate,
}

impl Horizon {
    /// `None` when either bound is not a real month or `end` precedes `start`
    pub fn new(start_year: i32, start_month: u32, end_year: i32, end_month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(start_year, start_month, 1)?;
        let end = NaiveDate::from_ymd_opt(end_year, end_month, 1)?;
        (start <= end).then_some(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// First day of every month in the horizon, ascending
    pub fn months(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), |d| d.checked_add_months(Months::new(1)))
            .take_while(move |d| *d <= end)
    }

    pub fn len(&self) -> usize {
        let span = (self.end.year() - self.start.year()) * 12 + self.end.month() as i32
            - self.start.month() as i32;
        span as usize + 1
    }

    /// Always false: construction guarantees at least one month
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Horizon {
    /// January 2024 through December 2028
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN),
            end: NaiveDate::from_ymd_opt(2028, 12, 1).unwrap_or(NaiveDate::MIN),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted_price: f64,
}

/// Forecast series for one segment, ordered by date
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub segment: Segment,
    pub sample_count: usize,
    pub points: Vec<ForecastPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_horizon_has_sixty_months() {
        let horizon = Horizon::default();
        let months: Vec<NaiveDate> = horizon.months().collect();

        assert_eq!(months.len(), 60);
        assert_eq!(horizon.len(), 60);
        assert_eq!(months[0], NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(months[59], NaiveDate::from_ymd_opt(2028, 12, 1).unwrap());
    }

    #[test]
    fn test_horizon_months_step_by_one_month() {
        let months: Vec<NaiveDate> = Horizon::default().months().collect();

        for pair in months.windows(2) {
            assert_eq!(pair[0].day(), 1);
            assert_eq!(pair[0].checked_add_months(Months::new(1)), Some(pair[1]));
        }
    }

    #[test]
    fn test_horizon_rejects_inverted_range() {
        assert!(Horizon::new(2025, 1, 2024, 12).is_none());
        assert!(Horizon::new(2024, 13, 2025, 1).is_none());

        let single = Horizon::new(2030, 6, 2030, 6).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single.months().count(), 1);
    }

    #[test]
    fn test_feature_row_from_date() {
        let row = FeatureRow::from_date(NaiveDate::from_ymd_opt(2021, 6, 1).unwrap());
        assert_eq!(row, FeatureRow::new(2021, 6));
        assert_eq!(row.as_f64(), [2021.0, 6.0]);
    }
}
