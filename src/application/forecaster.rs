use crate::application::preprocessor::{SegmentSamples, preprocess};
use crate::application::regression::{LinearTrendModel, design_matrix};
use crate::domain::dataset::Dataset;
use crate::domain::errors::ForecastError;
use crate::domain::forecast::{FeatureRow, Forecast, ForecastPoint, Horizon};
use crate::domain::record::Segment;
use anyhow::{Context, Result};
use tracing::{info, warn};

/// Fits a per-segment linear trend and projects it over a fixed horizon.
///
/// The model is trained on the whole segment history; there is no hold-out set.
/// Predictions are not clamped, so a steep downward trend can go negative.
#[derive(Debug, Clone, Default)]
pub struct TrendForecaster {
    horizon: Horizon,
}

impl TrendForecaster {
    pub fn new(horizon: Horizon) -> Self {
        Self { horizon }
    }

    pub fn horizon(&self) -> Horizon {
        self.horizon
    }

    pub fn fit(&self, samples: &SegmentSamples) -> Result<LinearTrendModel, ForecastError> {
        if samples.features.len() != samples.targets.len() {
            return Err(ForecastError::LengthMismatch {
                features: samples.features.len(),
                targets: samples.targets.len(),
            });
        }
        if samples.is_empty() {
            return Err(ForecastError::InsufficientData { actual: 0 });
        }
        LinearTrendModel::fit(&samples.feature_matrix(), &samples.target_vector())
    }

    /// One point per horizon month, dated the first of the month
    pub fn project(&self, model: &LinearTrendModel) -> Vec<ForecastPoint> {
        let dates: Vec<_> = self.horizon.months().collect();
        let rows: Vec<FeatureRow> = dates.iter().copied().map(FeatureRow::from_date).collect();

        let predictions = model.predict(&design_matrix(&rows));
        dates
            .into_iter()
            .zip(predictions.iter().copied())
            .map(|(date, predicted_price)| ForecastPoint {
                date,
                predicted_price,
            })
            .collect()
    }

    pub fn forecast(&self, samples: &SegmentSamples) -> Result<Vec<ForecastPoint>, ForecastError> {
        let model = self.fit(samples)?;
        Ok(self.project(&model))
    }
}

/// Preprocess + fit + project for one segment of a loaded dataset.
///
/// Holds no state between calls; every request recomputes from the records.
#[derive(Debug, Clone)]
pub struct ForecastService {
    dataset: Dataset,
    forecaster: TrendForecaster,
}

impl ForecastService {
    pub fn new(dataset: Dataset, forecaster: TrendForecaster) -> Self {
        Self {
            dataset,
            forecaster,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn forecaster(&self) -> &TrendForecaster {
        &self.forecaster
    }

    pub fn forecast(&self, segment: &Segment) -> Result<Forecast> {
        let samples = preprocess(&self.dataset, segment)
            .with_context(|| format!("Failed to prepare features for {}", segment))?;

        let model = match self.forecaster.fit(&samples) {
            Ok(model) => model,
            Err(e) => {
                warn!("Forecast for {} rejected: {}", segment, e);
                return Err(e).with_context(|| format!("Cannot forecast {}", segment));
            }
        };

        let points = self.forecaster.project(&model);
        info!(
            "Forecast for {}: {} samples, coefficients {:?}, intercept {:.2}, r2 {:.4}",
            segment,
            model.n_observations(),
            model.coefficients(),
            model.intercept(),
            model.r_squared()
        );

        Ok(Forecast {
            segment: segment.clone(),
            sample_count: model.n_observations(),
            points,
        })
    }
}

/// True when `error` (or anything in its chain) is an insufficient-data rejection
pub fn is_insufficient_data(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<ForecastError>(),
            Some(ForecastError::InsufficientData { .. })
        )
    })
}
