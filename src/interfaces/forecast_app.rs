use crate::application::bootstrap::LoadedData;
use crate::application::export::{forecast_to_csv, write_export};
use crate::application::forecaster::is_insufficient_data;
use crate::application::selection::Selection;
use crate::domain::forecast::Forecast;
use crate::interfaces::view_models::forecast_view_model::ForecastViewModel;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Result of the last forecast button press
#[derive(Debug, Clone)]
pub enum ForecastOutcome {
    Ready {
        forecast: Forecast,
        view: ForecastViewModel,
        csv: Vec<u8>,
    },
    /// The chosen segment has no history to fit
    InsufficientData { message: String },
    /// Anything else, e.g. a malformed month in the segment's records
    Failed { message: String },
}

/// Dashboard state: the loaded data plus what the user has picked so far
pub struct ForecastApp {
    pub(crate) data: LoadedData,
    pub(crate) selection: Option<Selection>,
    pub(crate) outcome: Option<ForecastOutcome>,
    pub(crate) export_dir: PathBuf,
    pub(crate) export_status: Option<Result<PathBuf, String>>,
    pub(crate) theme_applied: bool,
}

impl ForecastApp {
    pub fn new(data: LoadedData, export_dir: PathBuf) -> Self {
        let selection = Selection::initial(&data.index);
        Self {
            data,
            selection,
            outcome: None,
            export_dir,
            export_status: None,
            theme_applied: false,
        }
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn outcome(&self) -> Option<&ForecastOutcome> {
        self.outcome.as_ref()
    }

    pub fn towns(&self) -> Vec<String> {
        self.data.index.towns().map(str::to_string).collect()
    }

    /// Options for the flat type selector, recomputed from the dataset on each call
    pub fn flat_type_options(&self) -> Vec<String> {
        self.selection
            .as_ref()
            .map(|s| s.flat_type_options(&self.data.dataset))
            .unwrap_or_default()
    }

    pub fn select_town(&mut self, town: &str) {
        if let Some(current) = self.selection.take() {
            let changed = current.town() != town;
            self.selection = Some(current.select_town(town));
            if changed {
                self.clear_results();
            }
        }
    }

    /// Applies a flat type picked from `options`, the list shown for the current town
    pub fn select_flat_type(&mut self, options: &[String], flat_type: &str) {
        if let Some(current) = self.selection.take() {
            let before = current.flat_type().map(str::to_string);
            let next = current.select_flat_type(options, flat_type);
            if next.flat_type().map(str::to_string) != before {
                self.clear_results();
            }
            self.selection = Some(next);
        }
    }

    /// Recomputes the forecast for the current selection; nothing is cached between presses
    pub fn run_forecast(&mut self) {
        let Some(segment) = self.selection.as_ref().and_then(Selection::segment).cloned() else {
            return;
        };
        info!("Forecast requested for {}", segment);
        self.export_status = None;

        self.outcome = Some(match self.data.service.forecast(&segment) {
            Ok(forecast) => match forecast_to_csv(&forecast.points) {
                Ok(csv) => ForecastOutcome::Ready {
                    view: ForecastViewModel::from_forecast(&forecast),
                    forecast,
                    csv,
                },
                Err(e) => {
                    error!("CSV export of {} failed: {:#}", segment, e);
                    ForecastOutcome::Failed {
                        message: format!("{:#}", e),
                    }
                }
            },
            Err(e) if is_insufficient_data(&e) => ForecastOutcome::InsufficientData {
                message: format!(
                    "Not enough sales of {} flats in {} to fit a trend.",
                    segment.flat_type, segment.town
                ),
            },
            Err(e) => {
                error!("Forecast for {} failed: {:#}", segment, e);
                ForecastOutcome::Failed {
                    message: format!("{:#}", e),
                }
            }
        });
    }

    /// Writes the last forecast's CSV to the export directory
    pub fn export_csv(&mut self) -> Option<&Result<PathBuf, String>> {
        let Some(ForecastOutcome::Ready { csv, .. }) = &self.outcome else {
            warn!("Export requested without a forecast");
            return None;
        };

        self.export_status = Some(write_export(&self.export_dir, csv).map_err(|e| {
            error!("Export failed: {:#}", e);
            format!("{:#}", e)
        }));
        self.export_status.as_ref()
    }

    fn clear_results(&mut self) {
        self.outcome = None;
        self.export_status = None;
    }
}
