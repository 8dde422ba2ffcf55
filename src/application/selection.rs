//! Two-stage segment selection: pick a town, then one of its flat types.

use crate::domain::dataset::{Dataset, SegmentIndex};
use crate::domain::record::Segment;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    TownSelected { town: String },
    SegmentSelected { segment: Segment },
}

impl Selection {
    /// Starts on the first town of the index, like a select box's default option
    pub fn initial(index: &SegmentIndex) -> Option<Self> {
        index.first_town().map(|town| Selection::TownSelected {
            town: town.to_string(),
        })
    }

    pub fn town(&self) -> &str {
        match self {
            Selection::TownSelected { town } => town,
            Selection::SegmentSelected { segment } => &segment.town,
        }
    }

    pub fn flat_type(&self) -> Option<&str> {
        match self {
            Selection::TownSelected { .. } => None,
            Selection::SegmentSelected { segment } => Some(&segment.flat_type),
        }
    }

    pub fn segment(&self) -> Option<&Segment> {
        match self {
            Selection::TownSelected { .. } => None,
            Selection::SegmentSelected { segment } => Some(segment),
        }
    }

    /// Flat types offered for the current town, derived fresh from the dataset
    pub fn flat_type_options(&self, dataset: &Dataset) -> Vec<String> {
        dataset.flat_types_for(self.town())
    }

    /// Switching to a different town always drops the flat type
    pub fn select_town(self, town: &str) -> Self {
        if self.town() == town {
            return self;
        }
        Selection::TownSelected {
            town: town.to_string(),
        }
    }

    /// Ignored unless `flat_type` is one of `options`, the list derived for the
    /// current town by [`Selection::flat_type_options`]
    pub fn select_flat_type(self, options: &[String], flat_type: &str) -> Self {
        if !options.iter().any(|f| f == flat_type) {
            debug!(
                "Selection: '{}' is not a flat type of {}, keeping {:?}",
                flat_type,
                self.town(),
                self
            );
            return self;
        }
        Selection::SegmentSelected {
            segment: Segment::new(self.town(), flat_type),
        }
    }

    pub fn can_forecast(&self) -> bool {
        matches!(self, Selection::SegmentSelected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::ResaleRecord;
    use rust_decimal_macros::dec;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            ResaleRecord::new("BEDOK", "3 ROOM", "2019-01", dec!(280000)),
            ResaleRecord::new("BEDOK", "4 ROOM", "2019-02", dec!(390000)),
            ResaleRecord::new("YISHUN", "5 ROOM", "2019-03", dec!(460000)),
            ResaleRecord::new("YISHUN", "EXECUTIVE", "2019-04", dec!(590000)),
        ])
    }

    #[test]
    fn test_initial_selects_first_town_only() {
        let dataset = dataset();
        let selection = Selection::initial(&SegmentIndex::build(&dataset)).unwrap();

        assert_eq!(selection.town(), "BEDOK");
        assert_eq!(selection.flat_type(), None);
        assert!(!selection.can_forecast());
    }

    #[test]
    fn test_initial_on_empty_index() {
        assert_eq!(Selection::initial(&SegmentIndex::default()), None);
    }

    #[test]
    fn test_changing_town_resets_flat_type() {
        let dataset = dataset();
        let selection = Selection::initial(&SegmentIndex::build(&dataset)).unwrap();
        let options = selection.flat_type_options(&dataset);
        let selection = selection.select_flat_type(&options, "4 ROOM");
        assert_eq!(selection.segment(), Some(&Segment::new("BEDOK", "4 ROOM")));

        let selection = selection.select_town("YISHUN");
        assert_eq!(
            selection,
            Selection::TownSelected {
                town: "YISHUN".to_string()
            }
        );
        assert_eq!(
            selection.flat_type_options(&dataset),
            vec!["5 ROOM", "EXECUTIVE"]
        );
    }

    #[test]
    fn test_reselecting_same_town_keeps_flat_type() {
        let dataset = dataset();
        let selection = Selection::TownSelected {
            town: "BEDOK".to_string(),
        };
        let options = selection.flat_type_options(&dataset);
        let selection = selection.select_flat_type(&options, "3 ROOM").select_town("BEDOK");

        assert_eq!(selection.flat_type(), Some("3 ROOM"));
    }

    #[test]
    fn test_foreign_flat_type_is_ignored() {
        let dataset = dataset();
        let selection = Selection::TownSelected {
            town: "BEDOK".to_string(),
        };
        let options = selection.flat_type_options(&dataset);
        let selection = selection.select_flat_type(&options, "EXECUTIVE");

        assert_eq!(selection.town(), "BEDOK");
        assert!(!selection.can_forecast());
    }

    #[test]
    fn test_flat_type_checked_against_given_options() {
        let selection = Selection::TownSelected {
            town: "BEDOK".to_string(),
        };
        let options = vec!["3 ROOM".to_string(), "4 ROOM".to_string()];

        let rejected = selection.clone().select_flat_type(&options, "EXECUTIVE");
        assert_eq!(rejected, selection);

        let picked = selection.select_flat_type(&options, "4 ROOM");
        assert_eq!(picked.segment(), Some(&Segment::new("BEDOK", "4 ROOM")));
    }
}
