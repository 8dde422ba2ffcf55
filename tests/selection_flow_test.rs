use hdb_forecast::application::selection::Selection;
use hdb_forecast::domain::dataset::{Dataset, SegmentIndex};
use hdb_forecast::domain::record::{ResaleRecord, Segment};
use rust_decimal_macros::dec;

fn dataset() -> Dataset {
    Dataset::new(vec![
        ResaleRecord::new("WOODLANDS", "5 ROOM", "2019-04", dec!(420000)),
        ResaleRecord::new("ANG MO KIO", "3 ROOM", "2019-04", dec!(300000)),
        ResaleRecord::new("WOODLANDS", "3 ROOM", "2019-05", dec!(280000)),
        ResaleRecord::new("ANG MO KIO", "EXECUTIVE", "2020-01", dec!(780000)),
        ResaleRecord::new("WOODLANDS", "5 ROOM", "2020-02", dec!(430000)),
    ])
}

#[test]
fn test_first_town_selected_without_flat_type() {
    let dataset = dataset();
    let index = SegmentIndex::build(&dataset);

    let selection = Selection::initial(&index).expect("non-empty index");

    assert_eq!(selection.town(), "ANG MO KIO");
    assert_eq!(selection.flat_type(), None);
    assert!(!selection.can_forecast());
}

#[test]
fn test_flat_type_options_follow_town() {
    let dataset = dataset();
    let index = SegmentIndex::build(&dataset);
    let selection = Selection::initial(&index).expect("non-empty index");

    assert_eq!(selection.flat_type_options(&dataset), vec!["3 ROOM", "EXECUTIVE"]);

    let options = selection.flat_type_options(&dataset);
    let selection = selection
        .select_flat_type(&options, "EXECUTIVE")
        .select_town("WOODLANDS");

    assert_eq!(selection.flat_type(), None);
    assert_eq!(selection.flat_type_options(&dataset), vec!["5 ROOM", "3 ROOM"]);
    assert_eq!(
        selection.flat_type_options(&dataset),
        index.flat_types("WOODLANDS").to_vec()
    );
}

#[test]
fn test_flat_type_from_other_town_is_rejected() {
    let dataset = dataset();
    let selection = Selection::TownSelected {
        town: "WOODLANDS".to_string(),
    };

    let options = selection.flat_type_options(&dataset);
    let selection = selection.select_flat_type(&options, "EXECUTIVE");
    assert!(!selection.can_forecast());

    let selection = selection.select_flat_type(&options, "5 ROOM");
    assert_eq!(selection.segment(), Some(&Segment::new("WOODLANDS", "5 ROOM")));
}

#[test]
fn test_town_match_is_case_sensitive() {
    let dataset = dataset();
    let selection = Selection::TownSelected {
        town: "Woodlands".to_string(),
    };

    assert!(selection.flat_type_options(&dataset).is_empty());
}
