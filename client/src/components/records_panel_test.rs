use super::*;
use portal::PortalConfig;
use portal::seed::demo_seed;

fn demo_catalog() -> RecordCatalog {
    RecordCatalog::from_seed(demo_seed(), &PortalConfig::default()).unwrap()
}

// =============================================================
// Table layout
// =============================================================

#[test]
fn column_headers_match_record_shape() {
    assert_eq!(column_headers(Collection::Patients).len(), 7);
    assert_eq!(column_headers(Collection::Procedures).len(), 7);
    assert_eq!(column_headers(Collection::Cases).len(), 6);
    assert_eq!(column_headers(Collection::Procedures)[5], "Hours");
}

#[test]
fn hours_label_keeps_one_decimal() {
    assert_eq!(hours_label(2.5), "2.5 hrs");
    assert_eq!(hours_label(1.0), "1.0 hrs");
    assert_eq!(hours_label(0.0), "0.0 hrs");
}

#[test]
fn search_placeholder_names_the_collection() {
    assert_eq!(search_placeholder(Collection::Patients), "Search patient records...");
    assert_eq!(search_placeholder(Collection::Cases), "Search clinical cases...");
}

// =============================================================
// Empty states
// =============================================================

#[test]
fn empty_message_distinguishes_no_data_from_no_match() {
    let mut catalog = demo_catalog();
    catalog.set_query(Collection::Patients, "zzz-no-such-record");
    assert_eq!(empty_message(&catalog, Collection::Patients), "No records match your search.");

    let empty = RecordCatalog::default();
    assert_eq!(empty_message(&empty, Collection::Cases), "No records yet.");
}
