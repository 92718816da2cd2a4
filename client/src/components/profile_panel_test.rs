use super::*;
use portal::auth::{Credentials, DemoAuthenticator};

#[test]
fn info_rows_list_profile_fields_in_order() {
    let user = DemoAuthenticator
        .sign_in(&Credentials::new("resident@hospital.org", "pw"))
        .unwrap();
    let rows = info_rows(&user);
    let labels: Vec<&str> = rows.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, ["Full Name", "Email", "Training Year", "Specialty", "Institution"]);
    assert_eq!(rows[0].1, "Dr. Sarah Johnson");
    assert_eq!(rows[1].1, "resident@hospital.org");
}

#[test]
fn weeks_label_shows_completed_over_total() {
    let rotation = RotationProgress {
        name: "Cardiology".to_owned(),
        completed_weeks: 2,
        total_weeks: 4,
        status: "in_progress".to_owned(),
    };
    assert_eq!(weeks_label(&rotation), "2 / 4 weeks");
}

#[test]
fn priority_label_appends_suffix() {
    assert_eq!(priority_label("high"), "high priority");
}
