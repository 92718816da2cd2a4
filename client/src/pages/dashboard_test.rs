use super::*;

#[test]
fn placeholder_text_names_the_section() {
    assert_eq!(placeholder_text(Section::Schedule), "Schedule is not available yet.");
    assert_eq!(placeholder_text(Section::Colleagues), "Colleagues is not available yet.");
}

#[test]
fn placeholder_sections_have_no_heading() {
    for section in Section::ALL.into_iter().filter(|s| !s.has_view()) {
        assert!(section.heading().is_none(), "{section:?}");
    }
}
