use super::*;
use crate::nav::graph;

// =============================================================
// is_active
// =============================================================

#[test]
fn exact_path_is_active() {
    assert!(is_active("/teacher/schedule", "/teacher/schedule"));
}

#[test]
fn trailing_slash_still_matches() {
    assert!(is_active("/teacher/schedule/", "/teacher/schedule"));
}

#[test]
fn initial_destination_does_not_match_siblings() {
    assert!(is_active("/teacher", "/teacher"));
    assert!(!is_active("/teacher/schedule", "/teacher"));
    assert!(!is_active("/teacher", "/teacher/schedule"));
}

#[test]
fn other_graph_paths_are_inactive() {
    assert!(!is_active("/parent/payments", "/student/tutors"));
}

// =============================================================
// icon_glyph
// =============================================================

#[test]
fn every_configured_icon_has_a_glyph() {
    for g in [&graph::AUTH, &graph::ROLE_SELECT, &graph::TEACHER, &graph::STUDENT, &graph::PARENT] {
        for dest in g.destinations() {
            assert_ne!(icon_glyph(dest.icon), "•", "missing glyph for {}", dest.icon);
        }
    }
}

#[test]
fn unknown_icon_falls_back_to_dot() {
    assert_eq!(icon_glyph("sparkles"), "•");
}
