use super::*;

fn tutor(name: &str, subjects: Vec<Subject>, bio: &str) -> Tutor {
    Tutor {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_owned(),
        subjects,
        hourly_rate_cents: 4500,
        rating: 4.8,
        years_experience: 5,
        bio: bio.to_owned(),
    }
}

fn directory(query: &str, subject: Option<Subject>) -> DirectoryState {
    DirectoryState {
        items: vec![
            tutor("Ines Rahal", vec![Subject::Math, Subject::Science], "Calculus and physics."),
            tutor("Tom Abel", vec![Subject::English], "Essay coaching."),
            tutor("Nadia Kim", vec![Subject::Math], "Exam prep for algebra."),
        ],
        query: query.to_owned(),
        subject,
    }
}

#[test]
fn no_filters_returns_all_in_order() {
    assert_eq!(directory("", None).filtered().len(), 3);
}

#[test]
fn subject_filter_narrows_to_offering_tutors() {
    let names: Vec<_> =
        directory("", Some(Subject::Math)).filtered().into_iter().map(|t| t.name).collect();
    assert_eq!(names, ["Ines Rahal", "Nadia Kim"]);
}

#[test]
fn text_filter_matches_name_case_insensitively() {
    let names: Vec<_> = directory("nadia", None).filtered().into_iter().map(|t| t.name).collect();
    assert_eq!(names, ["Nadia Kim"]);
}

#[test]
fn text_filter_matches_bio() {
    let names: Vec<_> = directory("essay", None).filtered().into_iter().map(|t| t.name).collect();
    assert_eq!(names, ["Tom Abel"]);
}

#[test]
fn filters_compose() {
    let names: Vec<_> = directory("algebra", Some(Subject::Math))
        .filtered()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, ["Nadia Kim"]);
}

#[test]
fn unmatched_filters_return_empty() {
    assert!(directory("violin", Some(Subject::Music)).filtered().is_empty());
}

#[test]
fn subject_chips_cover_all_variants() {
    assert_eq!(Subject::all().len(), 6);
    assert_eq!(Subject::Math.label(), "Math");
}
