//! Document validation through the public API

use crate::support::fixtures::load_fixture;

use chrono::NaiveDate;
use rendercv::curriculum::ConnectionKind;
use rendercv::diagnostics::DateConflict;
use rendercv::entry::{Entry, EntryKind};
use rendercv::spelling::{SpellCheck, WordList};
use rendercv::{DocumentError, ValidationOptions, Validator, WarningKind};

fn validator() -> Validator {
    Validator::new(ValidationOptions::with_today(
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    ))
}

#[test]
fn test_full_document() {
    let validated = validator().validate_str(&load_fixture("john_doe")).unwrap();
    assert!(validated.warnings.is_empty());

    let doc = validated.document;
    let classic = doc.design().classic().unwrap();
    assert_eq!(classic.primary_color.to_string(), "#004f90");
    assert_eq!(classic.date_and_location_width, "4cm");
    assert_eq!(classic.page_top_margin, "1.35cm");

    let cv = doc.cv();
    assert_eq!(cv.email(), Some("john.doe@example.com"));
    assert_eq!(cv.phone().unwrap().as_str(), "+905419999999");

    let kinds: Vec<ConnectionKind> = cv.connections().iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ConnectionKind::Phone,
            ConnectionKind::Email,
            ConnectionKind::Website,
            ConnectionKind::LinkedIn,
            ConnectionKind::GitHub,
        ]
    );
    assert_eq!(cv.connections()[2].value, "https://example.com/");
}

#[test]
fn test_derived_entry_fields() {
    let doc = validator()
        .validate_str(&load_fixture("john_doe"))
        .unwrap()
        .into_inner();
    let cv = doc.cv();

    let education = &cv.education()[0];
    assert_eq!(
        education.date_and_location_strings(),
        &[
            "Istanbul, Turkey",
            "Sept. 2018 to June 2022",
            "3 years 10 months",
        ]
    );
    assert_eq!(
        education.date_and_location_strings_without_time_span(),
        &["Istanbul, Turkey", "Sept. 2018 to June 2022"]
    );
    assert_eq!(
        education.highlight_strings()[0],
        "GPA: 3.97/4.00 ([Transcript](https://example.com/transcript.pdf))"
    );

    // present runs to the reference date: 2022-09-01 .. 2024-06-01 is 639 days
    let work = &cv.work_experience()[0];
    assert_eq!(
        work.date_and_location_strings(),
        &["Cupertino, CA", "Sept. 2022 to present", "1 year 9 months"]
    );
    assert_eq!(
        work.markdown_url(),
        Some("[view on GitHub](https://github.com/johndoe/project)")
    );

    let project = &cv.personal_projects()[0];
    assert_eq!(project.date_and_location_strings(), &["May 2023"]);
    assert_eq!(
        project.markdown_url(),
        Some("[view on YouTube](https://www.youtube.com/watch?v=abc)")
    );

    // free-form dates are shown as written
    assert_eq!(
        cv.certificates()[0].date_and_location_strings(),
        &["Spring 2021"]
    );
}

#[test]
fn test_sections_follow_key_order() {
    let doc = validator()
        .validate_str(&load_fixture("john_doe"))
        .unwrap()
        .into_inner();

    let sections: Vec<(&str, EntryKind, usize)> = doc
        .cv()
        .sections()
        .iter()
        .map(|s| (s.key, s.kind, s.entries.len()))
        .collect();
    assert_eq!(
        sections,
        vec![
            ("education", EntryKind::Institution, 1),
            ("work_experience", EntryKind::Position, 1),
            ("personal_projects", EntryKind::Named, 1),
            ("certificates", EntryKind::Named, 1),
            ("test_scores", EntryKind::SingleLine, 1),
            ("skills", EntryKind::SingleLine, 1),
        ]
    );
}

#[test]
fn test_every_violation_is_reported() {
    let err = validator()
        .validate_str(&load_fixture("invalid"))
        .unwrap_err();
    let DocumentError::Invalid(errors) = err else {
        panic!("expected constraint errors, got {:?}", err);
    };

    for path in [
        "design.options.primary_color",
        "design.options.page_top_margin",
        "cv.email",
        "cv.phone",
        "cv.website",
        "cv.social_networks[0].network",
        "cv.education[0].start_date",
        "cv.education[0].end_date",
    ] {
        assert!(errors.has_path(path), "missing error for {}: {}", path, errors);
    }
    assert_eq!(errors.len(), 8);
}

#[test]
fn test_unknown_theme() {
    let err = validator()
        .validate_str(&load_fixture("unknown_theme"))
        .unwrap_err();
    match err {
        DocumentError::Invalid(errors) => {
            assert_eq!(errors.len(), 1);
            assert!(errors.has_path("design.theme"));
            assert!(errors.to_string().contains("moderncv"));
        }
        other => panic!("expected constraint error, got {:?}", other),
    }
}

#[test]
fn test_missing_name_is_structural() {
    let err = validator()
        .validate_str(&load_fixture("missing_name"))
        .unwrap_err();
    assert!(matches!(err, DocumentError::Structure(_)));
}

#[test]
fn test_date_conflicts_warn_and_resolve() {
    let validated = validator()
        .validate_str(&load_fixture("conflicting_dates"))
        .unwrap();

    let work = validated.document.cv().work_experience();
    // complete range wins
    assert_eq!(work[0].event().date(), None);
    assert!(work[0].event().start_date().is_some());
    // partial range loses
    assert_eq!(work[1].event().date(), Some("2022"));
    assert!(work[1].event().start_date().is_none());

    let conflicts: Vec<(&str, String)> = validated
        .warnings
        .iter()
        .map(|w| (w.path.as_str(), w.message()))
        .collect();
    assert_eq!(
        conflicts,
        vec![
            (
                "cv.work_experience[0]",
                "start_date, end_date and date are all provided. Therefore, date will be ignored."
                    .to_string()
            ),
            (
                "cv.work_experience[1]",
                "date is provided. Therefore, start_date and end_date will be ignored.".to_string()
            ),
        ]
    );
    assert!(matches!(
        validated.warnings[1].kind,
        WarningKind::DateConflict {
            resolution: DateConflict::RangeIgnored
        }
    ));
}

#[test]
fn test_misspellings_are_warnings_only() {
    let spell = SpellCheck::new(Box::new(WordList::new(["led", "a", "team", "of", "four"])));
    let validated = validator()
        .with_spell_check(spell)
        .validate_str(&load_fixture("john_doe"))
        .unwrap();

    let words: Vec<String> = validated
        .warnings
        .iter()
        .filter_map(|w| match &w.kind {
            WarningKind::Spelling { word } => Some(word.clone()),
            _ => None,
        })
        .collect();
    // "cern" and "dynamometer" are always allowed
    assert_eq!(words, vec!["designed", "for", "engineers"]);
}

#[test]
fn test_json_document() {
    let json = std::fs::read_to_string(crate::support::fixtures::fixture_path("john_doe.json"))
        .unwrap();
    let doc = validator().validate_json(&json).unwrap().into_inner();
    assert_eq!(doc.cv().test_scores()[0].details(), "330");
    assert_eq!(doc.cv().work_experience()[0].company(), "Apple");
}

#[test]
fn test_serialized_document_revalidates_to_itself() {
    let validator = validator();
    let doc = validator
        .validate_str(&load_fixture("john_doe"))
        .unwrap()
        .into_inner();

    let yaml = serde_yaml::to_string(&doc).unwrap();
    // derived fields are part of the output
    assert!(yaml.contains("date_and_location_strings"));
    assert!(yaml.contains("connections"));

    let again = validator.validate_str(&yaml).unwrap();
    assert_eq!(again.document, doc);
    assert!(again.warnings.is_empty());
}
