//! Raw input shapes, as produced by the YAML/JSON parser.
//!
//! Deserializing into these types is the structural check: a missing required
//! field or a value of the wrong shape fails here. Every semantic rule is left
//! to the validation pass that turns them into the typed model.

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

/// Root of a document: `design` and `cv`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub design: RawDesign,
    pub cv: RawCurriculum,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDesign {
    #[serde(default, deserialize_with = "scalar::optional")]
    pub theme: Option<String>,
    /// Theme-specific; its shape is only known once `theme` is.
    #[serde(default)]
    pub options: Option<serde_yaml::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawClassicThemeOptions {
    #[serde(default, deserialize_with = "scalar::optional")]
    pub primary_color: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub page_top_margin: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub page_bottom_margin: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub page_left_margin: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub page_right_margin: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub section_title_top_margin: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub section_title_bottom_margin: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub vertical_margin_between_bullet_points: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub bullet_point_left_margin: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub vertical_margin_between_entries: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub vertical_margin_between_entries_and_highlights: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub date_and_location_width: Option<String>,
}

/// Fields shared by every entry variant.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
    #[serde(default, deserialize_with = "scalar::optional")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional_list")]
    pub highlights: Option<Vec<String>>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSingleLineEntry {
    #[serde(deserialize_with = "scalar::required")]
    pub name: String,
    #[serde(deserialize_with = "scalar::required")]
    pub details: String,
    #[serde(flatten)]
    pub event: RawEvent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawNamedEntry {
    #[serde(deserialize_with = "scalar::required")]
    pub name: String,
    #[serde(flatten)]
    pub event: RawEvent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPositionEntry {
    #[serde(deserialize_with = "scalar::required")]
    pub company: String,
    #[serde(deserialize_with = "scalar::required")]
    pub position: String,
    #[serde(flatten)]
    pub event: RawEvent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawInstitutionEntry {
    #[serde(deserialize_with = "scalar::required")]
    pub institution: String,
    #[serde(deserialize_with = "scalar::required")]
    pub area: String,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub study_type: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub gpa: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub transcript_url: Option<String>,
    #[serde(flatten)]
    pub event: RawEvent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSocialNetwork {
    #[serde(deserialize_with = "scalar::required")]
    pub network: String,
    #[serde(deserialize_with = "scalar::required")]
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCurriculum {
    #[serde(deserialize_with = "scalar::required")]
    pub name: String,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    pub location: Option<String>,
    #[serde(default)]
    pub social_networks: Option<Vec<RawSocialNetwork>>,
    #[serde(default)]
    pub education: Option<Vec<RawInstitutionEntry>>,
    #[serde(default)]
    pub work_experience: Option<Vec<RawPositionEntry>>,
    #[serde(default)]
    pub academic_projects: Option<Vec<RawNamedEntry>>,
    #[serde(default)]
    pub personal_projects: Option<Vec<RawNamedEntry>>,
    #[serde(default)]
    pub certificates: Option<Vec<RawNamedEntry>>,
    #[serde(default)]
    pub extracurricular_activities: Option<Vec<RawPositionEntry>>,
    #[serde(default)]
    pub test_scores: Option<Vec<RawSingleLineEntry>>,
    #[serde(default)]
    pub skills: Option<Vec<RawSingleLineEntry>>,
}

/// Text fields that also accept YAML/JSON numbers and booleans.
///
/// `gpa: 3.9` or `date: 2021` arrive as numbers; they are kept as their
/// textual form.
pub mod scalar {
    use super::*;

    struct Scalar(String);

    struct ScalarVisitor;

    impl<'de> Visitor<'de> for ScalarVisitor {
        type Value = Scalar;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Scalar, E> {
            Ok(Scalar(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Scalar, E> {
            Ok(Scalar(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Scalar, E> {
            Ok(Scalar(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Scalar, E> {
            Ok(Scalar(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Scalar, E> {
            Ok(Scalar(v.to_string()))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Scalar, E> {
            Ok(Scalar(v.to_string()))
        }
    }

    impl<'de> Deserialize<'de> for Scalar {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(ScalarVisitor)
        }
    }

    pub fn required<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Scalar::deserialize(deserializer).map(|s| s.0)
    }

    pub fn optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<Scalar> = Deserialize::deserialize(deserializer)?;
        Ok(value.map(|s| s.0))
    }

    pub fn optional_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<Vec<Scalar>> = Deserialize::deserialize(deserializer)?;
        Ok(value.map(|items| items.into_iter().map(|s| s.0).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_become_text() {
        let raw: RawInstitutionEntry = serde_yaml::from_str(
            "institution: MIT\narea: Physics\ngpa: 3.9\ndate: 2021\n",
        )
        .unwrap();
        assert_eq!(raw.gpa.as_deref(), Some("3.9"));
        assert_eq!(raw.event.date.as_deref(), Some("2021"));
    }

    #[test]
    fn test_unquoted_dates_stay_strings() {
        let raw: RawEvent =
            serde_yaml::from_str("start_date: 2020-09-01\nend_date: present\n").unwrap();
        assert_eq!(raw.start_date.as_deref(), Some("2020-09-01"));
        assert_eq!(raw.end_date.as_deref(), Some("present"));
    }

    #[test]
    fn test_missing_required_field_is_structural() {
        let err = serde_yaml::from_str::<RawPositionEntry>("company: ACME\n").unwrap_err();
        assert!(err.to_string().contains("position"));
    }

    #[test]
    fn test_list_where_text_expected_is_structural() {
        let err = serde_yaml::from_str::<RawNamedEntry>("name: [a, b]\n").unwrap_err();
        assert!(err.to_string().contains("string or number"));
    }

    #[test]
    fn test_highlights_must_be_a_list() {
        assert!(serde_yaml::from_str::<RawEvent>("highlights: just one line\n").is_err());
    }

    #[test]
    fn test_null_optional_is_absent() {
        let raw: RawEvent = serde_yaml::from_str("url: ~\nlocation: null\n").unwrap();
        assert!(raw.url.is_none());
        assert!(raw.location.is_none());
    }
}
