use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub in_progress: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Candidate profile snapshot.
///
/// `experiences` and `cnh_types` are tri-state: the outer `Option` records
/// whether the key was sent at all, the inner one whether it was `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub education: Option<Vec<EducationEntry>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub experiences: Option<Option<Vec<ExperienceEntry>>>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub cnh_types: Option<Option<Vec<String>>>,
    #[serde(default)]
    pub is_first_job: Option<bool>,
    #[serde(default)]
    pub professional_summary: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Maps a key that is present (even as `null`) to `Some(..)`; absent keys
/// fall back to the field default of `None`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Reads `YYYY-MM-DD`; null, blank or unparseable text becomes `None` so the
/// completeness check reports the field instead of the whole record failing.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()))
}
