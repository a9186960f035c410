use serde::{Deserialize, Serialize};

use crate::models::profile::Profile;

/// Profile fields the onboarding flow collects, in the order they are asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    FullName,
    City,
    State,
    BirthDate,
    Education,
    Experiences,
    Skills,
    CnhTypes,
    IsFirstJob,
    ProfessionalSummary,
    Address,
    /// No profile record exists at all.
    Profile,
}

impl ProfileField {
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileField::FullName => "full_name",
            ProfileField::City => "city",
            ProfileField::State => "state",
            ProfileField::BirthDate => "birth_date",
            ProfileField::Education => "education",
            ProfileField::Experiences => "experiences",
            ProfileField::Skills => "skills",
            ProfileField::CnhTypes => "cnh_types",
            ProfileField::IsFirstJob => "is_first_job",
            ProfileField::ProfessionalSummary => "professional_summary",
            ProfileField::Address => "address",
            ProfileField::Profile => "profile",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletenessReport {
    pub complete: bool,
    pub missing_fields: Vec<ProfileField>,
    /// The single step the onboarding flow should present next.
    pub next_field: Option<ProfileField>,
}

pub fn is_complete(profile: Option<&Profile>) -> bool {
    missing_fields(profile).is_empty()
}

/// Every failing field, in collection order. A missing profile yields only
/// [`ProfileField::Profile`].
pub fn missing_fields(profile: Option<&Profile>) -> Vec<ProfileField> {
    let Some(p) = profile else {
        return vec![ProfileField::Profile];
    };

    let checks = [
        (ProfileField::FullName, filled(&p.full_name)),
        (ProfileField::City, filled(&p.city)),
        (ProfileField::State, filled(&p.state)),
        (ProfileField::BirthDate, p.birth_date.is_some()),
        (ProfileField::Education, non_empty(&p.education)),
        (ProfileField::Experiences, experiences_ok(p)),
        (ProfileField::Skills, non_empty(&p.skills)),
        // Presence is what counts; `null` and `[]` both mean "no license".
        (ProfileField::CnhTypes, p.cnh_types.is_some()),
        (ProfileField::IsFirstJob, p.is_first_job.is_some()),
        (ProfileField::ProfessionalSummary, filled(&p.professional_summary)),
        (ProfileField::Address, filled(&p.address)),
    ];

    checks
        .into_iter()
        .filter(|(_, ok)| !ok)
        .map(|(field, _)| field)
        .collect()
}

pub fn next_missing_field(profile: Option<&Profile>) -> Option<ProfileField> {
    missing_fields(profile).into_iter().next()
}

pub fn completeness_report(profile: Option<&Profile>) -> CompletenessReport {
    let missing_fields = missing_fields(profile);
    CompletenessReport {
        complete: missing_fields.is_empty(),
        next_field: missing_fields.first().copied(),
        missing_fields,
    }
}

fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

fn non_empty<T>(list: &Option<Vec<T>>) -> bool {
    list.as_ref().is_some_and(|items| !items.is_empty())
}

/// The key must be present; an empty (or null) list only counts for first-job candidates.
fn experiences_ok(p: &Profile) -> bool {
    match &p.experiences {
        None => false,
        Some(Some(items)) if !items.is_empty() => true,
        Some(_) => p.is_first_job == Some(true),
    }
}
