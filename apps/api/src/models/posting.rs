use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Premium indicator as the data store hands it over: some tables carry a
/// boolean column, older ones an integer flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PremiumFlag {
    Bool(bool),
    Int(i64),
}

impl PremiumFlag {
    /// `true` and any nonzero integer mean premium.
    pub fn is_set(self) -> bool {
        match self {
            PremiumFlag::Bool(b) => b,
            PremiumFlag::Int(n) => n != 0,
        }
    }
}

/// A job posting snapshot read from the data store.
///
/// Only the ranking inputs are typed; every other column rides along in
/// `extra` so the feed returns records in the shape it received them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    #[serde(default, alias = "likesCount")]
    pub likes_count: Option<i64>,
    /// ISO-8601 publication time, unparsed. `None` when the store sent null
    /// or no value; ranking rejects it.
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, alias = "isPremium")]
    pub is_premium: Option<PremiumFlag>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobPosting {
    pub fn premium(&self) -> bool {
        self.is_premium.map(PremiumFlag::is_set).unwrap_or(false)
    }
}
