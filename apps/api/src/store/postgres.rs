use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::PgPool;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::cache::ReferenceKind;
use crate::errors::AppError;
use crate::models::posting::JobPosting;
use crate::models::profile::Profile;
use crate::models::user::UserAccount;
use crate::store::{FeedFilter, JobBoardStore};

/// Postgres-backed store. Rows are read as `to_jsonb(row)` so the records reach
/// the ranking and completeness code in the same loose shape the product's
/// backend hands out (boolean or integer flags, nullable columns).
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobBoardStore for PgStore {
    async fn list_postings(&self, filter: &FeedFilter) -> Result<Vec<JobPosting>, AppError> {
        let rows: Vec<Value> = sqlx::query_scalar(
            r#"
            SELECT to_jsonb(p)
            FROM job_postings p
            WHERE p.is_active
              AND ($1::text IS NULL OR p.city = $1)
              AND ($2::text IS NULL OR p.state = $2)
            "#,
        )
        .bind(filter.city.as_deref())
        .bind(filter.state.as_deref())
        .fetch_all(&self.pool)
        .await?;

        let fetched = rows.len();
        let postings: Vec<JobPosting> = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.get("id").cloned().unwrap_or(Value::Null);
                match serde_json::from_value::<JobPosting>(row) {
                    Ok(posting) => Some(posting),
                    Err(e) => {
                        warn!("Skipping job_postings row {id} with unexpected shape: {e}");
                        None
                    }
                }
            })
            .collect();

        debug!("Loaded {} of {fetched} postings for {filter:?}", postings.len());
        Ok(postings)
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, AppError> {
        let row: Option<Value> =
            sqlx::query_scalar("SELECT to_jsonb(p) FROM profiles p WHERE p.user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(|value| decode(value, "profiles", user_id)).transpose()
    }

    async fn get_account(&self, user_id: Uuid) -> Result<Option<UserAccount>, AppError> {
        let row: Option<Value> =
            sqlx::query_scalar("SELECT to_jsonb(u) FROM users u WHERE u.id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(|value| decode(value, "users", user_id)).transpose()
    }

    async fn list_reference(&self, kind: ReferenceKind) -> Result<Vec<String>, AppError> {
        let query = match kind {
            ReferenceKind::States => "SELECT code FROM states ORDER BY code",
            ReferenceKind::CnhCategories => "SELECT code FROM cnh_categories ORDER BY code",
            ReferenceKind::Skills => "SELECT name FROM skills ORDER BY name",
        };

        let values: Vec<String> = sqlx::query_scalar(query).fetch_all(&self.pool).await?;
        Ok(values)
    }
}

fn decode<T: DeserializeOwned>(value: Value, table: &str, id: Uuid) -> Result<T, AppError> {
    serde_json::from_value(value)
        .with_context(|| format!("{table} row {id} does not match the expected shape"))
        .map_err(AppError::Internal)
}
