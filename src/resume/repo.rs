use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// One section of the resume (education, experience, etc). The API never
/// writes this table; rows are seeded directly in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeEntry {
    pub id: Uuid,
    pub category: String,
    pub title: String,
    pub organization: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
    pub created_at: OffsetDateTime,
}

impl ResumeEntry {
    pub async fn list(db: &PgPool) -> anyhow::Result<Vec<ResumeEntry>> {
        let rows = sqlx::query_as::<_, ResumeEntry>(
            r#"
            SELECT id, category, title, organization, period, description, created_at
            FROM resume_entries
            ORDER BY category, created_at DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
