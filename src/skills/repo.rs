use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub level: Option<i32>,
    pub icon: Option<String>,
    pub priority: Option<String>,
    pub created_at: OffsetDateTime,
}

impl Skill {
    pub async fn create(
        db: &PgPool,
        name: &str,
        level: Option<i32>,
        icon: Option<&str>,
        priority: Option<&str>,
    ) -> anyhow::Result<Skill> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (name, level, icon, priority)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, level, icon, priority, created_at
            "#,
        )
        .bind(name)
        .bind(level)
        .bind(icon)
        .bind(priority)
        .fetch_one(db)
        .await?;
        Ok(skill)
    }

    pub async fn list(db: &PgPool, priority: Option<&str>) -> anyhow::Result<Vec<Skill>> {
        let rows = match priority {
            Some(p) => {
                sqlx::query_as::<_, Skill>(
                    r#"
                    SELECT id, name, level, icon, priority, created_at
                    FROM skills
                    WHERE priority = $1
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(p)
                .fetch_all(db)
                .await?
            }
            None => {
                sqlx::query_as::<_, Skill>(
                    r#"
                    SELECT id, name, level, icon, priority, created_at
                    FROM skills
                    ORDER BY created_at DESC
                    "#,
                )
                .fetch_all(db)
                .await?
            }
        };
        Ok(rows)
    }

    /// Returns false when no row matched the id.
    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
