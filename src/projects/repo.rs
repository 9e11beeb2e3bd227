use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    pub priority: Option<String>,
    pub created_at: OffsetDateTime,
}

pub struct NewProject<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
    pub live_url: Option<&'a str>,
    pub repo_url: Option<&'a str>,
    pub priority: Option<&'a str>,
}

impl Project {
    pub async fn create(db: &PgPool, new: NewProject<'_>) -> anyhow::Result<Project> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (title, description, image, live_url, repo_url, priority)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, image, live_url, repo_url, priority, created_at
            "#,
        )
        .bind(new.title)
        .bind(new.description)
        .bind(new.image)
        .bind(new.live_url)
        .bind(new.repo_url)
        .bind(new.priority)
        .fetch_one(db)
        .await?;
        Ok(project)
    }

    pub async fn list(db: &PgPool, priority: Option<&str>) -> anyhow::Result<Vec<Project>> {
        let rows = match priority {
            Some(p) => {
                sqlx::query_as::<_, Project>(
                    r#"
                    SELECT id, title, description, image, live_url, repo_url, priority, created_at
                    FROM projects
                    WHERE priority = $1
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(p)
                .fetch_all(db)
                .await?
            }
            None => {
                sqlx::query_as::<_, Project>(
                    r#"
                    SELECT id, title, description, image, live_url, repo_url, priority, created_at
                    FROM projects
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
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
