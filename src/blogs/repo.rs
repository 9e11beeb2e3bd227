use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub image: Option<String>,
    pub priority: Option<String>,
    pub created_at: OffsetDateTime,
}

pub struct NewBlogPost<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub author: Option<&'a str>,
    pub image: Option<&'a str>,
    pub priority: Option<&'a str>,
}

/// Partial update; None leaves the column untouched.
pub struct BlogPostPatch<'a> {
    pub title: Option<&'a str>,
    pub content: Option<&'a str>,
    pub author: Option<&'a str>,
    pub image: Option<&'a str>,
    pub priority: Option<&'a str>,
}

impl BlogPost {
    pub async fn create(db: &PgPool, new: NewBlogPost<'_>) -> anyhow::Result<BlogPost> {
        let post = sqlx::query_as::<_, BlogPost>(
            r#"
            INSERT INTO blog_posts (title, content, author, image, priority)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, content, author, image, priority, created_at
            "#,
        )
        .bind(new.title)
        .bind(new.content)
        .bind(new.author)
        .bind(new.image)
        .bind(new.priority)
        .fetch_one(db)
        .await?;
        Ok(post)
    }

    pub async fn list(db: &PgPool, priority: Option<&str>) -> anyhow::Result<Vec<BlogPost>> {
        let rows = match priority {
            Some(p) => {
                sqlx::query_as::<_, BlogPost>(
                    r#"
                    SELECT id, title, content, author, image, priority, created_at
                    FROM blog_posts
                    WHERE priority = $1
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(p)
                .fetch_all(db)
                .await?
            }
            None => {
                sqlx::query_as::<_, BlogPost>(
                    r#"
                    SELECT id, title, content, author, image, priority, created_at
                    FROM blog_posts
                    ORDER BY created_at DESC
                    "#,
                )
                .fetch_all(db)
                .await?
            }
        };
        Ok(rows)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<BlogPost>> {
        let post = sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT id, title, content, author, image, priority, created_at
            FROM blog_posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(post)
    }

    /// Returns the updated row, or None when the id does not exist.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        patch: BlogPostPatch<'_>,
    ) -> anyhow::Result<Option<BlogPost>> {
        let post = sqlx::query_as::<_, BlogPost>(
            r#"
            UPDATE blog_posts
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                author = COALESCE($4, author),
                image = COALESCE($5, image),
                priority = COALESCE($6, priority)
            WHERE id = $1
            RETURNING id, title, content, author, image, priority, created_at
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.content)
        .bind(patch.author)
        .bind(patch.image)
        .bind(patch.priority)
        .fetch_optional(db)
        .await?;
        Ok(post)
    }

    /// Returns false when no row matched the id.
    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
