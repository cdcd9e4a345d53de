use crate::{models::SqlComment, Db};
use async_trait::async_trait;
use chrono::Utc;
use domain::{Comment, CommentListing, CommentStore, CommentUpdate, NewComment, StoreError};
use sqlx::Row;

const SELECT_COMMENT: &str = r#"
    SELECT id, post_id, user_id, content, created_at, updated_at
    FROM comments
"#;

pub(crate) fn persistence(e: sqlx::Error) -> StoreError {
    StoreError::Persistence(e.to_string())
}

fn new_comment_id() -> String {
    format!("{:032x}", rand::random::<u128>())
}

#[async_trait]
impl CommentStore for Db {
    async fn create(&self, c: NewComment) -> Result<Comment, StoreError> {
        let comment = Comment {
            id: new_comment_id(),
            post_id: c.post_id,
            user_id: c.user_id,
            content: c.content,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        };

        sqlx::query(
            r#"
            INSERT INTO comments (id, post_id, user_id, content, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&comment.id)
        .bind(&comment.post_id)
        .bind(&comment.user_id)
        .bind(&comment.content)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(persistence)?;

        Ok(comment)
    }

    async fn get(&self, id: &str) -> Result<Comment, StoreError> {
        let row = sqlx::query_as::<_, SqlComment>(&format!("{SELECT_COMMENT} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(persistence)?;

        row.map(Into::into)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn update(&self, id: &str, update: CommentUpdate) -> Result<Comment, StoreError> {
        let mut tx = self.pool.begin().await.map_err(persistence)?;

        let result = sqlx::query(
            r#"
            UPDATE comments
            SET content = ?, user_id = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&update.content)
        .bind(&update.user_id)
        .bind(Utc::now().naive_utc())
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(persistence)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }

        let row = sqlx::query_as::<_, SqlComment>(&format!("{SELECT_COMMENT} WHERE id = ?"))
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(persistence)?;

        tx.commit().await.map_err(persistence)?;
        Ok(row.into())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(persistence)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CommentListing for Db {
    async fn list_for_post(
        &self,
        post_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Comment>, i64), StoreError> {
        let rows = sqlx::query_as::<_, SqlComment>(&format!(
            "{SELECT_COMMENT} WHERE post_id = ? ORDER BY created_at ASC, id ASC LIMIT ? OFFSET ?"
        ))
        .bind(post_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(persistence)?;

        let count_row = sqlx::query("SELECT COUNT(*) AS count FROM comments WHERE post_id = ?")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await
            .map_err(persistence)?;

        let comments = rows.into_iter().map(Into::into).collect();
        Ok((comments, count_row.get::<i64, _>("count")))
    }
}

impl Db {
    pub async fn comment_owner(&self, id: &str) -> anyhow::Result<Option<String>> {
        let row = sqlx::query("SELECT user_id FROM comments WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get(0)))
    }
}
