use crate::Db;
use chrono::Utc;
use sqlx::Row;

impl Db {
    pub async fn create_post(&self, id: &str, user_id: &str, title: &str) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, user_id, title, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(title)
        .bind(Utc::now().naive_utc())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn post_owner(&self, id: &str) -> anyhow::Result<Option<String>> {
        let row = sqlx::query("SELECT user_id FROM posts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get(0)))
    }
}
