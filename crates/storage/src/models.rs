use chrono::NaiveDateTime;
use domain::Comment;
use sqlx::FromRow;

#[derive(FromRow)]
pub struct SqlComment {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<SqlComment> for Comment {
    fn from(sql: SqlComment) -> Self {
        Comment {
            id: sql.id,
            post_id: sql.post_id,
            user_id: sql.user_id,
            content: sql.content,
            created_at: sql.created_at,
            updated_at: sql.updated_at,
        }
    }
}
