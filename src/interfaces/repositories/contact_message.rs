use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    entities::contact_message::{ContactMessage, NewContactMessage},
    errors::AppError,
    repositories::sqlx_repo::SqlxContactMessageRepo,
};

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn create_contact_message(&self, msg: &NewContactMessage) -> Result<ContactMessage, AppError>;
    /// Newest first.
    async fn list_contact_messages(&self, unread_only: bool) -> Result<Vec<ContactMessage>, AppError>;
    async fn set_contact_message_read(&self, id: i64, read: bool) -> Result<ContactMessage, AppError>;
}

impl SqlxContactMessageRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxContactMessageRepo { pool }
    }
}

#[async_trait]
impl ContactMessageRepository for SqlxContactMessageRepo {
    async fn create_contact_message(&self, msg: &NewContactMessage) -> Result<ContactMessage, AppError> {
        let message = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING *
            "#
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    async fn list_contact_messages(&self, unread_only: bool) -> Result<Vec<ContactMessage>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM contact_messages");

        if unread_only {
            builder.push(" WHERE read = FALSE");
        }

        builder.push(" ORDER BY created_at DESC, id DESC");

        let messages = builder
            .build_query_as::<ContactMessage>()
            .fetch_all(&self.pool)
            .await?;

        Ok(messages)
    }

    async fn set_contact_message_read(&self, id: i64, read: bool) -> Result<ContactMessage, AppError> {
        sqlx::query_as::<_, ContactMessage>(
            "UPDATE contact_messages SET read = $1 WHERE id = $2 RETURNING *"
        )
        .bind(read)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::NotFound("Contact message not found".into()),
            e => e.into(),
        })
    }
}
