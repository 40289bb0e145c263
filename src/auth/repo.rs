use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String, // stored as-is, not exposed in JSON
    #[serde(skip_serializing)]
    pub session_token: Option<String>, // current session, not exposed in JSON
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, session_token, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Find the user holding the presented session token.
    pub async fn find_by_session_token(db: &PgPool, token: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, session_token, created_at
            FROM users
            WHERE session_token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user with no session token.
    pub async fn create(
        db: &PgPool,
        name: &str,
        email: &str,
        password: &str,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password, session_token, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(password)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Overwrite the user's session token. Concurrent logins race here;
    /// last write wins and the earlier token stops resolving.
    pub async fn set_session_token(db: &PgPool, user_id: Uuid, token: &str) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET session_token = $1
            WHERE id = $2
            "#,
        )
        .bind(token)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(())
    }

    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, session_token, created_at
            FROM users
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(users)
    }
}
