use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::users::model::{Credentials, User};

/// Persistence capability for identity records.
///
/// "Not found" is a distinct outcome from a generic store failure so that
/// login can fold unknown emails into the opaque authentication error.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Persist a new record. The id and creation timestamps are assigned
    /// here, not by the caller.
    async fn create(&self, user: &User) -> Result<(), AppError>;

    /// Project only the id and password hash for a login check.
    async fn find_credentials_by_email(&self, email: &str) -> Result<Credentials, AppError>;

    /// Fetch a profile. The password column is never selected.
    async fn find_by_id(&self, id: Uuid) -> Result<User, AppError>;
}

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityStore for PgStore {
    async fn create(&self, user: &User) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO users (email, password, first_name, last_name)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_credentials_by_email(&self, email: &str) -> Result<Credentials, AppError> {
        sqlx::query_as::<_, Credentials>(
            r#"
            SELECT id, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, first_name, last_name, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound)
    }
}
