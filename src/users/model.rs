use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Identity record.
///
/// `password` holds plaintext only transiently between the signin boundary
/// and the hasher; at rest it is always a bcrypt digest. It is never
/// serialized into a response, even when populated.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    #[sqlx(default)]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl User {
    /// In-flight record for registration. The id and timestamps are
    /// placeholders; the store assigns the real ones on insert.
    pub fn new(email: String, password: String, first_name: String, last_name: String) -> Self {
        Self {
            id: Uuid::nil(),
            email,
            password,
            first_name,
            last_name,
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        }
    }
}

/// Login projection: just enough to compare a password and name a subject.
#[derive(Debug, Clone, FromRow)]
pub struct Credentials {
    pub id: Uuid,
    pub password: String,
}
