use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::pld::BlacklistValidator;
use crate::users::model::User;
use crate::users::store::IdentityStore;

/// Orchestrates user creation (blacklist check, then persist) and profile
/// fetch.
pub struct UserService {
    store: Arc<dyn IdentityStore>,
    validator: Arc<dyn BlacklistValidator>,
}

impl UserService {
    pub fn new(store: Arc<dyn IdentityStore>, validator: Arc<dyn BlacklistValidator>) -> Self {
        Self { store, validator }
    }

    /// The blacklist verdict gates the store write: a disallowed candidate
    /// never reaches `create`.
    pub async fn create_user(&self, user: &User) -> Result<(), AppError> {
        if !self.validator.is_allowed(user).await? {
            warn!(email = %user.email, "candidate rejected by blacklist");
            return Err(AppError::Blacklisted);
        }
        self.store.create(user).await
    }

    pub async fn get_user(&self, id: Uuid) -> Result<User, AppError> {
        self.store.find_by_id(id).await
    }
}
