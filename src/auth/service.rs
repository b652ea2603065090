use std::sync::Arc;

use tracing::{error, warn};
use uuid::Uuid;

use crate::auth::password;
use crate::errors::AppError;
use crate::users::model::User;
use crate::users::service::UserService;
use crate::users::store::IdentityStore;

/// Orchestrates registration (hash, then delegate to the user workflow) and
/// login (credential lookup plus hash comparison).
pub struct AuthService {
    store: Arc<dyn IdentityStore>,
    users: Arc<UserService>,
}

impl AuthService {
    pub fn new(store: Arc<dyn IdentityStore>, users: Arc<UserService>) -> Self {
        Self { store, users }
    }

    /// Replaces the in-flight plaintext with its hash before anything else
    /// runs; a hashing failure aborts registration before the blacklist call
    /// or the store write.
    pub async fn signin(&self, mut user: User) -> Result<(), AppError> {
        user.password = password::hash_password(&user.password)?;
        self.users.create_user(&user).await
    }

    /// Unknown email, wrong password and an unreadable stored hash all
    /// collapse into the same opaque failure; only the logs keep the
    /// distinction.
    pub async fn login(&self, email: &str, password: &str) -> Result<Uuid, AppError> {
        let creds = match self.store.find_credentials_by_email(email).await {
            Ok(creds) => creds,
            Err(AppError::NotFound) => {
                warn!(email, "login attempt for unknown email");
                return Err(AppError::Authentication);
            }
            Err(err) => return Err(err),
        };

        match password::verify_password(password, &creds.password) {
            Ok(true) => Ok(creds.id),
            Ok(false) => {
                warn!(email, "login password mismatch");
                Err(AppError::Authentication)
            }
            Err(err) => {
                error!(error = %err, email, "stored credential hash is unreadable");
                Err(AppError::Authentication)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pld::doubles::ScriptedValidator;
    use crate::users::store::memory::MemoryStore;

    fn auth(store: &Arc<MemoryStore>, validator: &Arc<ScriptedValidator>) -> AuthService {
        let users = Arc::new(UserService::new(store.clone(), validator.clone()));
        AuthService::new(store.clone(), users)
    }

    fn candidate(password: &str) -> User {
        User::new("a@b.com".into(), password.into(), "A".into(), "B".into())
    }

    #[tokio::test]
    async fn signin_stores_a_hash_and_not_the_plaintext() {
        let store = Arc::new(MemoryStore::empty());
        let validator = Arc::new(ScriptedValidator::allowing());

        auth(&store, &validator).signin(candidate("12345678")).await.unwrap();

        let users = store.users.lock().unwrap();
        assert_eq!(users.len(), 1);
        assert_ne!(users[0].password, "12345678");
        assert!(users[0].password.starts_with("$2"));
        assert!(password::verify_password("12345678", &users[0].password).unwrap());
    }

    #[tokio::test]
    async fn signin_aborts_before_validator_and_store_when_hashing_fails() {
        let store = Arc::new(MemoryStore::empty());
        let validator = Arc::new(ScriptedValidator::allowing());

        let oversized = "a".repeat(100);
        let err = auth(&store, &validator).signin(candidate(&oversized)).await.unwrap_err();

        assert!(matches!(err, AppError::Encoding(_)));
        assert_eq!(validator.calls(), 0);
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn signin_surfaces_blacklist_rejection() {
        let store = Arc::new(MemoryStore::empty());
        let validator = Arc::new(ScriptedValidator::denying());

        let err = auth(&store, &validator).signin(candidate("12345678")).await.unwrap_err();

        assert!(matches!(err, AppError::Blacklisted));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn signin_surfaces_store_failures() {
        let store = Arc::new(MemoryStore::failing_create());
        let validator = Arc::new(ScriptedValidator::allowing());

        let err = auth(&store, &validator).signin(candidate("12345678")).await.unwrap_err();

        assert!(matches!(err, AppError::Store(_)));
    }

    #[tokio::test]
    async fn login_returns_the_subject_id_for_valid_credentials() {
        let store = Arc::new(MemoryStore::empty());
        let validator = Arc::new(ScriptedValidator::allowing());
        let service = auth(&store, &validator);

        service.signin(candidate("12345678")).await.unwrap();
        let stored_id = store.users.lock().unwrap()[0].id;

        let subject = service.login("a@b.com", "12345678").await.unwrap();
        assert_eq!(subject, stored_id);
    }

    #[tokio::test]
    async fn login_collapses_unknown_email_and_wrong_password() {
        let store = Arc::new(MemoryStore::empty());
        let validator = Arc::new(ScriptedValidator::allowing());
        let service = auth(&store, &validator);

        service.signin(candidate("12345678")).await.unwrap();

        let unknown = service.login("unknown@x.com", "anything").await.unwrap_err();
        let mismatch = service.login("a@b.com", "wrongpass").await.unwrap_err();

        assert!(matches!(unknown, AppError::Authentication));
        assert!(matches!(mismatch, AppError::Authentication));
    }

    #[tokio::test]
    async fn login_treats_an_unreadable_stored_hash_as_authentication_failure() {
        let mut seeded = candidate("ignored");
        seeded.id = Uuid::new_v4();
        seeded.password = "not-a-bcrypt-hash".into();
        let store = Arc::new(MemoryStore::seeded(seeded));
        let validator = Arc::new(ScriptedValidator::allowing());

        let err = auth(&store, &validator).login("a@b.com", "12345678").await.unwrap_err();
        assert!(matches!(err, AppError::Authentication));
    }
}
