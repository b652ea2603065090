use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::auth::service::AuthService;
use crate::config::AppConfig;
use crate::pld::{BlacklistValidator, PldClient};
use crate::users::service::UserService;
use crate::users::store::{IdentityStore, PgStore};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub users: Arc<UserService>,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        let store = Arc::new(PgStore::new(db.clone())) as Arc<dyn IdentityStore>;
        let validator = Arc::new(PldClient::new(config.pld_url.clone())) as Arc<dyn BlacklistValidator>;

        Ok(Self::from_parts(db, config, store, validator))
    }

    pub fn from_parts(
        db: PgPool,
        config: Arc<AppConfig>,
        store: Arc<dyn IdentityStore>,
        validator: Arc<dyn BlacklistValidator>,
    ) -> Self {
        let users = Arc::new(UserService::new(store.clone(), validator));
        let auth = Arc::new(AuthService::new(store, users.clone()));
        Self {
            db,
            config,
            users,
            auth,
        }
    }
}
