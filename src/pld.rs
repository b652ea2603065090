use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::users::model::User;

/// Verdict capability backed by the external Person-Lookup-Data service.
#[async_trait]
pub trait BlacklistValidator: Send + Sync {
    /// Whether the candidate may be registered. Every call goes to the live
    /// service; verdicts are not cached and failed calls are not retried.
    async fn is_allowed(&self, user: &User) -> Result<bool, AppError>;
}

/// Projection submitted to the PLD service. The password never leaves the
/// process.
#[derive(Debug, Serialize)]
struct Candidate<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
}

#[derive(Debug, Deserialize)]
struct Verdict {
    is_in_blacklist: bool,
}

pub struct PldClient {
    client: reqwest::Client,
    base_url: String,
}

impl PldClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl BlacklistValidator for PldClient {
    async fn is_allowed(&self, user: &User) -> Result<bool, AppError> {
        let candidate = Candidate {
            first_name: &user.first_name,
            last_name: &user.last_name,
            email: &user.email,
        };

        let response = self
            .client
            .post(format!("{}/check-blacklist", self.base_url))
            .json(&candidate)
            .send()
            .await?
            .error_for_status()?;

        let verdict: Verdict = response.json().await?;
        debug!(email = %user.email, in_blacklist = verdict.is_in_blacklist, "pld verdict");
        Ok(!verdict.is_in_blacklist)
    }
}
