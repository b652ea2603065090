use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::users::model::User;

const MIN_PASSWORD_LEN: usize = 8;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn is_alphabetic(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_alphabetic)
}

fn check_credentials(email: &str, password: &str) -> Result<(), AppError> {
    if !is_valid_email(email) {
        return Err(AppError::Validation("invalid email".into()));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Request body for registration.
#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl SigninRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        check_credentials(&self.email, &self.password)?;
        if !is_alphabetic(&self.first_name) {
            return Err(AppError::Validation("first_name must be alphabetic".into()));
        }
        if !is_alphabetic(&self.last_name) {
            return Err(AppError::Validation("last_name must be alphabetic".into()));
        }
        Ok(())
    }

    pub fn into_user(self) -> User {
        User::new(self.email, self.password, self.first_name, self.last_name)
    }
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        check_credentials(&self.email, &self.password)
    }
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SigninRequest {
        SigninRequest {
            email: "a@b.com".into(),
            password: "12345678".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        }
    }

    #[test]
    fn a_well_formed_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["", "no-at-sign", "a@b", "two@@b.com", "spa ce@b.com"] {
            let mut req = request();
            req.email = email.into();
            assert!(
                matches!(req.validate(), Err(AppError::Validation(_))),
                "accepted {email:?}"
            );
        }
    }

    #[test]
    fn short_passwords_are_rejected() {
        let mut req = request();
        req.password = "1234567".into();
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn non_alphabetic_names_are_rejected() {
        for name in ["", "Ada1", "Ada Lovelace", "x-y"] {
            let mut req = request();
            req.first_name = name.into();
            assert!(
                matches!(req.validate(), Err(AppError::Validation(_))),
                "accepted {name:?}"
            );
        }
    }

    #[test]
    fn login_request_shares_the_credential_checks() {
        let req = LoginRequest {
            email: "a@b.com".into(),
            password: "12345678".into(),
        };
        assert!(req.validate().is_ok());

        let req = LoginRequest {
            email: "bad".into(),
            password: "12345678".into(),
        };
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }
}
