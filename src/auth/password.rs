use bcrypt::DEFAULT_COST;
use tracing::error;

use crate::errors::AppError;

/// bcrypt ignores everything past 72 bytes; longer inputs are rejected
/// outright rather than silently truncated.
pub const MAX_PASSWORD_BYTES: usize = 72;

pub fn hash_password(plain: &str) -> Result<String, AppError> {
    if plain.len() > MAX_PASSWORD_BYTES {
        return Err(AppError::Encoding(format!(
            "password longer than {MAX_PASSWORD_BYTES} bytes"
        )));
    }
    bcrypt::hash(plain, DEFAULT_COST).map_err(|e| {
        error!(error = %e, "bcrypt hash error");
        AppError::Encoding(e.to_string())
    })
}

/// `Ok(false)` means the password does not match; `Err` means the stored
/// blob is not a bcrypt hash at all. Callers fold both into the same
/// client-visible failure.
pub fn verify_password(plain: &str, stored: &str) -> Result<bool, AppError> {
    bcrypt::verify(plain, stored).map_err(|e| {
        error!(error = %e, "bcrypt verify error");
        AppError::Encoding(e.to_string())
    })
}
