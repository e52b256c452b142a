//! Local input checks performed before any network call.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum password length accepted on sign-up.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Input rejected before it reaches a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Enter a message first.")]
    EmptyMessage,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password should be at least 6 characters")]
    PasswordTooShort,
}

/// Accept a generation message only if it has non-whitespace content.
///
/// # Errors
///
/// Returns `EmptyMessage` for empty or whitespace-only input.
pub fn validate_message(message: &str) -> Result<(), ValidationError> {
    if message.trim().is_empty() {
        return Err(ValidationError::EmptyMessage);
    }
    Ok(())
}

/// Check a sign-up password pair. Mismatch is reported before length.
///
/// # Errors
///
/// Returns `PasswordMismatch` or `PasswordTooShort`.
pub fn validate_signup_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}
