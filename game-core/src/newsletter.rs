use std::sync::LazyLock;

use game_types::User;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is a valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("A valid email is required.")]
    InvalidEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Build the subscriber record for a newsletter signup.
///
/// The email, lowercased, becomes the record id, so signing up twice with the
/// same address (in any casing) replaces the earlier record.
pub fn new_subscriber(email: &str, name: Option<&str>) -> Result<User, RegistrationError> {
    if !is_valid_email(email) {
        return Err(RegistrationError::InvalidEmail);
    }

    let name = name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string);

    Ok(User {
        id: email.to_lowercase(),
        name,
        created_at: chrono::Utc::now().timestamp_millis(),
    })
}
