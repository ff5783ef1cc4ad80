use crate::error::CoreError;
use regex::Regex;
use std::sync::LazyLock;

/// Client-side only. The server never enforces a password policy.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

pub fn registration(name: &str, email: &str, password: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(CoreError::Validation(
            "name, email and password are required".into(),
        ));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(CoreError::Validation("email address is not valid".into()));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

pub fn login_input(email: &str, password: &str) -> Result<(), CoreError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(CoreError::Validation("email and password are required".into()));
    }
    Ok(())
}

pub fn listing_draft(title: &str, description: &str, price: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() || description.trim().is_empty() || price.trim().is_empty() {
        return Err(CoreError::Validation(
            "title, description and price are required".into(),
        ));
    }
    Ok(())
}
