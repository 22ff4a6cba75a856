//! Field-level request validation.
//!
//! Handlers collect failures into a [`FieldErrors`] map and surface them
//! as a single 422 response listing every offending field, instead of
//! failing on the first bad field.

use std::collections::BTreeMap;

use serde::Serialize;

/// Maximum length of a memo title and of a user name / email.
pub const MAX_TITLE_LEN: usize = 255;

/// Minimum password length for registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Accumulated validation failures, keyed by request field name.
#[derive(Debug, Default, Clone, Serialize)]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure message for `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Title is optional but must not exceed [`MAX_TITLE_LEN`] characters.
pub fn validate_title(title: Option<&str>) -> Result<(), String> {
    match title {
        Some(t) if t.chars().count() > MAX_TITLE_LEN => Err(format!(
            "The title may not be greater than {MAX_TITLE_LEN} characters"
        )),
        _ => Ok(()),
    }
}

/// Content is required and must not be empty or whitespace-only.
pub fn validate_content(content: &str) -> Result<(), String> {
    if content.trim().is_empty() {
        return Err("The content field is required".to_string());
    }
    Ok(())
}

/// User name is required and bounded.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("The name field is required".to_string());
    }
    if name.chars().count() > MAX_TITLE_LEN {
        return Err(format!(
            "The name may not be greater than {MAX_TITLE_LEN} characters"
        ));
    }
    Ok(())
}

/// Minimal email shape check: non-empty, bounded, contains a `@` with
/// text on both sides. Deliverability is not our problem.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("The email field is required".to_string());
    }
    if email.chars().count() > MAX_TITLE_LEN {
        return Err(format!(
            "The email may not be greater than {MAX_TITLE_LEN} characters"
        ));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err("The email must be a valid email address".to_string()),
    }
}

/// Password must meet the minimum length; confirmation is checked separately.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "The password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    Ok(())
}
