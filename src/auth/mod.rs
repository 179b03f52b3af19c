pub mod jwt;
pub mod middleware;

/// Normalize an email for lookup and storage: trimmed and lowercased.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Longest email the `user.email` column holds.
pub const MAX_EMAIL_LEN: usize = 255;

/// Longest display name the `user.name` column holds.
pub const MAX_NAME_CHARS: usize = 100;

/// Validate email format (basic check for `@` and non-empty parts).
///
/// # Errors
///
/// Returns a descriptive error message if the email is invalid.
pub fn validate_email(email: &str) -> Result<(), String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err("Email is required.".to_string());
    }
    if trimmed.len() > MAX_EMAIL_LEN {
        return Err(format!("Email must be at most {MAX_EMAIL_LEN} characters."));
    }
    let parts: Vec<&str> = trimmed.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() || !parts[1].contains('.') {
        return Err("Invalid email format.".to_string());
    }
    Ok(())
}

/// Display name for an auto-provisioned account: the email's local part,
/// cut to [`MAX_NAME_CHARS`].
#[must_use]
pub fn default_name_for(email: &str) -> String {
    email
        .split('@')
        .next()
        .filter(|local| !local.is_empty())
        .unwrap_or("Demo User")
        .chars()
        .take(MAX_NAME_CHARS)
        .collect()
}
