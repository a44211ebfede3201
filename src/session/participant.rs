//! Participant name validation.

use crate::core::ValidationError;

/// Trim raw input into a participant name.
///
/// Duplicates are allowed; only empty or whitespace-only input is rejected.
///
/// ```
/// use who_pays::session::parse_participant_name;
///
/// assert_eq!(parse_participant_name("  Ann ").unwrap(), "Ann");
/// assert!(parse_participant_name("   ").is_err());
/// ```
pub fn parse_participant_name(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}
