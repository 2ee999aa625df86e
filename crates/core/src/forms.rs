//! Field-level validation shared by every public form submission.
//!
//! Each function returns `Err(message)` naming the offending field so the API
//! layer can surface it as a `VALIDATION_ERROR` without further formatting.

use validator::ValidateEmail;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of short text fields (names, phone numbers, schedules).
pub const MAX_SHORT_TEXT_LENGTH: usize = 200;

/// Maximum length of free-form text (prayer requests, questions, notes).
pub const MAX_LONG_TEXT_LENGTH: usize = 5_000;

/// Maximum length of an email address (RFC 5321 path limit).
pub const MAX_EMAIL_LENGTH: usize = 254;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// A required field must contain at least one non-whitespace character and
/// stay within `max_len` characters.
pub fn validate_required(field: &str, value: &str, max_len: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    validate_length(field, value, max_len)
}

/// An optional field is accepted when absent; when present it obeys the
/// same length limit as a required one but may be blank.
pub fn validate_optional(field: &str, value: Option<&str>, max_len: usize) -> Result<(), String> {
    match value {
        Some(v) => validate_length(field, v, max_len),
        None => Ok(()),
    }
}

fn validate_length(field: &str, value: &str, max_len: usize) -> Result<(), String> {
    if value.chars().count() > max_len {
        return Err(format!(
            "{field} exceeds maximum length of {max_len} characters"
        ));
    }
    Ok(())
}

/// Validate a required email address.
pub fn validate_email(field: &str, value: &str) -> Result<(), String> {
    validate_required(field, value, MAX_EMAIL_LENGTH)?;
    if !value.trim().validate_email() {
        return Err(format!("{field} must be a valid email address"));
    }
    Ok(())
}

/// Validate an optional email address. Blank strings count as absent.
pub fn validate_optional_email(field: &str, value: Option<&str>) -> Result<(), String> {
    match value {
        Some(v) if !v.trim().is_empty() => validate_email(field, v),
        _ => Ok(()),
    }
}

/// A non-empty list in which every entry is itself a valid required value.
pub fn validate_non_empty_list(field: &str, values: &[String]) -> Result<(), String> {
    if values.is_empty() {
        return Err(format!("{field} must contain at least one entry"));
    }
    for value in values {
        validate_required(field, value, MAX_SHORT_TEXT_LENGTH)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_required ---------------------------------------------------

    #[test]
    fn required_accepts_text() {
        assert!(validate_required("name", "Ruth", MAX_SHORT_TEXT_LENGTH).is_ok());
    }

    #[test]
    fn required_rejects_blank() {
        let err = validate_required("name", "   ", MAX_SHORT_TEXT_LENGTH).unwrap_err();
        assert_eq!(err, "name is required");
        assert!(validate_required("name", "", MAX_SHORT_TEXT_LENGTH).is_err());
    }

    #[test]
    fn required_rejects_overlong() {
        let long = "a".repeat(MAX_SHORT_TEXT_LENGTH + 1);
        let err = validate_required("name", &long, MAX_SHORT_TEXT_LENGTH).unwrap_err();
        assert!(err.contains("maximum length"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let accented = "é".repeat(MAX_SHORT_TEXT_LENGTH);
        assert!(validate_required("name", &accented, MAX_SHORT_TEXT_LENGTH).is_ok());
    }

    // -- validate_optional ---------------------------------------------------

    #[test]
    fn optional_accepts_none_and_blank() {
        assert!(validate_optional("notes", None, MAX_LONG_TEXT_LENGTH).is_ok());
        assert!(validate_optional("notes", Some(""), MAX_LONG_TEXT_LENGTH).is_ok());
    }

    #[test]
    fn optional_rejects_overlong() {
        let long = "a".repeat(MAX_LONG_TEXT_LENGTH + 1);
        assert!(validate_optional("notes", Some(&long), MAX_LONG_TEXT_LENGTH).is_err());
    }

    // -- validate_email ------------------------------------------------------

    #[test]
    fn email_accepts_plain_address() {
        assert!(validate_email("email", "member@highfields.church").is_ok());
    }

    #[test]
    fn email_rejects_garbage() {
        let err = validate_email("email", "not an email").unwrap_err();
        assert!(err.contains("valid email"));
        assert!(validate_email("email", "").is_err());
    }

    #[test]
    fn email_ignores_surrounding_whitespace() {
        assert!(validate_email("email", "  member@highfields.church ").is_ok());
    }

    #[test]
    fn optional_email_skips_absent_and_blank() {
        assert!(validate_optional_email("email", None).is_ok());
        assert!(validate_optional_email("email", Some("  ")).is_ok());
        assert!(validate_optional_email("email", Some("nope")).is_err());
    }

    // -- validate_non_empty_list ---------------------------------------------

    #[test]
    fn list_requires_an_entry() {
        assert!(validate_non_empty_list("ministry_areas", &[]).is_err());
    }

    #[test]
    fn list_rejects_blank_entry() {
        let areas = vec!["Worship".to_string(), " ".to_string()];
        assert!(validate_non_empty_list("ministry_areas", &areas).is_err());
    }

    #[test]
    fn list_accepts_entries() {
        let areas = vec!["Worship".to_string(), "Kids".to_string()];
        assert!(validate_non_empty_list("ministry_areas", &areas).is_ok());
    }
}
