//! Donation intent constants and validation.

/// A single gift.
pub const DONATION_TYPE_ONE_TIME: &str = "one-time";
/// A standing, repeating gift.
pub const DONATION_TYPE_RECURRING: &str = "recurring";

/// All accepted donation types.
pub const VALID_DONATION_TYPES: &[&str] = &[DONATION_TYPE_ONE_TIME, DONATION_TYPE_RECURRING];

/// Donation type used when the submission omits one.
pub fn default_donation_type() -> String {
    DONATION_TYPE_ONE_TIME.to_string()
}

/// Validate that the donation type is one of the accepted values.
pub fn validate_donation_type(donation_type: &str) -> Result<(), String> {
    if VALID_DONATION_TYPES.contains(&donation_type) {
        Ok(())
    } else {
        Err(format!(
            "Invalid donation_type '{donation_type}'. Must be one of: {}",
            VALID_DONATION_TYPES.join(", ")
        ))
    }
}

/// Validate a donation amount: finite and strictly positive.
pub fn validate_amount(amount: f64) -> Result<(), String> {
    if !amount.is_finite() {
        return Err("amount must be a finite number".to_string());
    }
    if amount <= 0.0 {
        return Err("amount must be greater than zero".to_string());
    }
    Ok(())
}
