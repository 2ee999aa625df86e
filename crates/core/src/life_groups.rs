//! Life group constants and capacity rules.

/// Interest recorded on a connect request when the form omits one.
pub const DEFAULT_CONNECT_INTEREST: &str = "Life Group";

/// Interest used when a connect request omits one.
pub fn default_connect_interest() -> String {
    DEFAULT_CONNECT_INTEREST.to_string()
}

/// Whether a group with `current_members` can take one more member.
pub fn has_capacity(current_members: i32, max_members: i32) -> bool {
    current_members < max_members
}

/// Message returned when capacity enforcement rejects a signup.
pub const GROUP_FULL_MESSAGE: &str = "Life group is full";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_available_below_max() {
        assert!(has_capacity(0, 12));
        assert!(has_capacity(11, 12));
    }

    #[test]
    fn no_capacity_at_or_above_max() {
        assert!(!has_capacity(12, 12));
        assert!(!has_capacity(15, 12));
    }

    #[test]
    fn default_interest_is_life_group() {
        assert_eq!(default_connect_interest(), "Life Group");
    }
}
