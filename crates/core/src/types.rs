/// Every record identifier is a random 128-bit UUID, serialized as a string.
pub type RecordId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh record identifier.
pub fn new_record_id() -> RecordId {
    uuid::Uuid::new_v4()
}

/// Parse a client-supplied identifier.
///
/// Returns `None` for anything that is not a well-formed UUID; callers treat
/// that the same as an identifier with no matching record.
pub fn parse_record_id(raw: &str) -> Option<RecordId> {
    uuid::Uuid::parse_str(raw.trim()).ok()
}
