/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// External identifiers assigned by the Marvel API. Kept distinct from
/// [`DbId`] because the two key spaces must never be conflated.
pub type MarvelId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
