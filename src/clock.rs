use time::{Date, OffsetDateTime};

/// Calendar day used for new drafts and undated meals (UTC).
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
