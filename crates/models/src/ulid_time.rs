use chrono::{DateTime, Utc};
use ulid::Ulid;

/// Creation instant encoded in the first 48 bits of a ULID string.
pub(crate) fn created_at(external_id: &str) -> Option<DateTime<Utc>> {
    let ulid = Ulid::from_string(external_id).ok()?;
    DateTime::<Utc>::from_timestamp_millis(i64::try_from(ulid.timestamp_ms()).ok()?)
}
