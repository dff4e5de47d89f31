//! Book records and write payloads

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A book joined with its author, flattened into one record.
///
/// Column aliases in the read query match the camelCase field names,
/// so the same names are used on the wire and in the row mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub pages: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_id: i64,
    /// Author name
    pub name: String,
    pub birthday: Option<NaiveDate>,
    pub bio: Option<String>,
}

/// Fields accepted by create and update.
///
/// Missing fields bind as NULL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_date::deserialize")]
    pub release_date: Option<NaiveDate>,
    pub pages: Option<i32>,
    /// Author id, sent by clients as `author`
    #[serde(rename = "author")]
    pub author_id: Option<i64>,
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp (date part in UTC).
mod lenient_date {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        parse(&raw).map(Some).map_err(serde::de::Error::custom)
    }

    pub(super) fn parse(raw: &str) -> Result<NaiveDate, String> {
        let raw = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc).date_naive())
            .map_err(|_| format!("invalid date: '{}'", raw))
    }
}
