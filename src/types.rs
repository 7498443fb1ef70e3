use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tabled::Tabled;

/// Constant tag identifying the upstream provider on every record.
pub const SOURCE_SOUNDCLOUD: &str = "soundcloud";

/// Body of a successful client-credentials exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

/// Token handed out by the token manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub access_token: String,
    pub cached: bool,
    /// Unix timestamp in milliseconds.
    pub fetched_at: i64,
}

/// Track identifier as sent by SoundCloud. Numeric in practice, but string
/// identifiers and any other JSON value are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackId {
    Number(u64),
    Text(String),
    Other(Value),
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackId::Number(n) => write!(f, "{}", n),
            TrackId::Text(s) => f.write_str(s),
            TrackId::Other(v) => write!(f, "{}", v),
        }
    }
}

/// Accepts strings as-is and renders numbers and booleans as text; any other
/// value counts as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Decodes `T` when the value has the expected shape, otherwise none.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).ok())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoundCloudUser {
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublisherMetadata {
    #[serde(default, deserialize_with = "lenient_string")]
    pub album_title: Option<String>,
}

/// A single track object of the SoundCloud `/tracks` response. Unknown fields
/// are ignored and a field of an unexpected type never fails the whole list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundCloudTrack {
    pub id: TrackId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user: Option<SoundCloudUser>,
    #[serde(default, deserialize_with = "lenient")]
    pub publisher_metadata: Option<PublisherMetadata>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub artwork_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub permalink_url: Option<String>,
}

/// Normalized track returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub pic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub source: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub album: String,
}

/// Resolved pagination of a search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u64,
    pub next_offset: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMeta {
    pub cached: bool,
    pub fetched_time: String,
    pub fetched_timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub code: u16,
    pub query: String,
    pub pagination: Pagination,
    pub token: TokenMeta,
    pub list: Vec<TrackRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}
