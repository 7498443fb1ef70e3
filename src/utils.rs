use std::{collections::HashMap, fmt::Display};

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::types::{Pagination, SOURCE_SOUNDCLOUD, SoundCloudTrack, TrackRecord, TrackTableRow};

pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 50;

const UNKNOWN: &str = "Unknown";
const ARTWORK_SMALL: &str = "-large";
const ARTWORK_LARGE: &str = "-t500x500";

/// Current time as Unix milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Formats a Unix millisecond timestamp as `YYYY-MM-DD HH:MM:SS` in local time.
pub fn format_time(millis: i64) -> String {
    format_time_in(millis, &Local)
}

/// Formats a Unix millisecond timestamp as `YYYY-MM-DD HH:MM:SS` in `tz`.
///
/// Timestamps outside the representable range render as the Unix epoch.
pub fn format_time_in<Tz>(millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateTime::from_timestamp_millis(millis)
        .unwrap_or_default()
        .with_timezone(tz)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Rewrites a SoundCloud artwork URL to its 500x500 variant. Only the first
/// `-large` marker is replaced; URLs without it are returned unchanged.
pub fn upgrade_artwork(url: &str) -> String {
    url.replacen(ARTWORK_SMALL, ARTWORK_LARGE, 1)
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Maps one upstream track onto the internal [`TrackRecord`] schema.
///
/// Empty strings count as absent. Artwork takes precedence over the
/// uploader's avatar, which takes precedence over an empty picture.
pub fn normalize_track(track: &SoundCloudTrack) -> TrackRecord {
    let user = track.user.as_ref();

    let artist = present(user.and_then(|u| u.username.as_ref())).unwrap_or(UNKNOWN);
    let album = present(
        track
            .publisher_metadata
            .as_ref()
            .and_then(|m| m.album_title.as_ref()),
    )
    .unwrap_or_default();

    let pic = match present(track.artwork_url.as_ref()) {
        Some(artwork) => upgrade_artwork(artwork),
        None => present(user.and_then(|u| u.avatar_url.as_ref()))
            .unwrap_or_default()
            .to_string(),
    };

    TrackRecord {
        id: track.id.to_string(),
        name: present(track.title.as_ref()).unwrap_or(UNKNOWN).to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        pic,
        url: track.permalink_url.clone(),
        source: SOURCE_SOUNDCLOUD.to_string(),
    }
}

/// Normalizes a list of upstream tracks, keeping the upstream order.
pub fn normalize_tracks(tracks: &[SoundCloudTrack]) -> Vec<TrackRecord> {
    tracks.iter().map(normalize_track).collect()
}

pub fn track_table_rows(tracks: &[TrackRecord]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .map(|t| TrackTableRow {
            id: t.id.clone(),
            name: t.name.clone(),
            artist: t.artist.clone(),
            album: t.album.clone(),
        })
        .collect()
}

/// Parses the leading integer of `value`, the way query strings are usually
/// treated by browsers: leading whitespace and an optional sign are accepted
/// and parsing stops at the first non-digit. `"12.5"` yields 12, `"abc"` none.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Computes limit, offset and the `next_offset` hint.
///
/// `limit` defaults to 20 and is clamped to `1..=50`. An explicit `offset`
/// (floored at 0) wins over `page`; otherwise `page` (1-based, floored at 1)
/// becomes `(page - 1) * limit`.
pub fn build_pagination(
    limit: Option<i64>,
    offset: Option<i64>,
    page: Option<i64>,
) -> Pagination {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT) as u32;

    let offset = match offset {
        Some(offset) => offset.max(0) as u64,
        None => {
            let page = page.unwrap_or(1).max(1) as u64;
            (page - 1).saturating_mul(limit as u64)
        }
    };

    Pagination {
        limit,
        offset,
        next_offset: offset.saturating_add(limit as u64),
    }
}

/// Collapses decoded query pairs into a map holding the first value of each
/// key, so `?q=&q=x` keeps the empty `q`.
pub fn first_values(pairs: Vec<(String, String)>) -> HashMap<String, String> {
    let mut params = HashMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        params.entry(key).or_insert(value);
    }
    params
}

/// Resolves pagination from raw query parameters.
///
/// `limit` is aliased by `pageSize`. An `offset` key that is present but not a
/// number counts as offset 0 and still disables `page`.
pub fn pagination_from_query(params: &HashMap<String, String>) -> Pagination {
    let non_empty = |key: &str| params.get(key).filter(|v| !v.is_empty());

    let limit = non_empty("limit")
        .or_else(|| non_empty("pageSize"))
        .and_then(|v| parse_leading_int(v));

    let offset = params
        .get("offset")
        .map(|v| parse_leading_int(v).unwrap_or(0));

    let page = non_empty("page").and_then(|v| parse_leading_int(v));

    build_pagination(limit, offset, page)
}
