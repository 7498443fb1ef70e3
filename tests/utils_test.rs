use std::collections::HashMap;

use chrono::{FixedOffset, Utc};
use scsearch::types::{PublisherMetadata, SoundCloudTrack, SoundCloudUser, TrackId, TrackRecord};
use scsearch::utils::*;

// Helper function to create a bare upstream track
fn bare_track(id: u64) -> SoundCloudTrack {
    SoundCloudTrack {
        id: TrackId::Number(id),
        title: None,
        user: None,
        publisher_metadata: None,
        artwork_url: None,
        permalink_url: None,
    }
}

fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_bare_track_maps_to_defaults() {
    let record = normalize_track(&bare_track(42));

    assert_eq!(
        record,
        TrackRecord {
            id: "42".to_string(),
            name: "Unknown".to_string(),
            artist: "Unknown".to_string(),
            album: String::new(),
            pic: String::new(),
            url: None,
            source: "soundcloud".to_string(),
        }
    );
}

#[test]
fn test_full_track_mapping() {
    let track = SoundCloudTrack {
        id: TrackId::Number(7),
        title: Some("Tides".to_string()),
        user: Some(SoundCloudUser {
            username: Some("oceanic".to_string()),
            avatar_url: Some("https://a1.sndcdn.com/avatars-large.jpg".to_string()),
        }),
        publisher_metadata: Some(PublisherMetadata {
            album_title: Some("Shorelines".to_string()),
        }),
        artwork_url: Some("https://i1.sndcdn.com/artworks-xyz-large.jpg".to_string()),
        permalink_url: Some("https://soundcloud.com/oceanic/tides".to_string()),
    };

    let record = normalize_track(&track);
    assert_eq!(record.id, "7");
    assert_eq!(record.name, "Tides");
    assert_eq!(record.artist, "oceanic");
    assert_eq!(record.album, "Shorelines");
    assert_eq!(record.pic, "https://i1.sndcdn.com/artworks-xyz-t500x500.jpg");
    assert_eq!(record.url.as_deref(), Some("https://soundcloud.com/oceanic/tides"));
    assert_eq!(record.source, "soundcloud");
}

#[test]
fn test_pic_falls_back_to_avatar() {
    let mut track = bare_track(1);
    track.user = Some(SoundCloudUser {
        username: None,
        avatar_url: Some("https://a1.sndcdn.com/avatars-large.jpg".to_string()),
    });

    // Avatar URLs are passed through without the resolution upgrade
    assert_eq!(
        normalize_track(&track).pic,
        "https://a1.sndcdn.com/avatars-large.jpg"
    );

    // An empty artwork URL counts as absent
    track.artwork_url = Some(String::new());
    assert_eq!(
        normalize_track(&track).pic,
        "https://a1.sndcdn.com/avatars-large.jpg"
    );
}

#[test]
fn test_empty_strings_count_as_absent() {
    let mut track = bare_track(1);
    track.title = Some(String::new());
    track.user = Some(SoundCloudUser {
        username: Some(String::new()),
        avatar_url: Some(String::new()),
    });
    track.publisher_metadata = Some(PublisherMetadata { album_title: None });

    let record = normalize_track(&track);
    assert_eq!(record.name, "Unknown");
    assert_eq!(record.artist, "Unknown");
    assert_eq!(record.album, "");
    assert_eq!(record.pic, "");
}

#[test]
fn test_string_ids_are_kept() {
    let mut track = bare_track(0);
    track.id = TrackId::Text("soundcloud:tracks:99".to_string());
    assert_eq!(normalize_track(&track).id, "soundcloud:tracks:99");
}

#[test]
fn test_upstream_json_deserializes_with_only_id() {
    let tracks: Vec<SoundCloudTrack> =
        serde_json::from_str(r#"[{"id": 5}, {"id": 6, "title": "B", "kind": "track"}]"#).unwrap();
    let records = normalize_tracks(&tracks);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "5");
    assert_eq!(records[1].name, "B");
}

#[test]
fn test_upstream_json_tolerates_unexpected_types() {
    let tracks: Vec<SoundCloudTrack> = serde_json::from_str(
        r#"[{"id": 1.5, "title": true, "user": 42, "artwork_url": {"x": 1}, "permalink_url": null}]"#,
    )
    .unwrap();
    let record = normalize_track(&tracks[0]);

    assert_eq!(record.id, "1.5");
    assert_eq!(record.name, "true");
    assert_eq!(record.artist, "Unknown");
    assert_eq!(record.pic, "");
    assert_eq!(record.url, None);
}

#[test]
fn test_first_values_keeps_first_occurrence() {
    let params = first_values(vec![
        ("q".to_string(), String::new()),
        ("q".to_string(), "x".to_string()),
        ("page".to_string(), "2".to_string()),
        ("page".to_string(), "9".to_string()),
    ]);

    assert_eq!(params["q"], "");
    assert_eq!(params["page"], "2");
    assert_eq!(params.len(), 2);
}

#[test]
fn test_artwork_upgrade() {
    assert_eq!(
        upgrade_artwork("https://i1.sndcdn.com/artworks-000-large.jpg"),
        "https://i1.sndcdn.com/artworks-000-t500x500.jpg"
    );
    assert_eq!(
        upgrade_artwork("https://i1.sndcdn.com/artworks-000-t300x300.jpg"),
        "https://i1.sndcdn.com/artworks-000-t300x300.jpg"
    );
}

#[test]
fn test_format_time_is_zero_padded() {
    assert_eq!(format_time_in(0, &Utc), "1970-01-01 00:00:00");
    // 2024-03-05 07:08:09.500 UTC
    assert_eq!(format_time_in(1_709_622_489_500, &Utc), "2024-03-05 07:08:09");
}

#[test]
fn test_format_time_applies_offset() {
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    assert_eq!(format_time_in(0, &tz), "1970-01-01 02:00:00");
}

#[test]
fn test_format_time_has_fixed_width() {
    let rendered = format_time(now_millis());
    assert_eq!(rendered.len(), "YYYY-MM-DD HH:MM:SS".len());
}

#[test]
fn test_next_offset_is_offset_plus_limit() {
    for limit in [1, 10, 20, 50] {
        for page in 1..5 {
            let p = build_pagination(Some(limit), None, Some(page));
            assert_eq!(p.offset, ((page - 1) * limit) as u64);
            assert_eq!(p.next_offset, p.offset + p.limit as u64);
        }
        let p = build_pagination(Some(limit), Some(33), None);
        assert_eq!(p.offset, 33);
        assert_eq!(p.next_offset, 33 + limit as u64);
    }
}

#[test]
fn test_pagination_defaults_and_bounds() {
    let p = build_pagination(None, None, None);
    assert_eq!((p.limit, p.offset, p.next_offset), (20, 0, 20));

    assert_eq!(build_pagination(Some(51), None, None).limit, 50);
    assert_eq!(build_pagination(Some(0), None, None).limit, 1);
    assert_eq!(build_pagination(None, None, Some(0)).offset, 0);
    assert_eq!(build_pagination(None, None, Some(-3)).offset, 0);
    assert_eq!(build_pagination(None, Some(-10), None).offset, 0);
}

#[test]
fn test_pagination_from_query() {
    let p = pagination_from_query(&query(&[("q", "x"), ("page", "2"), ("limit", "10")]));
    assert_eq!((p.limit, p.offset, p.next_offset), (10, 10, 20));

    // pageSize is only consulted when limit is missing
    let p = pagination_from_query(&query(&[("pageSize", "5"), ("page", "3")]));
    assert_eq!((p.limit, p.offset), (5, 10));
    let p = pagination_from_query(&query(&[("limit", "8"), ("pageSize", "5")]));
    assert_eq!(p.limit, 8);

    // A present but unparsable offset still disables page
    let p = pagination_from_query(&query(&[("offset", "abc"), ("page", "4")]));
    assert_eq!(p.offset, 0);

    // Unparsable values fall back to defaults
    let p = pagination_from_query(&query(&[("limit", "lots"), ("page", "first")]));
    assert_eq!((p.limit, p.offset), (20, 0));
}
