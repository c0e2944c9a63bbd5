//! Base-vs-extended decoding against the real catalog shapes.
#![recursion_limit = "256"]

use osuwire_model::catalog;
use osuwire_types::{RankStatus, Ruleset, Seconds};
use pretty_assertions::assert_eq;
use serde_json::json;

/// A detail-view beatmap payload: extended fields plus a nested
/// beatmapset that satisfies the extended set shape.
fn extended_beatmap_payload() -> serde_json::Value {
    json!({
        "id": 4192228,
        "beatmapset_id": 1971987,
        "difficulty_rating": 5.31,
        "mode": "osu",
        "status": "ranked",
        "total_length": 204,
        "user_id": 6050530,
        "version": "Expert",
        "accuracy": 9.0,
        "ar": 9.4,
        "bpm": 178.0,
        "convert": false,
        "count_circles": 512,
        "count_sliders": 434,
        "count_spinners": 1,
        "cs": 4.0,
        "drain": 5.5,
        "hit_length": 90,
        "is_scoreable": true,
        "last_updated": "2023-05-07T10:11:04+00:00",
        "passcount": 12904,
        "playcount": 81032,
        "url": "https://osu.ppy.sh/beatmaps/4192228",
        "beatmapset": {
            "artist": "Camellia",
            "artist_unicode": "かめりあ",
            "covers": {
                "cover": "c", "cover@2x": "c2",
                "card": "d", "card@2x": "d2",
                "list": "l", "list@2x": "l2",
                "slimcover": "s", "slimcover@2x": "s2"
            },
            "creator": "Mir",
            "favourite_count": 903,
            "id": 1971987,
            "nsfw": false,
            "play_count": 412392,
            "preview_url": "//b.ppy.sh/preview/1971987.mp3",
            "source": "",
            "status": "ranked",
            "title": "Tera I/O",
            "title_unicode": "Tera I/O",
            "user_id": 8688812,
            "video": false,
            "bpm": 178.0,
            "can_be_hyped": false,
            "last_updated": "2023-05-07T10:11:03+00:00",
            "ranked_date": "2023-05-15T21:20:58+00:00",
            "storyboard": true,
            "submitted_date": "2023-04-02T14:30:37+00:00",
            "tags": "speedcore renaissance"
        }
    })
}

// ── Base fields agree across shapes ──────────────────────────────

#[test]
fn base_and_extended_decode_agree_on_base_fields() {
    let reg = catalog::registry().unwrap();
    let payload = extended_beatmap_payload();

    let base = reg.decode(&payload, "beatmap").unwrap();
    let extended = reg.decode(&payload, "beatmap_extended").unwrap();

    // Every base-declared field except the overridden relation decodes
    // to the same value under either shape.
    for key in [
        "id",
        "beatmapset_id",
        "difficulty_rating",
        "mode",
        "status",
        "total_length",
        "user_id",
        "version",
        "checksum",
        "failtimes",
        "max_combo",
    ] {
        assert_eq!(base.get(key), extended.get(key), "field {key:?}");
    }
}

#[test]
fn extended_shape_adds_subclass_fields() {
    let reg = catalog::registry().unwrap();
    let payload = extended_beatmap_payload();

    let base = reg.decode(&payload, "beatmap").unwrap();
    let extended = reg.decode(&payload, "beatmap_extended").unwrap();

    assert_eq!(extended.get_duration("hit_length"), Some(Seconds::new(90)));
    assert_eq!(extended.get_f64("bpm"), Some(178.0));
    // The base shape does not declare the subclass fields at all.
    assert_eq!(base.get("hit_length"), None);
    assert_eq!(base.get("bpm"), None);
}

// ── Override resolution ──────────────────────────────────────────

#[test]
fn overridden_relation_decodes_under_the_extended_shape() {
    let reg = catalog::registry().unwrap();
    let payload = extended_beatmap_payload();

    let extended = reg.decode(&payload, "beatmap_extended").unwrap();
    let set = extended.get_entity("beatmapset").unwrap();
    assert_eq!(set.shape, "beatmapset_extended");
    assert_eq!(set.get_str("tags"), Some("speedcore renaissance"));
    assert_eq!(set.get_bool("storyboard"), Some(true));
}

#[test]
fn base_shape_decodes_the_relation_as_base() {
    let reg = catalog::registry().unwrap();
    let payload = extended_beatmap_payload();

    let base = reg.decode(&payload, "beatmap").unwrap();
    let set = base.get_entity("beatmapset").unwrap();
    assert_eq!(set.shape, "beatmapset");
    assert_eq!(set.get_str("title"), Some("Tera I/O"));
    // Subclass-only keys are not part of the base relation's shape.
    assert_eq!(set.get("tags"), None);
}

#[test]
fn shared_base_fields_of_the_relation_agree() {
    let reg = catalog::registry().unwrap();
    let payload = extended_beatmap_payload();

    let base_set = reg
        .decode(&payload, "beatmap")
        .unwrap()
        .get_entity("beatmapset")
        .unwrap()
        .clone();
    let extended_set = reg
        .decode(&payload, "beatmap_extended")
        .unwrap()
        .get_entity("beatmapset")
        .unwrap()
        .clone();

    for key in ["artist", "creator", "id", "status", "title", "user_id"] {
        assert_eq!(base_set.get(key), extended_set.get(key), "field {key:?}");
    }
    assert_eq!(
        extended_set.get_enum::<RankStatus>("status"),
        Some(RankStatus::Ranked)
    );
}

// ── user / user_extended ─────────────────────────────────────────

#[test]
fn user_extended_requires_its_added_fields() {
    let reg = catalog::registry().unwrap();
    let payload = json!({
        "avatar_url": "https://a.ppy.sh/2",
        "id": 2,
        "is_active": true,
        "is_bot": false,
        "is_deleted": false,
        "is_online": false,
        "is_supporter": true,
        "pm_friends_only": false,
        "username": "peppy"
    });

    // Fine as a base user...
    let user = reg.decode(&payload, "user").unwrap();
    assert_eq!(user.get_str("username"), Some("peppy"));

    // ...but the extended shape demands the detail-view fields.
    let err = reg.decode(&payload, "user_extended").unwrap_err();
    assert_eq!(
        err,
        osuwire_model::DecodeError::MissingField("join_date".to_string())
    );
}

#[test]
fn user_extended_decodes_detail_payload() {
    let reg = catalog::registry().unwrap();
    let payload = json!({
        "avatar_url": "https://a.ppy.sh/2",
        "id": 2,
        "is_active": true,
        "is_bot": false,
        "is_deleted": false,
        "is_online": false,
        "is_supporter": true,
        "pm_friends_only": false,
        "username": "peppy",
        "join_date": "2007-08-28T01:09:47+00:00",
        "playmode": "osu",
        "has_supported": true,
        "post_count": 20767,
        "location": "Melbourne, Australia",
        "playstyle": ["mouse", "touch"],
        "twitter": "ppy"
    });

    let user = reg.decode(&payload, "user_extended").unwrap();
    assert_eq!(user.get_enum::<Ruleset>("playmode"), Some(Ruleset::Osu));
    assert_eq!(user.get_i64("post_count"), Some(20767));
    assert_eq!(user.get_str("location"), Some("Melbourne, Australia"));
    assert!(user.is_absent("occupation"));
    // Base-declared fields are still present under the extended shape.
    assert_eq!(user.get_str("username"), Some("peppy"));
}
