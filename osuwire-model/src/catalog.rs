//! The osu! entity catalog.
//!
//! One declarative table per API entity, wire keys exactly as osu-web
//! sends them. The extended shapes mirror the API's split between list
//! views (base) and detail views (extended): same wire object, more
//! fields, and nested relations narrowed to their extended shapes.

use osuwire_types::{ChangelogEntryType, RankStatus, Ruleset};

use crate::error::RegistryError;
use crate::registry::ShapeRegistry;
use crate::shape::FieldKind::{Bool, DurationSecs, Float, Int, Opaque, Str, Timestamp};
use crate::shape::{FieldKind, FieldSpec, Shape};

fn entity(name: &str) -> FieldKind {
    FieldKind::Entity(name.into())
}

fn wire_enum(name: &str) -> FieldKind {
    FieldKind::Enum(name.into())
}

fn list(inner: FieldKind) -> FieldKind {
    FieldKind::List(Box::new(inner))
}

fn req(key: &str, kind: FieldKind) -> FieldSpec {
    FieldSpec::required(key, kind)
}

fn opt(key: &str, kind: FieldKind) -> FieldSpec {
    FieldSpec::optional(key, kind)
}

/// Builds a registry with the full catalog registered.
///
/// Intended to run once at process start; any error here means the
/// catalog itself is malformed and is fatal.
pub fn registry() -> Result<ShapeRegistry, RegistryError> {
    let mut reg = ShapeRegistry::new();
    reg.register_enum(Ruleset::TABLE)?;
    reg.register_enum(RankStatus::TABLE)?;
    reg.register_enum(ChangelogEntryType::TABLE)?;
    reg.register_many(shapes())?;
    Ok(reg)
}

fn shapes() -> Vec<Shape> {
    vec![
        country(),
        user_cover(),
        kudosu(),
        highest_rank(),
        rank_history(),
        badge(),
        profile_banner(),
        monthly_playcount(),
        grade_counts(),
        user_level(),
        user_page(),
        user_achievement(),
        user_statistics(),
        user(),
        user_extended(),
        failtimes(),
        beatmap(),
        beatmap_extended(),
        covers(),
        beatmapset(),
        beatmapset_extended(),
        changelog_entry(),
    ]
}

fn country() -> Shape {
    Shape::new("country")
        .field(req("code", Str))
        .field(req("name", Str))
}

fn user_cover() -> Shape {
    Shape::new("user_cover")
        .field(opt("custom_url", Str))
        .field(req("url", Str))
        // Numeric string for stock covers, null for custom ones.
        .field(opt("id", Opaque))
}

fn kudosu() -> Shape {
    Shape::new("kudosu")
        .field(req("available", Int))
        .field(req("total", Int))
}

fn highest_rank() -> Shape {
    Shape::new("highest_rank")
        .field(req("rank", Int))
        .field(req("updated_at", Timestamp))
}

fn rank_history() -> Shape {
    Shape::new("rank_history")
        .field(req("mode", wire_enum("ruleset")))
        .field(req("data", list(Int)))
}

fn badge() -> Shape {
    Shape::new("badge")
        .field(req("awarded_at", Timestamp))
        .field(req("description", Str))
        .field(req("image_url", Str))
        .field(req("url", Str))
}

fn profile_banner() -> Shape {
    Shape::new("profile_banner")
        .field(req("id", Int))
        .field(req("tournament_id", Int))
        .field(opt("image", Str))
}

fn monthly_playcount() -> Shape {
    Shape::new("monthly_playcount")
        // Date-only wire form (yyyy-mm-dd), not RFC 3339.
        .field(req("start_date", Str))
        .field(req("count", Int))
}

fn grade_counts() -> Shape {
    Shape::new("grade_counts")
        .field(req("a", Int))
        .field(req("s", Int))
        .field(req("sh", Int))
        .field(req("ss", Int))
        .field(req("ssh", Int))
}

fn user_level() -> Shape {
    Shape::new("user_level")
        .field(req("current", Int))
        .field(req("progress", Int))
}

fn user_page() -> Shape {
    Shape::new("user_page")
        .field(req("html", Str))
        .field(req("raw", Str))
}

fn user_achievement() -> Shape {
    Shape::new("user_achievement")
        .field(req("achieved_at", Timestamp))
        .field(req("achievement_id", Int))
}

fn user_statistics() -> Shape {
    Shape::new("user_statistics")
        .field(req("grade_counts", entity("grade_counts")))
        .field(req("level", entity("user_level")))
        .field(req("hit_accuracy", Float))
        .field(req("is_ranked", Bool))
        .field(req("play_count", Int))
        .field(req("ranked_score", Int))
        .field(req("total_score", Int))
        .field(opt("pp", Float))
        .field(opt("global_rank", Int))
        .field(opt("country_rank", Int))
        .field(opt("play_time", DurationSecs))
}

fn user() -> Shape {
    Shape::new("user")
        .field(req("avatar_url", Str))
        // Purpose undocumented upstream; passed through verbatim.
        .field(opt("default_group", Opaque))
        .field(req("id", Int))
        .field(req("is_active", Bool))
        .field(req("is_bot", Bool))
        .field(req("is_deleted", Bool))
        .field(req("is_online", Bool))
        .field(req("is_supporter", Bool))
        .field(opt("last_visit", Timestamp))
        .field(req("pm_friends_only", Bool))
        .field(opt("profile_colour", Str))
        .field(req("username", Str))
        // Optional attributes, present only on certain endpoints.
        // account_history entries and group membership objects are not
        // modeled yet; they pass through verbatim.
        .field(opt("account_history", Opaque))
        .field(opt("active_tournament_banner", entity("profile_banner")))
        .field(opt("active_tournament_banners", list(entity("profile_banner"))))
        .field(opt("badges", list(entity("badge"))))
        .field(opt("beatmap_playcounts_count", Int))
        .field(opt("comments_count", Opaque))
        .field(opt("country", entity("country")))
        .field(opt("cover", entity("user_cover")))
        .field(opt("favourite_beatmapset_count", Int))
        .field(opt("follow_user_mapping", Opaque))
        .field(opt("follower_count", Int))
        .field(opt("graveyard_beatmapset_count", Int))
        .field(opt("groups", Opaque))
        .field(opt("guest_beatmapset_count", Int))
        .field(opt("is_admin", Bool))
        .field(opt("is_bng", Bool))
        .field(opt("is_full_bn", Bool))
        .field(opt("is_gmt", Bool))
        .field(opt("is_limited_bn", Bool))
        .field(opt("is_moderator", Bool))
        .field(opt("is_nat", Bool))
        .field(opt("is_restricted", Bool))
        .field(opt("is_silenced", Bool))
        .field(opt("kudosu", entity("kudosu")))
        .field(opt("loved_beatmapset_count", Int))
        .field(opt("mapping_follower_count", Int))
        .field(opt("monthly_playcounts", list(entity("monthly_playcount"))))
        .field(opt("nominated_beatmapset_count", Int))
        .field(opt("page", entity("user_page")))
        .field(opt("pending_beatmapset_count", Int))
        .field(opt("previous_usernames", list(Str)))
        .field(opt("rank_highest", entity("highest_rank")))
        .field(opt("rank_history", entity("rank_history")))
        .field(opt("ranked_beatmapset_count", Int))
        // Same wire shape as a monthly playcount entry.
        .field(opt("replays_watched_counts", list(entity("monthly_playcount"))))
        .field(opt("scores_best_count", Int))
        .field(opt("scores_first_count", Int))
        .field(opt("scores_pinned_count", Int))
        .field(opt("scores_recent_count", Int))
        .field(opt("statistics", entity("user_statistics")))
        .field(opt("support_level", Opaque))
        .field(opt("user_achievements", list(entity("user_achievement"))))
}

fn user_extended() -> Shape {
    Shape::extending("user_extended", "user")
        .field(req("join_date", Timestamp))
        .field(req("playmode", wire_enum("ruleset")))
        .field(req("has_supported", Bool))
        .field(req("post_count", Int))
        .field(opt("discord", Str))
        .field(opt("location", Str))
        .field(opt("occupation", Str))
        .field(opt("playstyle", list(Str)))
        .field(opt("profile_order", list(Str)))
        .field(opt("title", Str))
        .field(opt("twitter", Str))
        .field(opt("website", Str))
}

fn failtimes() -> Shape {
    Shape::new("failtimes")
        .field(opt("exit", list(Int)))
        .field(opt("fail", list(Int)))
}

fn beatmap() -> Shape {
    Shape::new("beatmap")
        .field(req("id", Int))
        .field(req("beatmapset_id", Int))
        .field(req("difficulty_rating", Float))
        .field(req("mode", wire_enum("ruleset")))
        .field(req("status", wire_enum("rank_status")))
        .field(req("total_length", DurationSecs))
        .field(req("user_id", Int))
        .field(req("version", Str))
        .field(opt("beatmapset", entity("beatmapset")))
        .field(opt("checksum", Str))
        .field(opt("failtimes", entity("failtimes")))
        .field(opt("max_combo", Int))
}

fn beatmap_extended() -> Shape {
    Shape::extending("beatmap_extended", "beatmap")
        // "accuracy" is the overall difficulty, "drain" the HP drain.
        .field(req("accuracy", Float))
        .field(req("ar", Float))
        .field(req("bpm", Float))
        .field(req("convert", Bool))
        .field(req("count_circles", Int))
        .field(req("count_sliders", Int))
        .field(req("count_spinners", Int))
        .field(req("cs", Float))
        .field(opt("deleted_at", Timestamp))
        .field(req("drain", Float))
        .field(req("hit_length", DurationSecs))
        .field(req("is_scoreable", Bool))
        .field(req("last_updated", Timestamp))
        .field(req("passcount", Int))
        .field(req("playcount", Int))
        .field(req("url", Str))
        // Detail views nest the extended set, not the base one.
        .override_field(opt("beatmapset", entity("beatmapset_extended")))
}

fn covers() -> Shape {
    Shape::new("covers")
        .field(req("cover", Str))
        .field(req("cover@2x", Str))
        .field(req("card", Str))
        .field(req("card@2x", Str))
        .field(req("list", Str))
        .field(req("list@2x", Str))
        .field(req("slimcover", Str))
        .field(req("slimcover@2x", Str))
}

fn beatmapset() -> Shape {
    Shape::new("beatmapset")
        .field(req("artist", Str))
        .field(req("artist_unicode", Str))
        .field(req("covers", entity("covers")))
        .field(req("creator", Str))
        .field(req("favourite_count", Int))
        .field(req("id", Int))
        .field(req("nsfw", Bool))
        .field(req("play_count", Int))
        .field(req("preview_url", Str))
        .field(req("source", Str))
        .field(req("status", wire_enum("rank_status")))
        .field(req("title", Str))
        .field(req("title_unicode", Str))
        .field(req("user_id", Int))
        .field(req("video", Bool))
        .field(opt("beatmaps", list(entity("beatmap"))))
}

fn beatmapset_extended() -> Shape {
    Shape::extending("beatmapset_extended", "beatmapset")
        .field(req("bpm", Float))
        .field(req("can_be_hyped", Bool))
        .field(opt("deleted_at", Timestamp))
        .field(req("last_updated", Timestamp))
        .field(opt("ranked_date", Timestamp))
        .field(req("storyboard", Bool))
        .field(opt("submitted_date", Timestamp))
        .field(req("tags", Str))
        .override_field(opt("beatmaps", list(entity("beatmap_extended"))))
}

fn changelog_entry() -> Shape {
    Shape::new("changelog_entry")
        .field(req("category", Str))
        .field(opt("created_at", Timestamp))
        .field(opt("github_pull_request_id", Int))
        .field(opt("github_url", Str))
        .field(opt("id", Int))
        .field(req("major", Bool))
        .field(opt("repository", Str))
        .field(opt("title", Str))
        .field(req("type", wire_enum("changelog_entry_type")))
        .field(opt("url", Str))
}
