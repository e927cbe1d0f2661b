//! Wire shapes of the `app.bsky.embed.*#view` lexicons.
//!
//! Only the fields the resolver reads are modelled. Recursive children are
//! borrowed from the payload and classified lazily, so a malformed child
//! fails on its own instead of taking its parent down with it.

use serde::Deserialize;
use serde_json::Value;

use crate::error::EmbedError;

/// `$type` discriminants recognized by the resolver.
pub mod types {
    pub const IMAGES_VIEW: &str = "app.bsky.embed.images#view";
    pub const EXTERNAL_VIEW: &str = "app.bsky.embed.external#view";
    pub const RECORD_VIEW: &str = "app.bsky.embed.record#view";
    pub const RECORD_WITH_MEDIA_VIEW: &str = "app.bsky.embed.recordWithMedia#view";

    pub const VIEW_RECORD: &str = "app.bsky.embed.record#viewRecord";
    pub const VIEW_NOT_FOUND: &str = "app.bsky.embed.record#viewNotFound";
    pub const VIEW_BLOCKED: &str = "app.bsky.embed.record#viewBlocked";
    pub const LIST_VIEW: &str = "app.bsky.graph.defs#listView";
    pub const GENERATOR_VIEW: &str = "app.bsky.feed.defs#generatorView";
    pub const LABELER_VIEW: &str = "app.bsky.labeler.defs#labelerView";

    pub const FEED_POST: &str = "app.bsky.feed.post";
    pub const FEED_POST_MAIN: &str = "app.bsky.feed.post#main";
    pub const MODLIST: &str = "app.bsky.graph.defs#modlist";
}

/// Read the `$type` discriminant of a wire object, if any.
pub fn type_of(value: &Value) -> Option<&str> {
    value.get("$type").and_then(Value::as_str)
}

/// Minimal actor profile attached to records.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileViewBasic {
    pub did: String,
    pub handle: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl ProfileViewBasic {
    /// Display name, or the handle when the name is missing or empty.
    pub fn name_or_handle(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.handle)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImagesView {
    pub images: Vec<ViewImage>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewImage {
    pub thumb: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalView {
    pub external: ViewExternal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewExternal {
    pub uri: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumb: Option<String>,
}

/// `app.bsky.embed.recordWithMedia#view`.
///
/// Both halves are borrowed: each is resolved under its own fault boundary.
#[derive(Debug, Clone, Copy)]
pub struct RecordWithMediaView<'a> {
    /// `media`, absent when missing or `null`.
    pub media: Option<&'a Value>,
    /// The quoted record view, i.e. `record.record`.
    pub record: Option<&'a Value>,
}

impl<'a> RecordWithMediaView<'a> {
    fn borrow(value: &'a Value) -> Self {
        Self {
            media: value.get("media").filter(|media| !media.is_null()),
            record: value.get("record").and_then(|record| record.get("record")),
        }
    }
}

/// A quoted post (`app.bsky.embed.record#viewRecord`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRecord {
    pub uri: String,
    pub author: ProfileViewBasic,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub indexed_at: Option<String>,
}

impl ViewRecord {
    /// Post text, when the record is a feed post with non-empty text.
    pub fn text(&self) -> Option<&str> {
        if !matches!(
            type_of(&self.value),
            Some(types::FEED_POST | types::FEED_POST_MAIN)
        ) {
            return None;
        }
        self.value
            .get("text")
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    pub uri: String,
    pub name: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub creator: ProfileViewBasic,
}

impl ListView {
    pub fn is_moderation(&self) -> bool {
        self.purpose == types::MODLIST
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorView {
    pub uri: String,
    pub display_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub like_count: Option<u64>,
    pub creator: ProfileViewBasic,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelerView {
    pub uri: String,
    pub creator: ProfileViewBasic,
}

/// Top-level embed views.
#[derive(Debug, Clone)]
pub enum Embed<'a> {
    Images(ImagesView),
    External(ExternalView),
    /// `app.bsky.embed.record#view`, holding its inner record view.
    Record(Option<&'a Value>),
    RecordWithMedia(RecordWithMediaView<'a>),
}

impl<'a> Embed<'a> {
    /// Classify a raw embed by `$type` and decode its fields.
    pub fn classify(value: &'a Value) -> Result<Self, EmbedError> {
        match type_of(value) {
            Some(types::IMAGES_VIEW) => Ok(Self::Images(ImagesView::deserialize(value)?)),
            Some(types::EXTERNAL_VIEW) => Ok(Self::External(ExternalView::deserialize(value)?)),
            Some(types::RECORD_VIEW) => Ok(Self::Record(value.get("record"))),
            Some(types::RECORD_WITH_MEDIA_VIEW) => {
                Ok(Self::RecordWithMedia(RecordWithMediaView::borrow(value)))
            }
            Some(_) | None => Err(EmbedError::UnsupportedEmbed),
        }
    }
}

/// The media half of a `recordWithMedia` view.
///
/// Records and composites are not media; they classify as unsupported, so
/// a composite never nests inside another.
#[derive(Debug, Clone)]
pub enum MediaEmbed {
    Images(ImagesView),
    External(ExternalView),
}

impl MediaEmbed {
    pub fn classify(value: &Value) -> Result<Self, EmbedError> {
        match type_of(value) {
            Some(types::IMAGES_VIEW) => Ok(Self::Images(ImagesView::deserialize(value)?)),
            Some(types::EXTERNAL_VIEW) => Ok(Self::External(ExternalView::deserialize(value)?)),
            Some(_) | None => Err(EmbedError::UnsupportedEmbed),
        }
    }
}

/// The subset of embeds a quoted post may show.
///
/// Quotes, lists and feeds nested inside a quoted post are not rendered;
/// keeping them out of this type bounds recursion at one nested level.
#[derive(Debug, Clone)]
pub enum QuotedEmbed {
    Images(ImagesView),
    External(ExternalView),
}

impl QuotedEmbed {
    /// Classify a nested embed. `Ok(None)` means the kind is excluded.
    pub fn classify(value: &Value) -> Result<Option<Self>, EmbedError> {
        match type_of(value) {
            Some(types::IMAGES_VIEW) => Ok(Some(Self::Images(ImagesView::deserialize(value)?))),
            Some(types::EXTERNAL_VIEW) => {
                Ok(Some(Self::External(ExternalView::deserialize(value)?)))
            }
            Some(_) | None => Ok(None),
        }
    }
}

/// Record views reachable through `app.bsky.embed.record#view`.
#[derive(Debug, Clone)]
pub enum QuotedRecord<'a> {
    /// A quoted post and its own embeds, still unclassified.
    Post(ViewRecord, &'a [Value]),
    List(ListView),
    Feed(GeneratorView),
    Labeler(LabelerView),
    NotFound,
    Blocked,
}

impl<'a> QuotedRecord<'a> {
    pub fn classify(value: &'a Value) -> Result<Self, EmbedError> {
        match type_of(value) {
            Some(types::VIEW_RECORD) => {
                let embeds = value
                    .get("embeds")
                    .and_then(Value::as_array)
                    .map_or(&[][..], Vec::as_slice);
                Ok(Self::Post(ViewRecord::deserialize(value)?, embeds))
            }
            Some(types::LIST_VIEW) => Ok(Self::List(ListView::deserialize(value)?)),
            Some(types::GENERATOR_VIEW) => Ok(Self::Feed(GeneratorView::deserialize(value)?)),
            Some(types::LABELER_VIEW) => Ok(Self::Labeler(LabelerView::deserialize(value)?)),
            Some(types::VIEW_NOT_FOUND) => Ok(Self::NotFound),
            Some(types::VIEW_BLOCKED) => Ok(Self::Blocked),
            Some(_) | None => Err(EmbedError::UnknownRecord),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn author() -> Value {
        json!({"did": "did:plc:abc", "handle": "alice.test"})
    }

    #[test]
    fn classify_images() {
        let value = json!({
            "$type": types::IMAGES_VIEW,
            "images": [{"thumb": "https://cdn.test/a.jpg", "fullsize": "https://cdn.test/a_full.jpg", "alt": "a cat"}]
        });
        let Embed::Images(view) = Embed::classify(&value).unwrap() else {
            panic!("expected images");
        };
        assert_eq!(view.images.len(), 1);
        assert_eq!(view.images[0].alt, "a cat");
    }

    #[test]
    fn classify_images_missing_alt_defaults_empty() {
        let value = json!({
            "$type": types::IMAGES_VIEW,
            "images": [{"thumb": "https://cdn.test/a.jpg"}]
        });
        let Embed::Images(view) = Embed::classify(&value).unwrap() else {
            panic!("expected images");
        };
        assert_eq!(view.images[0].alt, "");
    }

    #[test]
    fn classify_unknown_top_level_type() {
        let value = json!({"$type": "app.bsky.embed.video#view"});
        assert!(matches!(
            Embed::classify(&value),
            Err(EmbedError::UnsupportedEmbed)
        ));
    }

    #[test]
    fn classify_missing_type() {
        assert!(matches!(
            Embed::classify(&json!({"images": []})),
            Err(EmbedError::UnsupportedEmbed)
        ));
        assert!(matches!(
            Embed::classify(&json!("just a string")),
            Err(EmbedError::UnsupportedEmbed)
        ));
    }

    #[test]
    fn classify_known_type_with_bad_fields() {
        let value = json!({"$type": types::EXTERNAL_VIEW, "external": {"title": "no uri"}});
        assert!(matches!(
            Embed::classify(&value),
            Err(EmbedError::Malformed(_))
        ));
    }

    #[test]
    fn quoted_embed_excludes_records() {
        let value = json!({"$type": types::RECORD_VIEW, "record": {}});
        assert!(QuotedEmbed::classify(&value).unwrap().is_none());
    }

    #[test]
    fn quoted_embed_accepts_external() {
        let value = json!({
            "$type": types::EXTERNAL_VIEW,
            "external": {"uri": "https://example.com", "title": "t", "description": "d"}
        });
        assert!(matches!(
            QuotedEmbed::classify(&value),
            Ok(Some(QuotedEmbed::External(_)))
        ));
    }

    #[test]
    fn media_embed_rejects_records_and_composites() {
        for value in [
            json!({"$type": types::RECORD_VIEW, "record": {}}),
            json!({"$type": types::RECORD_WITH_MEDIA_VIEW, "media": {}, "record": {}}),
            json!({"$type": "app.bsky.embed.video#view"}),
        ] {
            assert!(matches!(
                MediaEmbed::classify(&value),
                Err(EmbedError::UnsupportedEmbed)
            ));
        }
        let images = json!({"$type": types::IMAGES_VIEW, "images": []});
        assert!(matches!(
            MediaEmbed::classify(&images),
            Ok(MediaEmbed::Images(_))
        ));
    }

    #[test]
    fn quoted_post_borrows_its_embeds() {
        let value = json!({
            "$type": types::VIEW_RECORD,
            "uri": "at://did:plc:abc/app.bsky.feed.post/1",
            "author": author(),
            "embeds": [{"$type": types::IMAGES_VIEW, "images": []}]
        });
        let Ok(QuotedRecord::Post(post, embeds)) = QuotedRecord::classify(&value) else {
            panic!("expected post");
        };
        assert_eq!(post.author.handle, "alice.test");
        assert_eq!(embeds.len(), 1);
        assert_eq!(type_of(&embeds[0]), Some(types::IMAGES_VIEW));

        let bare = json!({
            "$type": types::VIEW_RECORD,
            "uri": "at://did:plc:abc/app.bsky.feed.post/2",
            "author": author()
        });
        let Ok(QuotedRecord::Post(_, embeds)) = QuotedRecord::classify(&bare) else {
            panic!("expected post");
        };
        assert!(embeds.is_empty());
    }

    #[test]
    fn quoted_record_sentinels() {
        let not_found = json!({"$type": types::VIEW_NOT_FOUND, "uri": "at://x", "notFound": true});
        let blocked = json!({"$type": types::VIEW_BLOCKED, "uri": "at://x", "blocked": true});
        assert!(matches!(
            QuotedRecord::classify(&not_found),
            Ok(QuotedRecord::NotFound)
        ));
        assert!(matches!(
            QuotedRecord::classify(&blocked),
            Ok(QuotedRecord::Blocked)
        ));
    }

    #[test]
    fn quoted_record_unknown() {
        let detached = json!({"$type": "app.bsky.embed.record#viewDetached", "uri": "at://x"});
        assert!(matches!(
            QuotedRecord::classify(&detached),
            Err(EmbedError::UnknownRecord)
        ));
    }

    #[test]
    fn view_record_text_only_for_posts() {
        let post = ViewRecord::deserialize(&json!({
            "uri": "at://did:plc:abc/app.bsky.feed.post/1",
            "author": author(),
            "value": {"$type": types::FEED_POST, "text": "hello"}
        }))
        .unwrap();
        assert_eq!(post.text(), Some("hello"));

        let other = ViewRecord::deserialize(&json!({
            "uri": "at://did:plc:abc/app.bsky.feed.post/1",
            "author": author(),
            "value": {"$type": "app.example.thing", "text": "hello"}
        }))
        .unwrap();
        assert_eq!(other.text(), None);

        let empty = ViewRecord::deserialize(&json!({
            "uri": "at://did:plc:abc/app.bsky.feed.post/1",
            "author": author(),
            "value": {"$type": types::FEED_POST, "text": ""}
        }))
        .unwrap();
        assert_eq!(empty.text(), None);

        let main = ViewRecord::deserialize(&json!({
            "uri": "at://did:plc:abc/app.bsky.feed.post/1",
            "author": author(),
            "value": {"$type": types::FEED_POST_MAIN, "text": "from main"}
        }))
        .unwrap();
        assert_eq!(main.text(), Some("from main"));
    }

    #[test]
    fn list_purpose() {
        let list = ListView::deserialize(&json!({
            "uri": "at://did:plc:abc/app.bsky.graph.list/l1",
            "name": "Spam",
            "purpose": types::MODLIST,
            "creator": author()
        }))
        .unwrap();
        assert!(list.is_moderation());

        let curate = ListView::deserialize(&json!({
            "uri": "at://did:plc:abc/app.bsky.graph.list/l2",
            "name": "Friends",
            "purpose": "app.bsky.graph.defs#curatelist",
            "creator": author()
        }))
        .unwrap();
        assert!(!curate.is_moderation());
    }

    #[test]
    fn name_or_handle_falls_back() {
        let mut profile = ProfileViewBasic::deserialize(&author()).unwrap();
        assert_eq!(profile.name_or_handle(), "alice.test");
        profile.display_name = Some(String::new());
        assert_eq!(profile.name_or_handle(), "alice.test");
        profile.display_name = Some("Alice".to_string());
        assert_eq!(profile.name_or_handle(), "Alice");
    }

    #[test]
    fn record_with_media_halves() {
        let value = json!({
            "$type": types::RECORD_WITH_MEDIA_VIEW,
            "media": {"$type": types::IMAGES_VIEW, "images": []},
            "record": {"record": {"$type": types::VIEW_BLOCKED}}
        });
        let Ok(Embed::RecordWithMedia(view)) = Embed::classify(&value) else {
            panic!("expected recordWithMedia");
        };
        assert_eq!(view.media.and_then(type_of), Some(types::IMAGES_VIEW));
        assert_eq!(view.record.and_then(type_of), Some(types::VIEW_BLOCKED));

        let missing = json!({"$type": types::RECORD_WITH_MEDIA_VIEW, "media": null});
        let Ok(Embed::RecordWithMedia(view)) = Embed::classify(&missing) else {
            panic!("expected recordWithMedia");
        };
        assert!(view.media.is_none());
        assert!(view.record.is_none());
    }
}
