//! Embed resolution.
//!
//! Turns an embed view (raw JSON) into a [`RenderNode`] tree:
//!
//! ```text
//! payload ─▶ Embed::classify
//!              ├─ Images           ─▶ layout by count (1..=4, else nothing)
//!              ├─ External         ─▶ link card
//!              ├─ Record           ─▶ QuotedRecord::classify
//!              │                        ├─ Post    ─▶ quote card + QuotedEmbed children
//!              │                        ├─ List / Feed / Labeler ─▶ generic card
//!              │                        └─ NotFound / Blocked    ─▶ notice
//!              └─ RecordWithMedia  ─▶ stack [MediaEmbed, QuotedRecord]
//! ```
//!
//! The tree is at most three levels deep: a composite holds a quote, whose
//! nested embeds are media only. [`resolve`] never fails. Errors from classification or decoding are caught
//! at a fault boundary and shown as [`RenderNode::Error`]. Every recursive
//! call gets its own boundary, so one broken child does not blank its
//! siblings.

pub mod node;
pub mod view;

use serde_json::Value;

use crate::error::EmbedError;
use crate::link;

pub use node::{AuthorLine, ImageItem, ImageLayout, RenderNode};
pub use view::{Embed, MediaEmbed, QuotedEmbed, QuotedRecord};

use node::{BLOCKED_MESSAGE, NOT_FOUND_MESSAGE};
use view::{ExternalView, GeneratorView, ImagesView, LabelerView, ListView, ViewRecord};

/// Resolve an embed payload. `None` and JSON `null` render nothing.
pub fn resolve(payload: Option<&Value>) -> Option<RenderNode> {
    match payload {
        None | Some(Value::Null) => None,
        Some(value) => guarded(|| resolve_embed(value)),
    }
}

/// Fault boundary: converts an error into a visible error node.
fn guarded<F>(f: F) -> Option<RenderNode>
where
    F: FnOnce() -> Result<Option<RenderNode>, EmbedError>,
{
    match f() {
        Ok(node) => node,
        Err(err) => {
            tracing::debug!(error = %err, "embed rendered as error placeholder");
            Some(RenderNode::error(&err))
        }
    }
}

fn resolve_embed(value: &Value) -> Result<Option<RenderNode>, EmbedError> {
    match Embed::classify(value)? {
        Embed::Images(view) => Ok(images(view)),
        Embed::External(view) => Ok(Some(external(view))),
        Embed::Record(record) => quoted_record(record).map(Some),
        Embed::RecordWithMedia(view) => {
            let media = view.media.and_then(|media| guarded(|| resolve_media(media)));
            let record = guarded(|| quoted_record(view.record).map(Some));
            let children = [media, record].into_iter().flatten().collect();
            Ok(Some(RenderNode::Stack { children }))
        }
    }
}

fn resolve_media(value: &Value) -> Result<Option<RenderNode>, EmbedError> {
    Ok(match MediaEmbed::classify(value)? {
        MediaEmbed::Images(view) => images(view),
        MediaEmbed::External(view) => Some(external(view)),
    })
}

/// Resolve one embed inside a quoted post.
fn resolve_nested(value: &Value) -> Option<RenderNode> {
    guarded(|| match QuotedEmbed::classify(value)? {
        Some(QuotedEmbed::Images(view)) => Ok(images(view)),
        Some(QuotedEmbed::External(view)) => Ok(Some(external(view))),
        None => Ok(None),
    })
}

fn images(view: ImagesView) -> Option<RenderNode> {
    let layout = ImageLayout::for_count(view.images.len())?;
    let images = view
        .images
        .into_iter()
        .map(|image| ImageItem {
            thumb: image.thumb,
            alt: image.alt,
        })
        .collect();
    Some(RenderNode::Images { layout, images })
}

fn external(view: ExternalView) -> RenderNode {
    let external = view.external;
    RenderNode::LinkCard {
        domain: link::nice_domain(&external.uri),
        href: external.uri,
        thumb: external.thumb,
        title: external.title,
        description: external.description,
    }
}

fn quoted_record(record: Option<&Value>) -> Result<RenderNode, EmbedError> {
    let record = record.ok_or(EmbedError::UnknownRecord)?;
    Ok(match QuotedRecord::classify(record)? {
        QuotedRecord::Post(post, embeds) => quote_card(post, embeds),
        QuotedRecord::List(list) => list_card(list),
        QuotedRecord::Feed(feed) => feed_card(feed),
        QuotedRecord::Labeler(labeler) => labeler_card(labeler),
        QuotedRecord::NotFound => RenderNode::notice(NOT_FOUND_MESSAGE),
        QuotedRecord::Blocked => RenderNode::notice(BLOCKED_MESSAGE),
    })
}

fn quote_card(post: ViewRecord, embeds: &[Value]) -> RenderNode {
    let embeds = embeds.iter().filter_map(resolve_nested).collect();
    RenderNode::QuoteCard {
        href: link::post_path(&post.author.did, &post.uri),
        text: post.text().map(str::to_string),
        indexed_at: post.indexed_at,
        author: AuthorLine {
            did: post.author.did,
            handle: post.author.handle,
            display_name: post.author.display_name,
            avatar: post.author.avatar,
        },
        embeds,
    }
}

fn list_card(list: ListView) -> RenderNode {
    let handle = &list.creator.handle;
    let subtitle = if list.is_moderation() {
        format!("Moderation list by @{handle}")
    } else {
        format!("User list by @{handle}")
    };
    RenderNode::GenericCard {
        href: link::list_path(&list.creator.did, &list.uri),
        image: list.avatar,
        title: list.name,
        subtitle,
        description: list.description.filter(|d| !d.is_empty()),
    }
}

fn feed_card(feed: GeneratorView) -> RenderNode {
    RenderNode::GenericCard {
        href: link::feed_path(&feed.creator.did, &feed.uri),
        image: feed.avatar,
        subtitle: format!("Feed by @{}", feed.creator.handle),
        description: Some(format!("Liked by {} users", feed.like_count.unwrap_or(0))),
        title: feed.display_name,
    }
}

fn labeler_card(labeler: LabelerView) -> RenderNode {
    let creator = labeler.creator;
    RenderNode::GenericCard {
        href: link::profile_path(&creator.did),
        title: creator.name_or_handle().to_string(),
        image: creator.avatar,
        subtitle: "Labeler".to_string(),
        description: None,
    }
}
