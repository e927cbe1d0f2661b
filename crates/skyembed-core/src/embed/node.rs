//! Render descriptors produced by the resolver.
//!
//! A [`RenderNode`] says which layout applies and what data it shows. It
//! carries no styling; the presentation layer decides how each node looks.

use serde::Serialize;

use crate::error::EmbedError;

/// Fallback text for an error node whose error had no message.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Notice shown for `app.bsky.embed.record#viewNotFound`.
pub const NOT_FOUND_MESSAGE: &str = "Quoted post not found - it may have been deleted";

/// Notice shown for `app.bsky.embed.record#viewBlocked`.
pub const BLOCKED_MESSAGE: &str = "The quoted post is blocked";

/// Arrangement of an image set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageLayout {
    /// One full-width image.
    Single,
    /// Two halves side by side in a 2:1 container.
    Pair,
    /// First image at 3/5 width, the other two stacked in the remaining 2/5.
    Triptych,
    /// 2x2 grid of square-cropped cells.
    Grid,
}

impl ImageLayout {
    /// Layout for an image count. Counts outside 1..=4 render nothing.
    pub fn for_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::Single),
            2 => Some(Self::Pair),
            3 => Some(Self::Triptych),
            4 => Some(Self::Grid),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageItem {
    pub thumb: String,
    pub alt: String,
}

/// Author identity line on a quote card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLine {
    pub did: String,
    pub handle: String,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
}

/// One node of the render tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderNode {
    Images {
        layout: ImageLayout,
        images: Vec<ImageItem>,
    },
    LinkCard {
        href: String,
        thumb: Option<String>,
        domain: String,
        title: String,
        description: String,
    },
    QuoteCard {
        /// App-relative link, e.g. `/profile/{did}/post/{rkey}`.
        href: String,
        author: AuthorLine,
        text: Option<String>,
        indexed_at: Option<String>,
        embeds: Vec<RenderNode>,
    },
    GenericCard {
        href: String,
        image: Option<String>,
        title: String,
        subtitle: String,
        description: Option<String>,
    },
    /// Terminal state for missing or blocked content. Not an error.
    Notice { message: String },
    /// Visible placeholder for anything the resolver could not render.
    Error { message: String },
    /// Children rendered top to bottom.
    Stack { children: Vec<RenderNode> },
}

impl RenderNode {
    pub fn notice(message: impl Into<String>) -> Self {
        Self::Notice {
            message: message.into(),
        }
    }

    /// Error node for an error, using the generic text when it has none.
    pub fn error(err: &EmbedError) -> Self {
        let message = err.to_string();
        let message = if message.is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        Self::Error { message }
    }

    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Images { .. } => "images",
            Self::LinkCard { .. } => "link_card",
            Self::QuoteCard { .. } => "quote_card",
            Self::GenericCard { .. } => "generic_card",
            Self::Notice { .. } => "notice",
            Self::Error { .. } => "error",
            Self::Stack { .. } => "stack",
        }
    }

    /// Whether this node or any descendant is an error placeholder.
    pub fn contains_error(&self) -> bool {
        match self {
            Self::Error { .. } => true,
            Self::QuoteCard { embeds, .. } => embeds.iter().any(Self::contains_error),
            Self::Stack { children } => children.iter().any(Self::contains_error),
            _ => false,
        }
    }
}
