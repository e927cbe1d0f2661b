//! HTML rendering of resolved embeds.
//!
//! The core resolver decides the layout; this module only turns each
//! [`RenderNode`] into markup. All rendering uses [maud](https://maud.lambda.xyz/)
//! for compile-time HTML generation with automatic escaping of dynamic values.

pub mod cards;
pub mod components;
pub mod images;

use maud::{Markup, html};
use skyembed_core::RenderNode;

use components::{message_box, page_shell};

/// Render one node of the tree. `base_url` prefixes app-relative links.
pub fn render_node(node: &RenderNode, base_url: &str) -> Markup {
    match node {
        RenderNode::Images { layout, images } => images::render(*layout, images),
        RenderNode::LinkCard {
            href,
            thumb,
            domain,
            title,
            description,
        } => cards::link_card(href, thumb.as_deref(), domain, title, description),
        RenderNode::QuoteCard {
            href,
            author,
            text,
            indexed_at,
            embeds,
        } => cards::quote_card(
            href,
            author,
            text.as_deref(),
            indexed_at.as_deref(),
            embeds,
            base_url,
        ),
        RenderNode::GenericCard {
            href,
            image,
            title,
            subtitle,
            description,
        } => cards::generic_card(
            href,
            image.as_deref(),
            title,
            subtitle,
            description.as_deref(),
            base_url,
        ),
        RenderNode::Notice { message } => message_box(message, false),
        RenderNode::Error { message } => message_box(message, true),
        RenderNode::Stack { children } => html! {
            div class="stack" {
                @for child in children {
                    (render_node(child, base_url))
                }
            }
        },
    }
}

/// Render the embed container. An absent node gives an empty container.
pub fn render_embed(node: Option<&RenderNode>, base_url: &str) -> Markup {
    html! {
        div class="embed" {
            @if let Some(node) = node {
                (render_node(node, base_url))
            }
        }
    }
}

/// Render a complete HTML page for an embed.
pub fn render_page(node: Option<&RenderNode>, base_url: &str, site_name: &str) -> Markup {
    page_shell(site_name, render_embed(node, base_url))
}
