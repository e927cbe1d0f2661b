//! Card layouts: external links, quoted posts, and generic record cards.

use maud::{Markup, html};
use skyembed_core::embed::{AuthorLine, RenderNode};

use super::components::{app_link, format_timestamp, is_safe_url, truncate};

/// Longest title or description shown on a link card, in bytes.
const LINK_TEXT_MAX: usize = 300;

/// Link card for an external URL.
///
/// Unsafe URIs (anything but http/https) render as an inert card.
pub fn link_card(
    href: &str,
    thumb: Option<&str>,
    domain: &str,
    title: &str,
    description: &str,
) -> Markup {
    let body = html! {
        @if let Some(thumb) = thumb.filter(|t| is_safe_url(t)) {
            img class="link-card-thumb" src=(thumb) alt="" loading="lazy";
        }
        div class="link-card-body" {
            p class="link-card-domain" { (domain) }
            p class="link-card-title" { (truncate(title, LINK_TEXT_MAX)) }
            @if !description.is_empty() {
                p class="link-card-description" { (truncate(description, LINK_TEXT_MAX)) }
            }
        }
    };

    html! {
        @if is_safe_url(href) {
            a class="link-card" href=(href) rel="nofollow noopener" { (body) }
        } @else {
            div class="link-card" { (body) }
        }
    }
}

/// Quote card for an embedded post.
///
/// Only the header and text are wrapped in the link, so nested link cards
/// do not end up inside another anchor.
pub fn quote_card(
    href: &str,
    author: &AuthorLine,
    text: Option<&str>,
    indexed_at: Option<&str>,
    embeds: &[RenderNode],
    base_url: &str,
) -> Markup {
    let timestamp = indexed_at.and_then(format_timestamp);

    html! {
        div class="quote-card" {
            a class="quote-card-link" href=(app_link(base_url, href)) {
                div class="quote-card-author" {
                    @match author.avatar.as_deref().filter(|a| is_safe_url(a)) {
                        Some(avatar) => {
                            img class="quote-card-avatar" src=(avatar) alt="";
                        }
                        None => {
                            div class="quote-card-avatar" {}
                        }
                    }
                    @if let Some(name) = author.display_name.as_deref().filter(|n| !n.is_empty()) {
                        span class="quote-card-name" { (name) }
                    }
                    span class="quote-card-handle" { "@" (author.handle) }
                    @if let Some((display, iso)) = timestamp {
                        time class="quote-card-time" datetime=(iso) { (display) }
                    }
                }
                @if let Some(text) = text {
                    p class="quote-card-text" { (text) }
                }
            }
            @for embed in embeds {
                (super::render_node(embed, base_url))
            }
        }
    }
}

/// Titled card with a small image, used for lists, feeds and labelers.
pub fn generic_card(
    href: &str,
    image: Option<&str>,
    title: &str,
    subtitle: &str,
    description: Option<&str>,
    base_url: &str,
) -> Markup {
    html! {
        a class="generic-card" href=(app_link(base_url, href)) {
            div class="generic-card-header" {
                @match image.filter(|i| is_safe_url(i)) {
                    Some(image) => {
                        img class="generic-card-image" src=(image) alt=(title);
                    }
                    None => {
                        div class="generic-card-placeholder" {}
                    }
                }
                div {
                    p class="generic-card-title" { (title) }
                    p class="generic-card-subtitle" { (subtitle) }
                }
            }
            @if let Some(description) = description {
                p class="generic-card-description" { (description) }
            }
        }
    }
}
