//! Image set layouts.

use maud::{Markup, html};
use skyembed_core::embed::{ImageItem, ImageLayout};

use super::components::is_safe_url;

/// Render an image set in the layout the resolver picked.
pub fn render(layout: ImageLayout, images: &[ImageItem]) -> Markup {
    match (layout, images) {
        (ImageLayout::Single, [image]) => image_tag(image, Some("image-single")),
        (ImageLayout::Pair, [first, second]) => html! {
            div class="image-row pair" {
                (image_tag(first, None))
                (image_tag(second, None))
            }
        },
        (ImageLayout::Triptych, [primary, rest @ ..]) => html! {
            div class="image-row triptych" {
                (image_tag(primary, Some("primary")))
                div class="image-column" {
                    @for image in rest {
                        (image_tag(image, None))
                    }
                }
            }
        },
        // Grid, or a layout whose count does not line up: show every image.
        _ => html! {
            div class="image-grid" {
                @for image in images {
                    (image_tag(image, None))
                }
            }
        },
    }
}

fn image_tag(image: &ImageItem, class: Option<&str>) -> Markup {
    html! {
        @if is_safe_url(&image.thumb) {
            img class=[class] src=(image.thumb) alt=(image.alt) loading="lazy";
        } @else {
            div class="image-missing" title=(image.alt) {}
        }
    }
}
