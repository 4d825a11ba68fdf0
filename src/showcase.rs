//! Showcase fragment assembly.
//!
//! Turns rendered cards into the HTML fragment that gets injected into the
//! host document: one clickable block per card, in configured order, each
//! with its thumbnail, stats panel and a badge linking to the item's
//! workshop page. Assembly is pure — it references the artifact paths the
//! renderer committed to, it never touches the filesystem.

use crate::card::{PANEL_FILENAME, RenderedCard, THUMBNAIL_FILENAME};
use crate::config::{IconConfig, ItemConfig};
use maud::html;

const WORKSHOP_ITEM_URL: &str = "https://steamcommunity.com/sharedfiles/filedetails/?id=";

/// Canonical workshop page for an item.
pub fn item_page_url(id: u64) -> String {
    format!("{WORKSHOP_ITEM_URL}{id}")
}

/// Assemble the showcase fragment.
///
/// `cards` and `items` are parallel sequences in configured order; the
/// pipeline builds them that way and this function preserves it — no
/// dedup, no sorting, no filtering. `image_path` is the relative prefix the
/// host document resolves artifact references against.
pub fn assemble(
    cards: &[RenderedCard],
    items: &[ItemConfig],
    image_path: &str,
    icon: &IconConfig,
) -> String {
    debug_assert_eq!(cards.len(), items.len());

    html! {
        div {
            @for (card, item) in cards.iter().zip(items) {
                @let id = card.source_id;
                @let link = item.link.clone().unwrap_or_else(|| item_page_url(id));
                p {
                    a href=(link) {
                        img src={ (image_path) "/" (id) "/" (THUMBNAIL_FILENAME) }
                            alt={ "Workshop item " (id) };
                    }
                    a href=(link) {
                        img src={ (image_path) "/" (id) "/" (PANEL_FILENAME) }
                            alt={ "Stats for workshop item " (id) };
                    }
                    a href=(item_page_url(id)) {
                        img src=(icon.url) width=(icon.width) height=(icon.height)
                            alt="View on the Steam Workshop";
                    }
                }
            }
        }
    }
    .into_string()
}
