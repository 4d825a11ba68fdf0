//! Card rendering — one thumbnail + stats panel pair per showcased item.
//!
//! The module is split into:
//! - **Layout**: Pure geometry ([`CardLayout`], aspect-fit math)
//! - **Stats**: Pure counter aggregation over primary + linked items
//! - **Thumbnail**: Image loading, contain-fit compositing, PNG encode
//! - **Panel**: Fixed SVG template from title + counters
//!
//! [`render_card`] combines the four and persists both artifacts under
//! `<output_root>/<item id>/` at fixed names the showcase assembler relies
//! on.

pub mod layout;
pub mod panel;
pub mod stats;
pub mod thumbnail;

pub use layout::{CardLayout, FitTransform, fit_contain};
pub use stats::{StatTotals, aggregate, format_count};

use crate::config::ItemConfig;
use crate::workshop::ItemDetails;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Thumbnail filename under the per-item directory.
pub const THUMBNAIL_FILENAME: &str = "thumbnail.png";
/// Stats panel filename under the per-item directory.
pub const PANEL_FILENAME: &str = "stats.svg";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to load image source {origin}: {reason}")]
    ImageLoad { origin: String, reason: String },
    #[error("PNG encode failed: {0}")]
    Encode(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Artifacts produced for one showcased item.
#[derive(Debug, Clone)]
pub struct RenderedCard {
    pub source_id: u64,
    pub thumbnail_path: PathBuf,
    pub panel_path: PathBuf,
}

/// Render one card: thumbnail PNG plus stats SVG, persisted under
/// `<output_root>/<id>/`.
///
/// Config overrides win over fetched metadata for the image source and the
/// display title. Counters are summed over `{primary} ∪ linked`. Directory
/// creation is idempotent; rendering two different items never touches the
/// same directory.
pub fn render_card(
    primary: &ItemDetails,
    linked: &[ItemDetails],
    item: &ItemConfig,
    layout: &CardLayout,
    output_root: &Path,
) -> Result<RenderedCard, RenderError> {
    let source_ref = item.image.as_deref().unwrap_or(&primary.preview_url);
    let title = item.title.as_deref().unwrap_or(&primary.title);
    let totals = aggregate(primary, linked);

    let item_dir = output_root.join(primary.id.to_string());
    std::fs::create_dir_all(&item_dir)?;

    let source = thumbnail::load_source(source_ref)?;
    let canvas = thumbnail::compose(&source, layout.thumb_width, layout.height);
    let thumbnail_path = item_dir.join(THUMBNAIL_FILENAME);
    thumbnail::write_png(&canvas, &thumbnail_path)?;

    let panel_path = item_dir.join(PANEL_FILENAME);
    std::fs::write(&panel_path, panel::render_panel(layout, title, &totals))?;

    Ok(RenderedCard {
        source_id: primary.id,
        thumbnail_path,
        panel_path,
    })
}
