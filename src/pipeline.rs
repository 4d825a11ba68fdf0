//! Pipeline orchestration.
//!
//! One run is a straight line: collect ids → single batched metadata fetch →
//! resolve every configured and linked id → render all cards → assemble the
//! fragment → inject into the host document.
//!
//! Error policy is all-or-nothing: any failure aborts the run and the
//! document is never written. Card artifacts already on disk when a later
//! card fails are left in place (they are overwritten on the next successful
//! run); there is no rollback.
//!
//! ## Parallel Rendering
//!
//! Cards are independent — disjoint output directories, no shared state — so
//! they render in parallel using [rayon](https://docs.rs/rayon). Collecting
//! `par_iter` results into a `Vec` preserves input order, so the assembled
//! showcase always matches the configured order no matter which card
//! finishes first.

use crate::card::{self, RenderError, RenderedCard};
use crate::config::{ItemConfig, ShowcaseConfig};
use crate::inject::{self, InjectError};
use crate::showcase;
use crate::workshop::{ItemDetails, MetadataSource, WorkshopError};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Workshop(#[from] WorkshopError),
    #[error("workshop item {0} missing from fetched metadata")]
    UnresolvedItem(u64),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Inject(#[from] InjectError),
}

/// Summary of a successful run, for CLI output.
#[derive(Debug)]
pub struct PipelineReport {
    pub cards: usize,
    pub document: PathBuf,
}

/// Everything one card render needs, resolved up front.
struct RenderJob<'a> {
    item: &'a ItemConfig,
    primary: ItemDetails,
    linked: Vec<ItemDetails>,
}

/// All ids a run must fetch: every configured id plus every linked-stats id,
/// deduplicated in first-occurrence order.
pub fn collect_ids(items: &[ItemConfig]) -> Vec<u64> {
    let mut seen = std::collections::HashSet::new();
    let mut ids = Vec::new();
    for item in items {
        for id in std::iter::once(item.id).chain(item.linked_stats.iter().copied()) {
            if seen.insert(id) {
                ids.push(id);
            }
        }
    }
    ids
}

/// Pair every configured item with its fetched metadata. Fails on the first
/// configured or linked id absent from the fetched set — before any
/// rendering, so an unresolvable config writes nothing.
fn resolve<'a>(
    items: &'a [ItemConfig],
    by_id: &HashMap<u64, ItemDetails>,
) -> Result<Vec<RenderJob<'a>>, PipelineError> {
    items
        .iter()
        .map(|item| {
            let primary = by_id
                .get(&item.id)
                .cloned()
                .ok_or(PipelineError::UnresolvedItem(item.id))?;
            let linked = item
                .linked_stats
                .iter()
                .map(|id| {
                    by_id
                        .get(id)
                        .cloned()
                        .ok_or(PipelineError::UnresolvedItem(*id))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(RenderJob {
                item,
                primary,
                linked,
            })
        })
        .collect()
}

/// Run the full pipeline against a metadata source.
pub fn run(
    config: &ShowcaseConfig,
    source: &impl MetadataSource,
) -> Result<PipelineReport, PipelineError> {
    let ids = collect_ids(&config.items);
    println!("==> Fetching metadata for {} workshop items", ids.len());
    let fetched = source.fetch_details(&ids)?;
    let by_id: HashMap<u64, ItemDetails> = fetched.into_iter().map(|d| (d.id, d)).collect();

    let jobs = resolve(&config.items, &by_id)?;

    println!("==> Rendering {} cards", jobs.len());
    let output_root = Path::new(&config.image_path);
    let results: Vec<Result<RenderedCard, RenderError>> = jobs
        .par_iter()
        .map(|job| card::render_card(&job.primary, &job.linked, job.item, &config.card, output_root))
        .collect();

    let mut cards = Vec::with_capacity(results.len());
    for result in results {
        let card = result?;
        println!("    {} → {}", card.source_id, card.thumbnail_path.display());
        cards.push(card);
    }

    let fragment = showcase::assemble(&cards, &config.items, &config.image_path, &config.icon);

    println!("==> Updating {}", config.readme_file);
    let document_path = PathBuf::from(&config.readme_file);
    let document = fs::read_to_string(&document_path)?;
    let updated = inject::inject(&document, &config.comment_tag, &fragment)?;
    fs::write(&document_path, updated)?;

    Ok(PipelineReport {
        cards: cards.len(),
        document: document_path,
    })
}

/// Offline validation for `check`: the host document exists and carries both
/// markers in order. No network, no writes.
pub fn check_document(config: &ShowcaseConfig) -> Result<(), PipelineError> {
    let document = fs::read_to_string(&config.readme_file)?;
    inject::verify_markers(&document, &config.comment_tag)?;
    Ok(())
}
