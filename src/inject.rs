//! Idempotent region injection between comment markers.
//!
//! The host document (typically a README) carries a pair of literal markers:
//!
//! ```text
//! <!-- WORKSHOP-SHOWCASE:START -->
//! <!-- WORKSHOP-SHOWCASE:END -->
//! ```
//!
//! [`inject`] replaces everything strictly between them, leaving the markers
//! and the rest of the document untouched. Re-running with identical content
//! is byte-stable, so the generator can run on every push without producing
//! drift.
//!
//! The end marker is searched only after the start marker's end. A stray
//! end-marker occurrence *before* the start marker can therefore never
//! produce a backwards region; if the only occurrence precedes the start
//! marker, injection fails cleanly as marker-not-found.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InjectError {
    #[error("marker `{marker}` not found in document")]
    MarkerNotFound { marker: String },
}

/// The literal marker pair for a configured tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

pub fn markers(tag: &str) -> Markers {
    Markers {
        start: format!("<!-- {tag}:START -->"),
        end: format!("<!-- {tag}:END -->"),
    }
}

/// Byte range strictly between the markers (after the start marker's end,
/// before the end marker's start).
fn find_region(document: &str, m: &Markers) -> Result<(usize, usize), InjectError> {
    let start_at = document
        .find(&m.start)
        .ok_or_else(|| InjectError::MarkerNotFound {
            marker: m.start.clone(),
        })?;
    let region_start = start_at + m.start.len();

    let end_rel = document[region_start..]
        .find(&m.end)
        .ok_or_else(|| InjectError::MarkerNotFound {
            marker: m.end.clone(),
        })?;

    Ok((region_start, region_start + end_rel))
}

/// Check that both markers are present and ordered, without mutating.
pub fn verify_markers(document: &str, tag: &str) -> Result<(), InjectError> {
    find_region(document, &markers(tag)).map(|_| ())
}

/// Replace the marked region with `content`, placed on its own line(s)
/// immediately after the start marker.
pub fn inject(document: &str, tag: &str, content: &str) -> Result<String, InjectError> {
    let m = markers(tag);
    let (region_start, region_end) = find_region(document, &m)?;

    let mut out = String::with_capacity(document.len() + content.len() + 2);
    out.push_str(&document[..region_start]);
    out.push('\n');
    out.push_str(content);
    if !content.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&document[region_end..]);
    Ok(out)
}
