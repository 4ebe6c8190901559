//! Where raw passage text comes from.

use crate::reference::{ReferenceError, ReferenceRange, parse_reference};
use crate::reflow::BreakStyle;
use crate::structure::{StructureError, structure};
use std::error::Error as StdError;

/// A provider of raw passage text, such as a remote scripture API.
///
/// The returned text must follow the plain layout [`structure`] expects.
pub trait PassageSource {
    type Error: StdError + Send + Sync + 'static;

    fn fetch_passage(&self, query: &str) -> Result<String, Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum PassageError {
    #[error(transparent)]
    Reference(#[from] ReferenceError),
    #[error("Failed to fetch {query}: {source}")]
    Fetch {
        query: String,
        source: Box<dyn StdError + Send + Sync>,
    },
    #[error(transparent)]
    Structure(#[from] StructureError),
}

/// The query to send to a source for `range`.
///
/// Books with a single chapter are cited without it, so Jude 3 is asked for
/// as `Jude 3` rather than `Jude 1:3`.
pub fn passage_query(range: &ReferenceRange) -> String {
    let book = range.book();
    if book.chapter_count() > 1 {
        return range.to_string();
    }

    let mut query = book.name().to_string();
    if range.start.verse > 0 {
        query.push_str(&format!(" {}", range.start.verse));
        if let Some(end) = range.end.filter(|end| end.verse > range.start.verse) {
            query.push_str(&format!("-{}", end.verse));
        }
    }
    query
}

/// Parse `query`, fetch the passage once and lay it out as markdown.
pub fn render_passage<S: PassageSource>(
    source: &S,
    query: &str,
    style: BreakStyle,
) -> Result<String, PassageError> {
    let range = parse_reference(query)?;
    let request = passage_query(&range);
    log::debug!("fetching {request:?} for {query:?}");

    let raw = source
        .fetch_passage(&request)
        .map_err(|err| PassageError::Fetch {
            query: request.clone(),
            source: Box::new(err),
        })?;
    Ok(structure(&raw, Some(&range), style)?)
}
