//! File processing utilities

use std::path::{Path, PathBuf};

use crate::content::ContentItem;
use crate::error::FileError;
use crate::matcher::{find_occurrences, Highlight, LineIndex};
use crate::report::Occurrence;
use crate::syntax::ParseResult;
use crate::tree_parser;

/// Occurrences of one content item in one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemMatches {
    /// Index of the item in the scanned content set
    pub item: usize,
    pub occurrences: Vec<Occurrence>,
}

/// Parse `content` once and match it against every item
///
/// Only items with at least one occurrence are returned, in item order.
///
/// # Errors
///
/// Returns error if the file does not parse
pub fn process_file_content(
    path: &Path,
    content: &str,
    items: &[ContentItem],
    highlight: &Highlight,
) -> ParseResult<Vec<ItemMatches>> {
    let runs = tree_parser::parse(path, content)?;
    if runs.is_empty() {
        return Ok(Vec::new());
    }

    let lines = LineIndex::new(content);

    let matches = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let occurrences: Vec<Occurrence> = runs
                .iter()
                .flat_map(|run| find_occurrences(run, &item.text, &lines, highlight))
                .collect();

            (!occurrences.is_empty()).then_some(ItemMatches {
                item: index,
                occurrences,
            })
        })
        .collect();

    Ok(matches)
}

/// Process file from disk
///
/// # Errors
///
/// Returns error if the file cannot be read or does not parse
pub async fn process_file(
    path: PathBuf,
    items: &[ContentItem],
    highlight: &Highlight,
) -> Result<Vec<ItemMatches>, FileError> {
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| FileError::Read {
            path: path.clone(),
            source,
        })?;

    let matches = process_file_content(&path, &content, items, highlight)?;
    tracing::debug!(file = %path.display(), items = matches.len(), "processed file");

    Ok(matches)
}
