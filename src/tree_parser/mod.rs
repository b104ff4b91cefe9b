//! Tree-sitter based parser for component markup
//!
//! This module provides a single entry point that turns a `.jsx` / `.tsx`
//! file into the literal text runs found between its JSX tags.

mod jsx_parser;
mod utils;

pub use utils::LangType;

use crate::syntax::{ParseError, ParseResult};
use std::path::Path;

use jsx_parser::parse_markup;

/// A literal text segment taken verbatim from the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRun<'src> {
    /// Raw source text, including whitespace and newlines
    pub value: &'src str,
    /// 1-indexed line of the first character
    pub start_line: usize,
    /// 1-indexed column (in characters) of the first character
    pub start_column: usize,
    /// Byte offset of the first character in the file
    pub start_offset: usize,
}

/// Main parsing function - entry point for all file types
///
/// Text runs are returned in document order.
///
/// # Errors
///
/// Returns error if the extension has no grammar or the file does not parse
/// cleanly
pub fn parse<'src>(path: &Path, content: &'src str) -> ParseResult<Vec<TextRun<'src>>> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    let Some(lang) = LangType::from_extension(ext) else {
        return Err(ParseError::Unsupported {
            path: path.to_path_buf(),
        });
    };

    let mut runs = parse_markup(path, content, lang)?;

    // Sort runs by their position
    runs.sort_by_key(|run| run.start_offset);

    Ok(runs)
}
