//! Common utilities for tree-sitter parsing

use tree_sitter::{Language, Point};

/// Supported language types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangType {
    /// JavaScript with JSX
    Jsx,
    /// TypeScript with JSX
    Tsx,
    /// TypeScript without JSX, where `<T>value` is a type assertion
    TypeScript,
}

impl LangType {
    /// Get language type from file extension
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "jsx" | "js" | "mjs" | "cjs" => Some(Self::Jsx),
            "tsx" => Some(Self::Tsx),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            _ => None,
        }
    }

    /// Tree-sitter grammar for this language
    #[must_use]
    pub fn language(self) -> Language {
        match self {
            Self::Jsx => tree_sitter_javascript::LANGUAGE.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }
}

/// Convert a tree-sitter point at byte `offset` to a 1-indexed (line, column)
///
/// Tree-sitter columns count bytes; the returned column counts characters.
pub fn point_to_line_column(content: &str, offset: usize, point: Point) -> (usize, usize) {
    let line_start = offset.saturating_sub(point.column);
    let column = content
        .get(line_start..offset)
        .map_or(point.column, |prefix| prefix.chars().count());

    (point.row + 1, column + 1)
}
