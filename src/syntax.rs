//! Core types for the markup syntax tree.
//!
//! Tree-sitter exposes node kinds as strings. Everything the parser cares
//! about is folded into the closed [`MarkupKind`] set so traversal code can
//! match on it exhaustively.

use std::path::PathBuf;
use thiserror::Error;

/// Kind of a node inside JSX markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkupKind {
    /// `<div>...</div>` or `<>...</>`
    Element,
    /// `<img />`
    SelfClosingElement,
    /// `<div ...>`
    OpeningTag,
    /// `</div>`
    ClosingTag,
    /// `name="value"` or `{...spread}` inside a tag
    Attribute,
    /// `{expression}` between element children
    ExpressionContainer,
    /// Literal text (including character references like `&amp;`)
    Text,
    /// Anything else: plain JavaScript/TypeScript code
    Code,
}

impl MarkupKind {
    /// Classify a tree-sitter node kind
    #[must_use]
    pub fn of(kind: &str) -> Self {
        match kind {
            "jsx_element" => Self::Element,
            "jsx_self_closing_element" => Self::SelfClosingElement,
            "jsx_opening_element" => Self::OpeningTag,
            "jsx_closing_element" => Self::ClosingTag,
            "jsx_attribute" => Self::Attribute,
            "jsx_expression" => Self::ExpressionContainer,
            "jsx_text" | "html_character_reference" => Self::Text,
            _ => Self::Code,
        }
    }
}

/// Parse error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// File contains syntax errors
    #[error("{}: syntax error at line {line}, column {column}", .path.display())]
    SyntaxError {
        path: PathBuf,
        line: usize,
        column: usize,
    },
    /// Parser gave up without producing a tree
    #[error("{}: parser produced no syntax tree", .path.display())]
    NoTree { path: PathBuf },
    /// Language configuration error
    #[error("{}: language error: {message}", .path.display())]
    LanguageError { path: PathBuf, message: String },
    /// Extension has no grammar
    #[error("{}: no markup grammar for this file extension", .path.display())]
    Unsupported { path: PathBuf },
}

impl ParseError {
    /// The file the error belongs to
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::SyntaxError { path, .. }
            | Self::NoTree { path }
            | Self::LanguageError { path, .. }
            | Self::Unsupported { path } => path,
        }
    }

    /// The error message without the leading file path
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::SyntaxError { line, column, .. } => {
                format!("syntax error at line {line}, column {column}")
            }
            Self::NoTree { .. } => "parser produced no syntax tree".to_string(),
            Self::LanguageError { message, .. } => format!("language error: {message}"),
            Self::Unsupported { .. } => "no markup grammar for this file extension".to_string(),
        }
    }
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
