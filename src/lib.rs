//! copy-scout library - locate managed copy inside JSX/TSX markup

#![warn(clippy::all, clippy::pedantic)]

pub mod aggregator;
pub mod config;
pub mod content;
pub mod error;
pub mod file_processor;
pub mod matcher;
pub mod report;
pub mod scanner;
pub mod syntax;
pub mod tree_parser;

pub use aggregator::scan;
pub use config::ScanConfig;
pub use content::{ContentItem, ContentSet};
pub use error::{Error, FileError, ParseError, ScanError};
pub use report::{FileResult, Occurrence, ReportMap, ScanReport, SkippedFile};
