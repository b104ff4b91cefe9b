//! Scan results and their serialized shape

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt::Write as _;

/// One located match of a content item's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    /// 1-indexed line in the file
    pub line_number: usize,
    /// The source line with the match delimited
    pub preview: String,
}

/// All occurrences of one content item within one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    pub file: String,
    pub occurrences: Vec<Occurrence>,
}

/// Content id -> files containing it, in processing order
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportMap {
    entries: Vec<(String, Vec<FileResult>)>,
}

impl ReportMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append results for a content item; items without results are not recorded
    pub(crate) fn push(&mut self, id: String, files: Vec<FileResult>) {
        if !files.is_empty() {
            self.entries.push((id, files));
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&[FileResult]> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, files)| files.as_slice())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FileResult])> {
        self.entries
            .iter()
            .map(|(id, files)| (id.as_str(), files.as_slice()))
    }

    /// Content ids present in the report, in order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Human-readable listing
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for (id, files) in self.iter() {
            let _ = writeln!(out, "{id}");
            for file in files {
                for occurrence in &file.occurrences {
                    let _ = writeln!(
                        out,
                        "  {}:{}  {}",
                        file.file,
                        occurrence.line_number,
                        occurrence.preview.trim()
                    );
                }
            }
        }

        out
    }
}

impl Serialize for ReportMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, files) in &self.entries {
            map.serialize_entry(id, files)?;
        }
        map.end()
    }
}

/// A file left out of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

/// Everything a completed scan produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub results: ReportMap,
    /// Files that could not be read or parsed, in enumeration order
    pub skipped: Vec<SkippedFile>,
    /// Number of files enumerated
    pub files_scanned: usize,
}

impl ScanReport {
    /// Pretty-printed JSON of the results
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.results)
    }
}
