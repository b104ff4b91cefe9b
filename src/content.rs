//! Managed copy supplied by the content service
//!
//! The service hands over an object of `id -> text` (or `id -> { text, .. }`
//! records). Key order in the document is the order items are scanned and
//! reported in.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::error::ContentError;

/// One managed text string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    pub id: String,
    pub text: String,
}

/// Ordered set of content items with unique ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSet {
    items: Vec<ContentItem>,
}

/// Either a bare string or a record carrying a `text` field
#[derive(Deserialize)]
#[serde(untagged)]
enum ContentValue {
    Text(String),
    Record { text: String },
}

impl From<ContentValue> for String {
    fn from(value: ContentValue) -> Self {
        match value {
            ContentValue::Text(text) | ContentValue::Record { text } => text,
        }
    }
}

impl ContentSet {
    /// Build a set from `(id, text)` pairs
    ///
    /// # Errors
    ///
    /// Returns `ContentError::DuplicateId` if an id repeats
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ContentError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut items = Vec::new();

        for (id, text) in pairs {
            let id = id.into();
            if !seen.insert(id.clone()) {
                return Err(ContentError::DuplicateId(id));
            }
            items.push(ContentItem {
                id,
                text: text.into(),
            });
        }

        Ok(Self { items })
    }

    /// Parse a JSON document
    ///
    /// # Errors
    ///
    /// Returns error if the JSON is malformed, not an object of strings or
    /// `{ "text": .. }` records, or repeats an id
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        let entries: RawEntries = serde_json::from_str(json)?;
        Self::from_pairs(entries.0)
    }

    /// Parse a JSON document from a reader
    ///
    /// # Errors
    ///
    /// Same as [`ContentSet::from_json_str`]
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ContentError> {
        let entries: RawEntries = serde_json::from_reader(reader)?;
        Self::from_pairs(entries.0)
    }

    /// Load from a file, or from stdin when `path` is `-`
    ///
    /// # Errors
    ///
    /// Returns error if the source cannot be read or does not parse
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        if path == Path::new("-") {
            return Self::from_reader(std::io::stdin().lock());
        }

        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&json)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentItem> {
        self.items.iter()
    }

    /// Shared, read-only view handed to scan workers
    #[must_use]
    pub fn to_shared(&self) -> Arc<[ContentItem]> {
        Arc::from(self.items.as_slice())
    }
}

impl<'a> IntoIterator for &'a ContentSet {
    type Item = &'a ContentItem;
    type IntoIter = std::slice::Iter<'a, ContentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Entries of the JSON object in document order, duplicates included
struct RawEntries(Vec<(String, String)>);

struct RawEntriesVisitor;

impl<'de> Visitor<'de> for RawEntriesVisitor {
    type Value = RawEntries;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping content ids to text")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RawEntries, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));

        while let Some((id, value)) = access.next_entry::<String, ContentValue>()? {
            entries.push((id, value.into()));
        }

        Ok(RawEntries(entries))
    }
}

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RawEntriesVisitor)
    }
}
