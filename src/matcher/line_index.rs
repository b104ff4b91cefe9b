//! Line lookup over a whole file for building previews

/// Byte offsets of every line start in a file
#[derive(Debug, Clone)]
pub struct LineIndex<'src> {
    content: &'src str,
    starts: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    #[must_use]
    pub fn new(content: &'src str) -> Self {
        let starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self { content, starts }
    }

    /// Number of lines (a trailing newline opens an empty last line)
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Byte offset where 1-indexed `line` starts
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        line.checked_sub(1).and_then(|i| self.starts.get(i).copied())
    }

    /// Text of 1-indexed `line`, without its line terminator
    #[must_use]
    pub fn line(&self, line: usize) -> Option<&'src str> {
        let start = self.line_start(line)?;
        let end = self
            .starts
            .get(line)
            .map_or(self.content.len(), |next| next - 1);

        let text = &self.content[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// 1-indexed line containing byte `offset`
    #[must_use]
    pub fn line_of(&self, offset: usize) -> usize {
        // Binary search for the last line start at or before offset
        self.starts.partition_point(|&start| start <= offset)
    }
}
