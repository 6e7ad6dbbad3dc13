//! Line and column lookup for spans.

use es_ir::Span;

/// Pre-computed line offset table.
///
/// Builds a table of byte offsets for each line start so lookups are a
/// binary search instead of a scan.
///
/// ```
/// use es_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "line1\nline2\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
/// assert_eq!(table.offset_to_line_col(source, 14), (3, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        offsets.extend(
            memchr::memchr_iter(b'\n', source.as_bytes())
                .map(|i| u32::try_from(i + 1).unwrap_or(u32::MAX)),
        );
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based (line, column). The column counts characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.line_start_offset(line).unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let col = source
            .get(line_start..end)
            .map_or(0, |text| text.chars().count());
        (line, u32::try_from(col).unwrap_or(u32::MAX - 1) + 1)
    }

    /// Byte offset of a 1-based line's start.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Text of a 1-based line, without its newline.
    pub fn line_text<'a>(&self, source: &'a str, line: u32) -> Option<&'a str> {
        let start = self.line_start_offset(line)? as usize;
        let end = self
            .line_start_offset(line + 1)
            .map_or(source.len(), |next| (next as usize).saturating_sub(1));
        source
            .get(start..end.max(start))
            .map(|text| text.trim_end_matches('\r'))
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// 1-based line where `span` starts.
///
/// For repeated lookups use [`LineOffsetTable`].
pub fn line_number(source: &str, span: Span) -> u32 {
    LineOffsetTable::build(source).line_from_offset(span.start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_lookup() {
        let source = "a\nbb\n\nccc";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_count(), 4);
        assert_eq!(table.line_from_offset(0), 1);
        assert_eq!(table.line_from_offset(2), 2);
        assert_eq!(table.line_from_offset(5), 3);
        assert_eq!(table.line_from_offset(6), 4);
        assert_eq!(table.offset_to_line_col(source, 8), (4, 3));
    }

    #[test]
    fn test_line_text() {
        let source = "first\r\nsecond\nthird";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_text(source, 1), Some("first"));
        assert_eq!(table.line_text(source, 2), Some("second"));
        assert_eq!(table.line_text(source, 3), Some("third"));
        assert_eq!(table.line_text(source, 4), None);
        assert_eq!(table.line_text(source, 0), None);
    }

    #[test]
    fn test_column_counts_chars() {
        let source = "é = 1";
        let table = LineOffsetTable::build(source);
        // `=` sits at byte 3, the third character.
        assert_eq!(table.offset_to_line_col(source, 3), (1, 3));
    }

    #[test]
    fn test_line_number() {
        assert_eq!(line_number("x\ny\nz", Span::new(4, 5)), 3);
    }
}
