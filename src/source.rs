use std::ops::Range;

use swc_common::{BytePos, Span};

/// Position and trivia oracle over one parsed file.
///
/// SWC spans carry global byte positions, so every lookup goes through the
/// file's start position first. Comment ranges come from the parser's
/// comment map, which means trivia skipping never has to re-lex the text.
pub struct SourceText<'a> {
    text: &'a str,
    start: BytePos,
    line_starts: Vec<usize>,
    comment_ranges: Vec<Range<usize>>,
}

impl<'a> SourceText<'a> {
    pub fn new(text: &'a str, start: BytePos, mut comment_ranges: Vec<Range<usize>>) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        comment_ranges.sort_by_key(|r| r.start);

        Self {
            text,
            start,
            line_starts,
            comment_ranges,
        }
    }

    /// File-relative offset of a global byte position.
    pub fn rel(&self, pos: BytePos) -> usize {
        (pos.0 - self.start.0) as usize
    }

    pub fn span_range(&self, span: Span) -> Range<usize> {
        self.rel(span.lo)..self.rel(span.hi)
    }

    pub fn slice(&self, range: Range<usize>) -> &'a str {
        &self.text[range]
    }

    /// Zero-based line index containing `offset`.
    fn line_of(&self, offset: usize) -> usize {
        self.line_starts.partition_point(|&s| s <= offset) - 1
    }

    /// One-based (line, column) of `offset`.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = self.line_of(offset);
        let col = self.text[self.line_starts[line]..offset].chars().count();
        (line + 1, col + 1)
    }

    fn comment_covering(&self, pos: usize) -> Option<&Range<usize>> {
        let idx = self.comment_ranges.partition_point(|r| r.start <= pos);
        let candidate = self.comment_ranges.get(idx.checked_sub(1)?)?;
        (candidate.end > pos).then_some(candidate)
    }

    fn comment_starting_at(&self, pos: usize) -> Option<&Range<usize>> {
        let idx = self.comment_ranges.partition_point(|r| r.start < pos);
        self.comment_ranges.get(idx).filter(|r| r.start == pos)
    }

    /// End offset of the last token before `offset`, skipping whitespace
    /// and comments. `None` when only trivia precedes.
    fn prev_token_end(&self, mut offset: usize) -> Option<usize> {
        while offset > 0 {
            if let Some(range) = self.comment_covering(offset - 1) {
                offset = range.start;
                continue;
            }
            if self.text.as_bytes()[offset - 1].is_ascii_whitespace() {
                offset -= 1;
                continue;
            }
            return Some(offset);
        }
        None
    }

    fn skip_trivia(&self, mut offset: usize) -> Option<usize> {
        loop {
            if offset >= self.text.len() {
                return None;
            }
            if let Some(range) = self.comment_starting_at(offset) {
                offset = range.end;
                continue;
            }
            if self.text.as_bytes()[offset].is_ascii_whitespace() {
                offset += 1;
                continue;
            }
            return Some(offset);
        }
    }

    /// The separator token immediately following `offset`, if the very next
    /// token is a `,` or `;`.
    pub fn punctuator_after(&self, offset: usize) -> Option<(usize, char)> {
        let pos = self.skip_trivia(offset)?;
        match self.text.as_bytes()[pos] {
            b',' => Some((pos, ',')),
            b';' => Some((pos, ';')),
            _ => None,
        }
    }

    /// Indent range of the entity starting at `offset`: the line's
    /// indentation when it is the first token on its line, otherwise the
    /// whitespace after the previous sibling token.
    pub fn indent_range(&self, offset: usize) -> Range<usize> {
        match self.prev_token_end(offset) {
            Some(prev_end) if self.line_of(prev_end - 1) == self.line_of(offset) => {
                (prev_end + 1).min(offset)..offset
            }
            _ => self.line_starts[self.line_of(offset)]..offset,
        }
    }

    pub fn indent_text(&self, offset: usize) -> &'a str {
        self.slice(self.indent_range(offset))
    }

    /// Range to delete when removing the entity at `range`: the full
    /// line(s) including EOL when nothing but indentation precedes it,
    /// otherwise just the range itself.
    pub fn line_range(&self, range: Range<usize>) -> Range<usize> {
        let indent_start = self.indent_range(range.start).start;
        match self.line_starts.binary_search(&indent_start) {
            Ok(line) => {
                let lines = 1 + self.line_of(range.end) - line;
                let end = self
                    .line_starts
                    .get(line + lines)
                    .copied()
                    .unwrap_or(self.text.len());
                self.line_starts[line]..end
            }
            Err(_) => range,
        }
    }
}
