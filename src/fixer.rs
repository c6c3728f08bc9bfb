use std::ops::Range;

use crate::member::Member;
use crate::source::SourceText;

/// One splice against the original source text. `start == end` is a pure
/// insertion. Edits are always expressed against the unmodified text and
/// applied in a single batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl TextEdit {
    fn insert(at: usize, text: String) -> Self {
        Self {
            start: at,
            end: at,
            text,
        }
    }

    fn remove(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
            text: String::new(),
        }
    }
}

/// Edits that transpose `current` and `replace` textually, carrying each
/// member's leading comments along and keeping trailing separators legal.
///
/// Both members are treated symmetrically: each is re-rendered just before
/// the other's original position and its original occurrence is removed.
/// The edits of one swap never overlap.
pub fn plan_swap(
    src: &SourceText,
    members: &[Member],
    target: &[usize],
    current: usize,
    replace: usize,
) -> Vec<TextEdit> {
    let mut edits = Vec::new();

    for &index in &[current, replace] {
        let other = if index == current { replace } else { current };
        let node = &members[index];
        let node_range = src.span_range(node.span);
        let other_start = src.span_range(members[other].span).start;

        // Moving the last node into its final slot means no member follows
        // it, so the synthesized comma would dangle.
        let is_last_replacing_last =
            target[index] == members.len() - 1 && target[index] == other;

        let mut text = String::new();
        if !node.leading_comments.is_empty() {
            text.push_str(src.indent_text(node_range.start));
        }
        text.push_str(src.slice(node_range.clone()));

        // The member's own separator token moves with it.
        let punctuator = src.punctuator_after(node_range.end);
        if let Some((pos, _)) = punctuator {
            edits.push(TextEdit::remove(pos..pos + 1));
        }
        if !text.ends_with(',') && !text.ends_with(';') {
            text.push(punctuator.map(|(_, ch)| ch).unwrap_or(','));
        }
        if is_last_replacing_last && text.ends_with(',') {
            text.pop();
        }

        if !node.leading_comments.is_empty() {
            let mut comment_text = String::new();
            for comment in &node.leading_comments {
                comment_text.push_str(src.slice(src.span_range(*comment)));
                comment_text.push('\n');
            }
            edits.push(TextEdit::insert(other_start, comment_text));
        }

        edits.push(TextEdit::insert(other_start, text));
        edits.push(TextEdit::remove(node_range));
        for comment in &node.leading_comments {
            edits.push(TextEdit::remove(src.line_range(src.span_range(*comment))));
        }
    }

    edits
}

/// Applies a batch of non-overlapping edits in one pass. Insertions at the
/// same offset keep their submission order.
pub fn apply_edits(source: &str, edits: &[TextEdit]) -> String {
    let mut sorted: Vec<&TextEdit> = edits.iter().collect();
    // Ties break on the end offset so an insertion lands before a removal
    // that starts at the same position.
    sorted.sort_by_key(|e| (e.start, e.end));

    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;
    for edit in sorted {
        if edit.start < cursor {
            // Overlap means a planner bug; skip the edit rather than
            // corrupt the output.
            debug_assert!(false, "overlapping text edits");
            continue;
        }
        output.push_str(&source[cursor..edit.start]);
        output.push_str(&edit.text);
        cursor = edit.end;
    }
    output.push_str(&source[cursor..]);
    output
}

/// Picks a maximal prefix of fixes whose affected ranges do not conflict,
/// greedily by position. Skipped fixes are picked up by a later pass.
pub fn select_non_conflicting(fixes: Vec<Vec<TextEdit>>) -> Vec<TextEdit> {
    let mut hulls: Vec<(Range<usize>, Vec<TextEdit>)> = fixes
        .into_iter()
        .filter(|edits| !edits.is_empty())
        .map(|edits| {
            let start = edits.iter().map(|e| e.start).min().unwrap_or(0);
            let end = edits.iter().map(|e| e.end).max().unwrap_or(0);
            (start..end, edits)
        })
        .collect();
    hulls.sort_by_key(|(hull, _)| hull.start);

    let mut selected = Vec::new();
    let mut last_end = 0;
    for (hull, edits) in hulls {
        if hull.start < last_end {
            continue;
        }
        last_end = hull.end;
        selected.extend(edits);
    }
    selected
}
