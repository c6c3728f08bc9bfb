pub mod compare;
pub mod config;
pub mod diagnostic;
pub mod file_handler;
pub mod fixer;
pub mod member;
pub mod parser;
pub mod rules;
pub mod scanner;
pub mod source;

use std::ops::Range;

use anyhow::{Context, Result};
use swc_common::{comments::SingleThreadedComments, BytePos};

use crate::config::LintOptions;
use crate::diagnostic::Diagnostic;
use crate::fixer::{apply_edits, select_non_conflicting, TextEdit};
use crate::parser::TypeScriptParser;
use crate::rules::run_rules;
use crate::source::SourceText;

/// One fix pass only transposes members pairwise, so heavily shuffled lists
/// converge over several lint-fix rounds.
pub const MAX_FIX_PASSES: usize = 10;

/// Result of an iterative fix run. `diagnostics` describes the final text;
/// when `converged` is false the pass budget ran out with fixable
/// violations left, which callers should surface rather than retry.
#[derive(Debug)]
pub struct FixOutcome {
    pub code: String,
    pub passes: usize,
    pub converged: bool,
    pub diagnostics: Vec<Diagnostic>,
}

/// Lint TypeScript/TSX source text and report every ordering violation.
pub fn lint_source(source: &str, filename: &str, options: &LintOptions) -> Result<Vec<Diagnostic>> {
    let parser = TypeScriptParser::new();
    let (module, fm) = parser
        .parse(source, filename)
        .context("Failed to parse TypeScript code")?;

    let ranges = comment_ranges(&parser.comments, fm.start_pos);
    let src = SourceText::new(source, fm.start_pos, ranges);

    Ok(run_rules(&module, &parser.comments, &src, &options.rules))
}

/// Repeatedly lint, apply non-conflicting fixes, and re-lint until the text
/// is stable or the pass budget is exhausted.
pub fn fix_source(source: &str, filename: &str, options: &LintOptions) -> Result<FixOutcome> {
    let mut code = source.to_string();
    let mut passes = 0;

    loop {
        let diagnostics = lint_source(&code, filename, options)?;
        let fixes: Vec<Vec<TextEdit>> = diagnostics
            .iter()
            .filter_map(|d| d.fix.clone())
            .collect();

        if fixes.is_empty() {
            return Ok(FixOutcome {
                code,
                passes,
                converged: true,
                diagnostics,
            });
        }
        if passes == MAX_FIX_PASSES {
            return Ok(FixOutcome {
                code,
                passes,
                converged: false,
                diagnostics,
            });
        }

        code = apply_edits(&code, &select_non_conflicting(fixes));
        passes += 1;
    }
}

/// Every comment range in the file, leading and trailing, as file-relative
/// offsets. The trivia scanner in `SourceText` skips these instead of
/// re-lexing the text.
fn comment_ranges(comments: &SingleThreadedComments, start: BytePos) -> Vec<Range<usize>> {
    let (leading, trailing) = comments.clone().take_all();
    let mut ranges = Vec::new();
    for map in [leading, trailing] {
        for list in map.borrow().values() {
            for comment in list {
                ranges.push(
                    (comment.span.lo.0 - start.0) as usize..(comment.span.hi.0 - start.0) as usize,
                );
            }
        }
    }
    ranges
}
