use crate::config::SortingPolicy;
use crate::fixer::TextEdit;
use crate::rules::RuleKind;
use crate::scanner::OrderViolation;

/// One reported ordering problem, located at the out-of-order member.
/// `fix` is absent when the member already occupies its own target slot
/// (nothing to transpose) — the violation is then report-only.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub rule: RuleKind,
    pub message: String,
    pub line: usize,
    pub col: usize,
    pub fix: Option<Vec<TextEdit>>,
}

impl Diagnostic {
    pub fn is_fixable(&self) -> bool {
        self.fix.is_some()
    }
}

/// Fills the rule's message template from the violation and the rendered
/// policy qualifiers, e.g.
/// `Expected interface keys to be in required first ascending order. 'b' should be before 'a'.`
pub fn render_message(
    kind: RuleKind,
    policy: &SortingPolicy,
    violation: &OrderViolation,
) -> String {
    let insensitive = if policy.case_sensitive { "" } else { "insensitive " };
    let natural = if policy.natural { "natural " } else { "" };
    let required_first = if kind.honors_required_first() && policy.required_first {
        "required first "
    } else {
        ""
    };
    let this_name = violation.this_name.as_deref().unwrap_or("<unnamed>");
    let prev_name = violation.prev_name.as_deref().unwrap_or("<unnamed>");

    format!(
        "Expected {} to be in {}{}{}{}ending order. '{}' should be before '{}'.",
        kind.subject(),
        required_first,
        natural,
        insensitive,
        policy.order.word(),
        this_name,
        prev_name,
    )
}
