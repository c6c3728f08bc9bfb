// Tests for the sort-interface rule: interface bodies must follow the
// configured key ordering, with fixes that preserve comments and
// separators.

use pretty_assertions::assert_eq;
use sortkeys::{
    config::{LintOptions, SortingOrder, SortingPolicy},
    diagnostic::Diagnostic,
    fix_source, lint_source,
    rules::RuleKind,
};

fn lint_with(source: &str, policy: SortingPolicy) -> Vec<Diagnostic> {
    let options = LintOptions::with_policy(&[RuleKind::Interface], policy);
    lint_source(source, "test.ts", &options).unwrap()
}

fn lint(source: &str) -> Vec<Diagnostic> {
    lint_with(source, SortingPolicy::default())
}

fn fix_with(source: &str, policy: SortingPolicy) -> String {
    let options = LintOptions::with_policy(&[RuleKind::Interface], policy);
    let outcome = fix_source(source, "test.ts", &options).unwrap();
    assert!(outcome.converged);
    outcome.code
}

fn fix(source: &str) -> String {
    fix_with(source, SortingPolicy::default())
}

#[test]
fn test_sorted_interface_is_valid() {
    assert!(lint("interface Foo { a: string; b: string; }").is_empty());
    assert!(lint("interface Foo { a?: string; b?: string; }").is_empty());
    assert!(lint("interface Foo { a?: string; b: string; }").is_empty());
    assert!(lint("interface Foo extends Bar { a: string; b: string; }").is_empty());
}

#[test]
fn test_empty_and_single_member_interfaces_are_valid() {
    assert!(lint("interface Foo {}").is_empty());
    assert!(lint("interface Foo { a: string; }").is_empty());
}

#[test]
fn test_trailing_comments_do_not_affect_order() {
    let source = "interface FooBarWithComment {\n  a: string; // comment on a\n  b: string;\n  c: string;\n}\n";
    assert!(lint(source).is_empty());
}

#[test]
fn test_nested_type_literal_is_not_flagged_by_interface_rule() {
    let source = "export interface MyComponentProps {\n  a?: string;\n  b?: {\n    c: string;\n    b: string;\n    a: string;\n  };\n}\n";
    assert!(lint(source).is_empty());
}

#[test]
fn test_unsorted_interface_reports_one_violation() {
    let diagnostics = lint("interface Foo {\n  b: string;\n  a: string;\n  c: string;\n}\n");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Expected interface keys to be in ascending order. 'a' should be before 'b'."
    );
    assert_eq!(diagnostics[0].line, 3);
    assert_eq!(diagnostics[0].col, 3);
    assert!(diagnostics[0].is_fixable());
}

#[test]
fn test_fix_swaps_two_members() {
    let fixed = fix("interface Foo {\n  b: string;\n  a: string;\n}\n");
    assert_eq!(fixed, "interface Foo {\n  a: string;\n  b: string;\n}\n");
}

#[test]
fn test_fix_with_extends_clause() {
    let fixed = fix("interface Foo extends Bar {\n  b: string;\n  a: string;\n}\n");
    assert_eq!(fixed, "interface Foo extends Bar {\n  a: string;\n  b: string;\n}\n");
}

#[test]
fn test_fix_three_members() {
    let fixed = fix("interface Foo {\n  b: string;\n  a: string;\n  c: string;\n}\n");
    assert_eq!(
        fixed,
        "interface Foo {\n  a: string;\n  b: string;\n  c: string;\n}\n"
    );
}

#[test]
fn test_fix_moves_leading_comment_with_member() {
    let source = "interface Foo {\n  // comment for b\n  b: string;\n  a: string;\n}\n";
    let fixed = fix(source);
    assert_eq!(
        fixed,
        "interface Foo {\n  a: string;\n  // comment for b\n  b: string;\n}\n"
    );
}

#[test]
fn test_code_unit_ordering_fixture() {
    // [$, _, A, a] sorts to [$, A, _, a] by code unit.
    let diagnostics = lint("interface Foo {\n  $: string;\n  _: string;\n  A: string;\n  a: string;\n}\n");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Expected interface keys to be in ascending order. 'A' should be before '_'."
    );

    let fixed = fix("interface Foo {\n  $: string;\n  _: string;\n  A: string;\n  a: string;\n}\n");
    assert_eq!(
        fixed,
        "interface Foo {\n  $: string;\n  A: string;\n  _: string;\n  a: string;\n}\n"
    );
}

#[test]
fn test_case_insensitive_policy() {
    let insensitive = SortingPolicy {
        case_sensitive: false,
        ..SortingPolicy::default()
    };
    let source = "interface Foo { a: string; B: string; }";
    // Case-sensitively 'B' < 'a'; insensitively the order is fine.
    assert_eq!(lint(source).len(), 1);
    assert!(lint_with(source, insensitive).is_empty());

    let diagnostics = lint_with("interface Foo { b: string; A: string; }", insensitive);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Expected interface keys to be in insensitive ascending order. 'A' should be before 'b'."
    );
}

#[test]
fn test_natural_policy() {
    let natural = SortingPolicy {
        natural: true,
        ..SortingPolicy::default()
    };
    let source = "interface Foo { a2: string; a11: string; }";
    // Lexicographically 'a2' > 'a11'; naturally 2 < 11.
    assert_eq!(lint(source).len(), 1);
    assert!(lint_with(source, natural).is_empty());
}

#[test]
fn test_descending_policy() {
    let descending = SortingPolicy {
        order: SortingOrder::Descending,
        ..SortingPolicy::default()
    };
    assert!(lint_with("interface Foo { b_: string; b: string; a: string; }", descending).is_empty());

    let diagnostics = lint_with("interface Foo { a: string; b: string; }", descending);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Expected interface keys to be in descending order. 'b' should be before 'a'."
    );
}

#[test]
fn test_required_first_policy() {
    let required_first = SortingPolicy {
        required_first: true,
        ..SortingPolicy::default()
    };
    // Optional members sort after required ones regardless of name.
    assert!(!lint_with("interface Foo { b: string; z?: string; a?: string; }", required_first).is_empty());
    assert!(lint_with("interface Foo { b: string; a?: string; z?: string; }", required_first).is_empty());

    let diagnostics = lint_with(
        "interface Foo { _: string; a?: string; b: string; }",
        required_first,
    );
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Expected interface keys to be in required first ascending order. 'b' should be before 'a'."
    );
}

#[test]
fn test_index_signature_golden_fixture() {
    let source = "interface Foo {\n  A: string;\n  [skey: string]: string;\n  _: string;\n}\n";
    let diagnostics = lint(source);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Expected interface keys to be in ascending order. '[index: skey]' should be before 'A'."
    );

    // Target order is [index signature, A, _].
    let fixed = fix(source);
    let index_pos = fixed.find("[skey: string]").unwrap();
    let a_pos = fixed.find("A: string").unwrap();
    let underscore_pos = fixed.find("_: string").unwrap();
    assert!(index_pos < a_pos);
    assert!(a_pos < underscore_pos);
    assert!(lint(&fixed).is_empty());
}

#[test]
fn test_computed_keys_are_skipped() {
    let source = "interface Foo { b: string; [Symbol.iterator]: string; a: string; }";
    // The computed key has no derivable name, so neither adjacent pair
    // compares out of order.
    assert!(lint(source).is_empty());
}

#[test]
fn test_report_only_violation_when_member_occupies_its_slot() {
    // In [a, d, c, b, e] the member 'c' already sits in its target slot;
    // its violation carries no fix.
    let source = "interface Foo { a: 1; d: 2; c: 3; b: 4; e: 5; }";
    let diagnostics = lint(source);
    assert_eq!(diagnostics.len(), 2);
    assert!(!diagnostics[0].is_fixable());
    assert!(diagnostics[1].is_fixable());
}
