use std::fmt;
use std::str::FromStr;

use swc_common::comments::SingleThreadedComments;
use swc_ecma_ast::{ArrowExpr, Module, Pat, TsEnumDecl, TsInterfaceDecl, TsTypeLit};
use swc_ecma_visit::{Visit, VisitWith};

use crate::config::RuleConfig;
use crate::diagnostic::{render_message, Diagnostic};
use crate::fixer::plan_swap;
use crate::member::Member;
use crate::scanner::scan;
use crate::source::SourceText;

/// The four sortable container kinds, one rule each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Interface,
    TypeLiteral,
    Enum,
    ArrowFuncObjectParams,
}

impl RuleKind {
    pub const ALL: [RuleKind; 4] = [
        RuleKind::Interface,
        RuleKind::TypeLiteral,
        RuleKind::Enum,
        RuleKind::ArrowFuncObjectParams,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Interface => "sort-interface",
            RuleKind::TypeLiteral => "sort-type",
            RuleKind::Enum => "sort-enum",
            RuleKind::ArrowFuncObjectParams => "sort-arrowfunc-object-params",
        }
    }

    /// The subject phrase of the rule's message template.
    pub fn subject(&self) -> &'static str {
        match self {
            RuleKind::Interface => "interface keys",
            RuleKind::TypeLiteral => "type keys",
            RuleKind::Enum => "string enum members",
            RuleKind::ArrowFuncObjectParams => "default props to component",
        }
    }

    /// Enum members and destructured parameters are never optional, so the
    /// required-first policy is accepted but inert for those rules.
    pub fn honors_required_first(&self) -> bool {
        matches!(self, RuleKind::Interface | RuleKind::TypeLiteral)
    }
}

impl FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown rule '{}'", s))
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Collects every sortable member list in one module walk, in visit order.
struct ContainerCollector<'a> {
    comments: &'a SingleThreadedComments,
    containers: Vec<(RuleKind, Vec<Member>)>,
}

impl Visit for ContainerCollector<'_> {
    fn visit_ts_interface_decl(&mut self, node: &TsInterfaceDecl) {
        let members = node
            .body
            .body
            .iter()
            .map(|el| Member::from_type_element(el, self.comments))
            .collect();
        self.containers.push((RuleKind::Interface, members));
        node.visit_children_with(self);
    }

    fn visit_ts_type_lit(&mut self, node: &TsTypeLit) {
        let members = node
            .members
            .iter()
            .map(|el| Member::from_type_element(el, self.comments))
            .collect();
        self.containers.push((RuleKind::TypeLiteral, members));
        node.visit_children_with(self);
    }

    fn visit_ts_enum_decl(&mut self, node: &TsEnumDecl) {
        let members = node
            .members
            .iter()
            .map(|m| Member::from_enum_member(m, self.comments))
            .collect();
        self.containers.push((RuleKind::Enum, members));
        node.visit_children_with(self);
    }

    fn visit_arrow_expr(&mut self, node: &ArrowExpr) {
        for param in &node.params {
            if let Pat::Object(pattern) = param {
                let members: Vec<Member> = pattern
                    .props
                    .iter()
                    .filter_map(|p| Member::from_object_pat_prop(p, self.comments))
                    .collect();
                self.containers
                    .push((RuleKind::ArrowFuncObjectParams, members));
            }
        }
        node.visit_children_with(self);
    }
}

/// Runs every activated rule over the module and renders diagnostics,
/// ordered by source position.
pub fn run_rules(
    module: &Module,
    comments: &SingleThreadedComments,
    src: &SourceText,
    rules: &[RuleConfig],
) -> Vec<Diagnostic> {
    let mut collector = ContainerCollector {
        comments,
        containers: Vec::new(),
    };
    module.visit_with(&mut collector);

    let mut diagnostics = Vec::new();
    for (kind, members) in &collector.containers {
        let Some(config) = rules.iter().find(|c| c.kind == *kind) else {
            continue;
        };

        let outcome = scan(members, &config.policy);
        for violation in &outcome.violations {
            let current = &members[violation.current];
            let (line, col) = src.line_col(src.span_range(current.span).start);
            // A member already occupying its target slot has nothing to
            // swap with; the violation is reported without a fix.
            let fix = (violation.current != violation.replace).then(|| {
                plan_swap(
                    src,
                    members,
                    &outcome.target,
                    violation.current,
                    violation.replace,
                )
            });

            diagnostics.push(Diagnostic {
                rule: *kind,
                message: render_message(*kind, &config.policy, violation),
                line,
                col,
                fix,
            });
        }
    }

    diagnostics.sort_by_key(|d| (d.line, d.col));
    diagnostics
}
