use std::fmt;
use std::str::FromStr;

use crate::rules::RuleKind;

/// Expected direction of a sorted member list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortingOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortingOrder {
    /// The stem used in diagnostic messages ("ascending" / "descending").
    pub fn word(&self) -> &'static str {
        match self {
            SortingOrder::Ascending => "asc",
            SortingOrder::Descending => "desc",
        }
    }
}

impl FromStr for SortingOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortingOrder::Ascending),
            "desc" => Ok(SortingOrder::Descending),
            _ => Err(format!("invalid order '{}', expected 'asc' or 'desc'", s)),
        }
    }
}

impl fmt::Display for SortingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// How keys are compared. The default matches plain `sort-keys` behavior:
/// ascending, case-sensitive, lexicographic, required and optional mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortingPolicy {
    pub order: SortingOrder,
    pub case_sensitive: bool,
    pub natural: bool,
    pub required_first: bool,
}

impl Default for SortingPolicy {
    fn default() -> Self {
        Self {
            order: SortingOrder::Ascending,
            case_sensitive: true,
            natural: false,
            required_first: false,
        }
    }
}

/// One activated rule with its comparison policy.
#[derive(Debug, Clone, Copy)]
pub struct RuleConfig {
    pub kind: RuleKind,
    pub policy: SortingPolicy,
}

/// The full lint configuration: which rules run, and how each compares.
#[derive(Debug, Clone, Default)]
pub struct LintOptions {
    pub rules: Vec<RuleConfig>,
}

impl LintOptions {
    /// Every rule with the default policy.
    pub fn recommended() -> Self {
        Self::with_policy(&RuleKind::ALL, SortingPolicy::default())
    }

    pub fn with_policy(kinds: &[RuleKind], policy: SortingPolicy) -> Self {
        Self {
            rules: kinds
                .iter()
                .map(|&kind| RuleConfig { kind, policy })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_order_parsing() {
        assert_eq!("asc".parse::<SortingOrder>().unwrap(), SortingOrder::Ascending);
        assert_eq!("desc".parse::<SortingOrder>().unwrap(), SortingOrder::Descending);
        assert!("ascending".parse::<SortingOrder>().is_err());
        assert_eq!(SortingOrder::Descending.to_string(), "desc");
    }

    #[test]
    fn test_default_policy() {
        let policy = SortingPolicy::default();
        assert_eq!(policy.order, SortingOrder::Ascending);
        assert!(policy.case_sensitive);
        assert!(!policy.natural);
        assert!(!policy.required_first);
    }

    #[test]
    fn test_recommended_options_activate_all_rules() {
        let options = LintOptions::recommended();
        assert_eq!(options.rules.len(), RuleKind::ALL.len());
    }

    #[test]
    fn test_with_policy_selects_rules() {
        let options = LintOptions::with_policy(&[RuleKind::Enum], SortingPolicy::default());
        assert_eq!(options.rules.len(), 1);
        assert_eq!(options.rules[0].kind, RuleKind::Enum);
    }
}
