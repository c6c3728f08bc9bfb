use swc_atoms::Atom;

use crate::compare::KeyComparator;
use crate::config::SortingPolicy;
use crate::member::Member;

/// An adjacent out-of-order member pair found by one scan pass.
///
/// `replace` is the source index of the member currently occupying
/// `current`'s slot in the target order; swapping the two realizes one step
/// toward the fully sorted list. When `current == replace` there is nothing
/// to edit and the violation is report-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderViolation {
    pub current: usize,
    pub replace: usize,
    pub this_name: Option<Atom>,
    pub prev_name: Option<Atom>,
}

/// The target permutation plus every violation of one member list.
#[derive(Debug)]
pub struct SortOutcome {
    /// `target[source_index]` is the member's position in the sorted order.
    pub target: Vec<usize>,
    pub violations: Vec<OrderViolation>,
}

/// Single linear pass plus one full stable sort. Lists of zero or one
/// members never produce violations.
pub fn scan(members: &[Member], policy: &SortingPolicy) -> SortOutcome {
    let comparator = KeyComparator::new(policy);
    let by_name = |a: usize, b: usize| {
        comparator.compare(members[a].name.as_deref(), members[b].name.as_deref())
    };

    // Target order: with required-first, required and optional members sort
    // independently and the required partition leads.
    let sorted: Vec<usize> = if policy.required_first {
        let mut required: Vec<usize> = (0..members.len())
            .filter(|&i| !members[i].optional)
            .collect();
        let mut optional: Vec<usize> = (0..members.len())
            .filter(|&i| members[i].optional)
            .collect();
        stable_sort_by(&mut required, by_name);
        stable_sort_by(&mut optional, by_name);
        required.into_iter().chain(optional).collect()
    } else {
        let mut all: Vec<usize> = (0..members.len()).collect();
        stable_sort_by(&mut all, by_name);
        all
    };

    let mut target = vec![0; members.len()];
    for (position, &source_index) in sorted.iter().enumerate() {
        target[source_index] = position;
    }

    let mut violations = Vec::new();
    for i in 1..members.len() {
        let prev = &members[i - 1];
        let current = &members[i];
        let name_order = comparator.compare(prev.name.as_deref(), current.name.as_deref());

        let out_of_order = if policy.required_first {
            if prev.optional == current.optional {
                name_order > 0
            } else {
                // An optional member before a required one is always a
                // violation, independent of names.
                prev.optional
            }
        } else {
            name_order > 0
        };

        if out_of_order {
            violations.push(OrderViolation {
                current: i,
                replace: target[i],
                this_name: current.name.clone(),
                prev_name: prev.name.clone(),
            });
        }
    }

    SortOutcome { target, violations }
}

/// Stable insertion sort over source indices. The comparator is not a total
/// order (members without derivable names compare equal to everything), so
/// the standard library sort and its total-order checks are avoided;
/// insertion keeps equal and incomparable members in source order.
fn stable_sort_by(indices: &mut [usize], mut compare: impl FnMut(usize, usize) -> i32) {
    for i in 1..indices.len() {
        let mut j = i;
        while j > 0 && compare(indices[j - 1], indices[j]) > 0 {
            indices.swap(j - 1, j);
            j -= 1;
        }
    }
}
