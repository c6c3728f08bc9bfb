use std::borrow::Cow;

use crate::config::{SortingOrder, SortingPolicy};
use crate::member::is_index_signature_marker;

/// Weight added to index signature markers so they outrank every named key.
/// With `base - weight(a) + weight(b)`, a weighted right-hand operand pulls
/// the comparison positive, which pushes the marker ahead in the listing.
const INDEX_SIGNATURE_WEIGHT: i32 = 100;

/// Key comparison function for one sorting policy. Returns a signed result
/// rather than `Ordering` because the weighting term is arithmetic, not a
/// tie-break.
#[derive(Debug, Clone, Copy)]
pub struct KeyComparator {
    ascending: bool,
    insensitive: bool,
    natural: bool,
}

impl KeyComparator {
    pub fn new(policy: &SortingPolicy) -> Self {
        Self {
            ascending: policy.order == SortingOrder::Ascending,
            insensitive: !policy.case_sensitive,
            natural: policy.natural,
        }
    }

    /// Compare two member names. A member without a derivable name compares
    /// equal to everything, so it anchors its neighbors in place.
    pub fn compare(&self, a: Option<&str>, b: Option<&str>) -> i32 {
        let (Some(a), Some(b)) = (a, b) else {
            return 0;
        };
        if self.ascending {
            self.compare_names(a, b)
        } else {
            self.compare_names(b, a)
        }
    }

    fn compare_names(&self, a: &str, b: &str) -> i32 {
        let a = self.fold(a);
        let b = self.fold(b);
        self.base(&a, &b) - weight(&a) + weight(&b)
    }

    fn fold<'s>(&self, name: &'s str) -> Cow<'s, str> {
        if self.insensitive {
            Cow::Owned(name.to_lowercase())
        } else {
            Cow::Borrowed(name)
        }
    }

    fn base(&self, a: &str, b: &str) -> i32 {
        let ordering = if self.natural {
            natord::compare(a, b)
        } else {
            a.cmp(b)
        };
        match ordering {
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => 1,
        }
    }
}

fn weight(name: &str) -> i32 {
    if is_index_signature_marker(name) {
        INDEX_SIGNATURE_WEIGHT
    } else {
        0
    }
}
