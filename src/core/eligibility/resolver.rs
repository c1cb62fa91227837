//! Derived facts: academic standing and mutual concurrent pairs

use crate::core::models::{Catalog, Standing};
use std::collections::BTreeSet;

/// Minimum total credits for Senior standing
pub const SENIOR_CREDITS: f32 = 60.0;
/// Minimum total credits for Junior standing
pub const JUNIOR_CREDITS: f32 = 30.0;
/// Minimum total credits for Sophomore standing
pub const SOPHOMORE_CREDITS: f32 = 15.0;

/// Standing for a credit total (completed plus registered credits)
#[must_use]
pub fn standing_of(total_credits: f32) -> Standing {
    if total_credits >= SENIOR_CREDITS {
        Standing::Senior
    } else if total_credits >= JUNIOR_CREDITS {
        Standing::Junior
    } else if total_credits >= SOPHOMORE_CREDITS {
        Standing::Sophomore
    } else {
        Standing::Freshman
    }
}

/// Unordered pairs of courses that list each other as concurrent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutualPairs {
    pairs: BTreeSet<(String, String)>,
}

impl MutualPairs {
    fn key(a: &str, b: &str) -> (String, String) {
        if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }

    /// Record the pair {a, b}
    pub fn insert(&mut self, a: &str, b: &str) {
        self.pairs.insert(Self::key(a, b));
    }

    /// Whether `a` and `b` are direct mutual partners (order does not matter)
    #[must_use]
    pub fn are_partners(&self, a: &str, b: &str) -> bool {
        self.pairs.contains(&Self::key(a, b))
    }

    /// Number of distinct pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when no pairs exist
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate pairs in sorted order, each with the smaller code first
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(a, b)| (a.as_str(), b.as_str()))
    }
}

/// Scan the catalog for courses that list each other as concurrent
///
/// A code in a concurrent list that does not resolve to a catalog course
/// never forms a pair.
#[must_use]
pub fn mutual_concurrent_pairs(catalog: &Catalog) -> MutualPairs {
    let mut pairs = MutualPairs::default();

    for course in catalog.courses() {
        for partner_code in &course.concurrent {
            let is_mutual = catalog
                .get_course(partner_code)
                .is_some_and(|partner| partner.lists_concurrent(&course.code));
            if is_mutual {
                pairs.insert(&course.code, partner_code);
            }
        }
    }

    pairs
}
