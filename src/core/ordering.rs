use std::cmp::Ordering;

use crate::models::{Gender, Person};

/// Listing order used by queries
///
/// Higher `wanted_dates` first; within equal demand females before males;
/// females by ascending height, males by descending height.
pub fn query_order(a: &Person, b: &Person) -> Ordering {
    b.wanted_dates
        .cmp(&a.wanted_dates)
        .then_with(|| gender_rank(a.gender).cmp(&gender_rank(b.gender)))
        .then_with(|| match a.gender {
            Gender::Female => a.height.cmp(&b.height),
            Gender::Male => b.height.cmp(&a.height),
        })
}

#[inline]
fn gender_rank(gender: Gender) -> u8 {
    match gender {
        Gender::Female => 0,
        Gender::Male => 1,
    }
}
