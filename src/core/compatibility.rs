use std::cmp::Ordering;

use crate::models::{Gender, Person};

/// Check whether two people can be paired
///
/// Only a male/female pair is compatible, and only when the male is strictly
/// taller than the female. The check is symmetric in its arguments.
#[inline]
pub fn is_compatible(p: &Person, q: &Person) -> bool {
    match (p.gender, q.gender) {
        (Gender::Male, Gender::Female) => p.height > q.height,
        (Gender::Female, Gender::Male) => q.height > p.height,
        _ => false,
    }
}

/// Order two candidates by how strongly `entrant` prefers them
///
/// A male entrant takes the shortest compatible female first, a female
/// entrant the tallest compatible male first. Equal heights compare equal so
/// callers can fall back to admission order.
#[inline]
pub fn preference_order(entrant: &Person, a: &Person, b: &Person) -> Ordering {
    match entrant.gender {
        Gender::Male => a.height.cmp(&b.height),
        Gender::Female => b.height.cmp(&a.height),
    }
}
