use chrono::Utc;
use tracing::debug;

use crate::core::compatibility::{is_compatible, preference_order};
use crate::core::registry::People;
use crate::models::{Match, Person};

/// Result of admitting one person
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// The newcomer after matching; `wanted_dates` reflects every pairing
    pub entrant: Person,
    /// Pairings in the order they were made
    pub matches: Vec<Match>,
}

/// Greedily pair a freshly admitted person with the people already waiting
///
/// `entrant` must already be stored in `people`. Candidates are collected
/// once up front and walked in preference order until either the entrant's
/// demand or the candidate list runs out. Anyone whose demand reaches zero,
/// the entrant included, is removed from `people`.
pub fn find_matches(mut entrant: Person, people: &mut People) -> MatchResult {
    let mut candidates: Vec<(u64, Person)> = people
        .values()
        .filter(|entry| entry.person.id != entrant.id)
        .filter(|entry| is_compatible(&entrant, &entry.person))
        .map(|entry| (entry.seq, entry.person.clone()))
        .collect();

    // Equal heights fall back to admission order
    candidates.sort_by(|(seq_a, a), (seq_b, b)| {
        preference_order(&entrant, a, b).then_with(|| seq_a.cmp(seq_b))
    });

    debug!(
        "Entrant {} ({}, {}cm) has {} compatible candidates",
        entrant.id,
        entrant.gender,
        entrant.height,
        candidates.len()
    );

    let mut matches: Vec<Match> = Vec::new();

    for (_, candidate) in candidates {
        if entrant.wanted_dates == 0 {
            break;
        }

        let Some(entry) = people.get_mut(&candidate.id) else {
            continue;
        };

        let now = Utc::now();
        let timestamp = match matches.last() {
            Some(prev) if prev.timestamp > now => prev.timestamp,
            _ => now,
        };

        matches.push(Match {
            participant_a: entrant.clone(),
            participant_b: entry.person.clone(),
            timestamp,
        });

        entrant.wanted_dates -= 1;
        entry.person.wanted_dates = entry.person.wanted_dates.saturating_sub(1);

        debug!("Paired {} with {}", entrant.id, entry.person.id);

        let exhausted = entry.person.wanted_dates == 0;
        if exhausted {
            people.remove(&candidate.id);
            debug!("Evicted {} (no dates wanted)", candidate.id);
        }
    }

    if entrant.wanted_dates == 0 {
        people.remove(&entrant.id);
        debug!("Evicted entrant {} (no dates wanted)", entrant.id);
    } else if let Some(entry) = people.get_mut(&entrant.id) {
        entry.person.wanted_dates = entrant.wanted_dates;
    }

    MatchResult { entrant, matches }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::Entry;
    use crate::models::Gender;

    fn person(id: &str, gender: Gender, height: u16, wanted_dates: u32) -> Person {
        Person {
            id: id.to_string(),
            name: format!("Person {}", id),
            height,
            gender,
            wanted_dates,
        }
    }

    fn pool(people: Vec<Person>) -> People {
        people
            .into_iter()
            .enumerate()
            .map(|(seq, person)| (person.id.clone(), Entry { seq: seq as u64, person }))
            .collect()
    }

    #[test]
    fn test_find_matches_basic() {
        let alice = person("1", Gender::Female, 160, 2);
        let bob = person("2", Gender::Male, 180, 2);
        let mut people = pool(vec![bob, alice.clone()]);

        let result = find_matches(alice, &mut people);

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].participant_a.id, "1");
        assert_eq!(result.matches[0].participant_b.id, "2");
        assert!(result.matches[0].timestamp <= Utc::now());
        assert_eq!(result.entrant.wanted_dates, 1);
        assert_eq!(people["1"].person.wanted_dates, 1);
        assert_eq!(people["2"].person.wanted_dates, 1);
    }

    #[test]
    fn test_snapshots_taken_before_decrement() {
        let alice = person("1", Gender::Female, 160, 1);
        let bob = person("2", Gender::Male, 180, 3);
        let mut people = pool(vec![bob, alice.clone()]);

        let result = find_matches(alice, &mut people);

        assert_eq!(result.matches[0].participant_a.wanted_dates, 1);
        assert_eq!(result.matches[0].participant_b.wanted_dates, 3);
        assert_eq!(people["2"].person.wanted_dates, 2);
    }

    #[test]
    fn test_male_entrant_takes_shortest_first() {
        let tall = person("tall", Gender::Female, 170, 1);
        let short = person("short", Gender::Female, 150, 1);
        let too_tall = person("too_tall", Gender::Female, 195, 1);
        let entrant = person("m", Gender::Male, 190, 1);
        let mut people = pool(vec![tall, short, too_tall, entrant.clone()]);

        let result = find_matches(entrant, &mut people);

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].participant_b.id, "short");
        assert!(!people.contains_key("short"));
        assert!(!people.contains_key("m"));
        assert!(people.contains_key("tall"));
        assert!(people.contains_key("too_tall"));
    }

    #[test]
    fn test_female_entrant_takes_tallest_first() {
        let mid = person("mid", Gender::Male, 175, 1);
        let tall = person("tall", Gender::Male, 190, 1);
        let short = person("short", Gender::Male, 160, 1);
        let entrant = person("f", Gender::Female, 165, 3);
        let mut people = pool(vec![mid, tall, short, entrant.clone()]);

        let result = find_matches(entrant, &mut people);

        let partners: Vec<&str> = result
            .matches
            .iter()
            .map(|m| m.participant_b.id.as_str())
            .collect();
        assert_eq!(partners, vec!["tall", "mid"]);
        assert_eq!(result.entrant.wanted_dates, 1);
        assert!(people.contains_key("f"));
        assert!(people.contains_key("short"));
    }

    #[test]
    fn test_equal_heights_use_admission_order() {
        let first = person("first", Gender::Female, 160, 1);
        let second = person("second", Gender::Female, 160, 1);
        let entrant = person("m", Gender::Male, 180, 1);
        let mut people = pool(vec![first, second, entrant.clone()]);

        let result = find_matches(entrant, &mut people);

        assert_eq!(result.matches[0].participant_b.id, "first");
    }

    #[test]
    fn test_zero_demand_entrant_is_evicted() {
        let waiting = person("w", Gender::Female, 150, 1);
        let entrant = person("m", Gender::Male, 190, 0);
        let mut people = pool(vec![waiting, entrant.clone()]);

        let result = find_matches(entrant, &mut people);

        assert!(result.matches.is_empty());
        assert!(!people.contains_key("m"));
        assert_eq!(people["w"].person.wanted_dates, 1);
    }

    #[test]
    fn test_same_gender_never_paired() {
        let other = person("o", Gender::Male, 150, 1);
        let entrant = person("m", Gender::Male, 190, 1);
        let mut people = pool(vec![other, entrant.clone()]);

        let result = find_matches(entrant, &mut people);

        assert!(result.matches.is_empty());
        assert_eq!(people.len(), 2);
    }

    #[test]
    fn test_timestamps_non_decreasing() {
        let mut seed: Vec<Person> = (0..20)
            .map(|i| person(&format!("f{}", i), Gender::Female, 140 + i as u16, 1))
            .collect();
        let entrant = person("m", Gender::Male, 200, 20);
        seed.push(entrant.clone());
        let mut people = pool(seed);

        let result = find_matches(entrant, &mut people);

        assert_eq!(result.matches.len(), 20);
        for pair in result.matches.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }
}
