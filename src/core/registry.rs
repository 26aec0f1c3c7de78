use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::core::matcher::{find_matches, MatchResult};
use crate::core::ordering::query_order;
use crate::models::{NewPerson, Person};

/// A stored person plus its admission sequence number
#[derive(Debug, Clone)]
pub struct Entry {
    pub seq: u64,
    pub person: Person,
}

/// Active people keyed by id
pub type People = HashMap<String, Entry>;

#[derive(Debug, Default)]
struct RegistryState {
    people: People,
    next_seq: u64,
}

/// Concurrent store of everyone still looking for dates
///
/// Admission and removal take the write lock; the whole add-then-match
/// sequence runs inside one critical section so two concurrent admissions
/// can never claim the same candidate. Queries take the read lock. Callers
/// only ever receive copies of the stored records.
#[derive(Debug, Default)]
pub struct Registry {
    state: RwLock<RegistryState>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a new person and immediately try to match them
    pub fn add_person(&self, new_person: NewPerson) -> MatchResult {
        let person = new_person.into_person();

        let mut state = self.state.write();
        let seq = state.next_seq;
        state.next_seq += 1;
        state.people.insert(
            person.id.clone(),
            Entry {
                seq,
                person: person.clone(),
            },
        );

        let result = find_matches(person, &mut state.people);

        info!(
            "Admitted {} with {} matches ({} active)",
            result.entrant.id,
            result.matches.len(),
            state.people.len()
        );

        result
    }

    /// Remove a person by id, returning whether they were present
    pub fn remove_person(&self, id: &str) -> bool {
        let mut state = self.state.write();
        let removed = state.people.remove(id).is_some();

        if removed {
            info!("Removed {} ({} active)", id, state.people.len());
        } else {
            debug!("Remove requested for unknown id {}", id);
        }

        removed
    }

    /// List active people in query order
    ///
    /// A positive `limit` truncates the listing; zero or negative returns
    /// everyone.
    pub fn query_people(&self, limit: i64) -> Vec<Person> {
        let state = self.state.read();

        let mut entries: Vec<&Entry> = state.people.values().collect();
        entries.sort_by(|a, b| query_order(&a.person, &b.person).then_with(|| a.seq.cmp(&b.seq)));

        if limit > 0 {
            entries.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        entries.into_iter().map(|entry| entry.person.clone()).collect()
    }

    /// Look up a single active person
    pub fn get(&self, id: &str) -> Option<Person> {
        self.state.read().people.get(id).map(|entry| entry.person.clone())
    }

    pub fn len(&self) -> usize {
        self.state.read().people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
