use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person currently looking for dates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub height: u16,
    pub gender: Gender,
    /// Remaining number of matches this person still wants
    pub wanted_dates: u32,
}

/// Attributes of a person about to be admitted
///
/// Already validated by the HTTP layer; the registry does not re-check them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub height: u16,
    pub gender: Gender,
    pub wanted_dates: u32,
}

impl NewPerson {
    pub fn new(name: impl Into<String>, height: u16, gender: Gender, wanted_dates: u32) -> Self {
        Self {
            name: name.into(),
            height,
            gender,
            wanted_dates,
        }
    }

    /// Build the stored record under a freshly generated id
    pub fn into_person(self) -> Person {
        Person {
            id: uuid::Uuid::new_v4().to_string(),
            name: self.name,
            height: self.height,
            gender: self.gender,
            wanted_dates: self.wanted_dates,
        }
    }
}

/// A pairing produced when a new person is admitted
///
/// Both sides are copies taken at pairing time, before either demand was
/// decremented. `participant_a` is the newcomer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub participant_a: Person,
    pub participant_b: Person,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
