use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Gender, NewPerson};

/// Request to add a single person and match them immediately
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddPersonRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 100, max = 250))]
    pub height: u16,
    pub gender: Gender,
    #[serde(alias = "number_of_dates")]
    pub wanted_dates: u32,
}

impl From<AddPersonRequest> for NewPerson {
    fn from(req: AddPersonRequest) -> Self {
        NewPerson {
            name: req.name,
            height: req.height,
            gender: req.gender,
            wanted_dates: req.wanted_dates,
        }
    }
}
