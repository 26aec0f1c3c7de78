// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Gender, Match, NewPerson, Person};
pub use requests::AddPersonRequest;
pub use responses::{AddPersonResponse, ErrorResponse, HealthResponse, QueryPeopleResponse, RemovePersonResponse};
