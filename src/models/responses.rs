use serde::{Deserialize, Serialize};
use crate::models::domain::{Match, Person};

/// Response for the add-and-match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPersonResponse {
    pub person: Person,
    pub matches: Vec<Match>,
    pub message: String,
}

/// Response for the remove endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovePersonResponse {
    pub success: bool,
    pub message: String,
}

/// Response for the query endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryPeopleResponse {
    pub people: Vec<Person>,
    pub total: usize,
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub active_people: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
