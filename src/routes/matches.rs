use actix_web::{web, HttpResponse, Responder};
use std::collections::HashMap;
use std::sync::Arc;
use validator::Validate;

use crate::core::Registry;
use crate::models::{
    AddPersonRequest, AddPersonResponse, HealthResponse, QueryPeopleResponse, RemovePersonResponse,
};
use crate::routes::error::ApiError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    /// Cap applied to positive query limits
    pub max_query_limit: Option<i64>,
}

impl AppState {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            max_query_limit: None,
        }
    }

    pub fn with_max_query_limit(mut self, max_query_limit: Option<i64>) -> Self {
        self.max_query_limit = max_query_limit;
        self
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/add-single-person-and-match", web::post().to(add_single_person_and_match))
        .route("/remove-single-person/{id}", web::delete().to(remove_single_person))
        .route("/query-single-people", web::get().to(query_single_people));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        active_people: state.registry.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Add a person and match them against everyone waiting
///
/// POST /add-single-person-and-match
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "height": 170,
///   "gender": "male|female",
///   "wanted_dates": 2
/// }
/// ```
async fn add_single_person_and_match(
    state: web::Data<AppState>,
    req: web::Json<AddPersonRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for add request: field_errors={:?}", errors);
        return Err(ApiError::Validation(errors));
    }

    let result = state.registry.add_person(req.into_inner().into());

    Ok(HttpResponse::Created().json(AddPersonResponse {
        person: result.entrant,
        matches: result.matches,
        message: "person added successfully".to_string(),
    }))
}

/// Remove a person by id
///
/// DELETE /remove-single-person/{id}
async fn remove_single_person(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let person_id = path.into_inner();

    if state.registry.remove_person(&person_id) {
        HttpResponse::Ok().json(RemovePersonResponse {
            success: true,
            message: "person removed successfully".to_string(),
        })
    } else {
        HttpResponse::NotFound().json(RemovePersonResponse {
            success: false,
            message: "person not found".to_string(),
        })
    }
}

/// List active people
///
/// GET /query-single-people?limit={limit}
///
/// `limit` is required; zero or negative returns everyone.
async fn query_single_people(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let limit = match query.get("limit").and_then(|raw| raw.trim().parse::<i64>().ok()) {
        Some(limit) => limit,
        None => {
            return HttpResponse::BadRequest().json(QueryPeopleResponse {
                people: vec![],
                total: 0,
                message: "limit is required".to_string(),
            });
        }
    };

    let limit = match state.max_query_limit {
        Some(max) if max > 0 && (limit <= 0 || limit > max) => max,
        _ => limit,
    };

    let people = state.registry.query_people(limit);
    tracing::debug!("Returning {} people (limit {})", people.len(), limit);

    HttpResponse::Ok().json(QueryPeopleResponse {
        total: people.len(),
        people,
        message: "people queried successfully".to_string(),
    })
}
