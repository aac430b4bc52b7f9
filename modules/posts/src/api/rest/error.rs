use axum::http::StatusCode;

use crate::api::rest::problem::Problem;
use crate::domain::error::DomainError;

/// Map a domain error to an RFC 9457 Problem.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    let problem = match e {
        DomainError::NotFound => Problem::new(
            StatusCode::NOT_FOUND,
            "Post not found",
            "No post exists with the given id",
        ),
        DomainError::Validation { field, message } => Problem::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Validation failed",
            format!("Validation error on '{field}': {message}"),
        ),
        DomainError::Database(_) => {
            tracing::error!(error = ?e, "Database error occurred");
            Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error",
                "An internal database error occurred",
            )
        }
    };

    let problem = problem.with_instance(instance);
    match trace_id {
        Some(id) => problem.with_trace_id(id),
        None => problem,
    }
}

/// Implement `From<DomainError>` for `Problem` so `?` works in handlers.
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e, "/")
    }
}
