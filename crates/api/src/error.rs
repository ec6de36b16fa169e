use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lmeval_core::error::CoreError;
use serde_json::json;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the uniform JSON error shape
/// `{ "status": "error", "statusCode": n, "message": "..." }`, or
/// `{ "errors": [ { field: message } ] }` for input validation failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `lmeval_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Declarative field validation failed; never reaches the repositories.
    #[error("Validation failed")]
    Validation(ValidationErrors),

    /// Request input could not be deserialized at all (body, query, or path).
    #[error("Malformed {location}: {message}")]
    Malformed {
        location: &'static str,
        message: String,
    },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- Structured validation failures: 422 + field list ---
            AppError::Validation(errors) => {
                let body = json!({ "errors": flatten_validation_errors(errors, "") });
                return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response();
            }
            AppError::Malformed { location, message } => {
                let body = json!({ "errors": [ field_error(location, message) ] });
                return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response();
            }

            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::ReferenceNotFound { .. }
                | CoreError::Conflict(_)
                | CoreError::StillReferenced { .. }
                | CoreError::Validation(_) => (StatusCode::BAD_REQUEST, core.to_string()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "status": "error",
            "statusCode": status.as_u16(),
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify an uncontextualized sqlx error.
///
/// Constraint violations are normally translated at the call site via
/// [`map_write_err`] / [`map_delete_err`]; anything that still arrives
/// here is either a plain missing row or unexpected.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Translate an INSERT/UPDATE failure for `entity` into a domain error.
///
/// - `23505` (unique violation) -> [`CoreError::Conflict`] with a message
///   derived from the constraint name.
/// - `23503` (foreign-key violation) -> referenced entity vanished between
///   the existence pre-check and the write; surfaced as a 400.
/// - `23514` (check violation) -> [`CoreError::Validation`].
pub fn map_write_err(entity: &'static str, err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        let constraint = db_err.constraint().unwrap_or("unknown");
        match db_err.code().as_deref() {
            Some("23505") => {
                return AppError::Core(CoreError::Conflict(conflict_message(constraint)));
            }
            Some("23503") => {
                return AppError::BadRequest(format!(
                    "An entity referenced by this {entity} does not exist"
                ));
            }
            Some("23514") => {
                return AppError::Core(CoreError::Validation(format!(
                    "value violates constraint {constraint}"
                )));
            }
            _ => {}
        }
    }
    AppError::Database(err)
}

/// Translate a DELETE failure for `entity` into a domain error.
///
/// A foreign-key violation on delete means dependent rows still reference
/// the entity; restrict semantics surface as a 400 rather than a generic
/// failure.
pub fn map_delete_err(entity: &'static str, err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23503") {
            return AppError::Core(CoreError::StillReferenced { entity });
        }
    }
    AppError::Database(err)
}

/// Human-readable message for a known unique-constraint name.
fn conflict_message(constraint: &str) -> String {
    match constraint {
        "uq_model_prompts_model_id_sort_order" => {
            "a prompt with this sort_order already exists for this model".to_string()
        }
        "uq_scores_metric_id_response_id" => {
            "a score for this metric and response already exists".to_string()
        }
        "uq_tags_name" => "a tag with this name already exists".to_string(),
        "model_prompts_pkey" => {
            "this model-prompt association already exists".to_string()
        }
        "evaluator_prompts_pkey" => {
            "this evaluator-prompt association already exists".to_string()
        }
        "prompt_tags_pkey" => "this prompt-tag association already exists".to_string(),
        other => format!("duplicate value violates unique constraint {other}"),
    }
}

/// Build a single-entry `{ "<field>": "<message>" }` object.
fn field_error(field: &str, message: &str) -> serde_json::Value {
    let mut entry = serde_json::Map::new();
    entry.insert(field.to_string(), serde_json::Value::String(message.to_string()));
    serde_json::Value::Object(entry)
}

/// Flatten possibly-nested [`ValidationErrors`] into a list of
/// single-entry `{ "<field>": "<message>" }` objects.
fn flatten_validation_errors(errors: &ValidationErrors, prefix: &str) -> Vec<serde_json::Value> {
    let mut list = Vec::new();
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for err in field_errors {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    // Schema-level errors are keyed "__all__"; report the
                    // rule code instead of that internal marker.
                    let key = if path == "__all__" {
                        err.code.to_string()
                    } else {
                        path.clone()
                    };
                    list.push(field_error(&key, &message));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                list.extend(flatten_validation_errors(nested, &path));
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    list.extend(flatten_validation_errors(nested, &format!("{path}[{index}]")));
                }
            }
        }
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
        #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
        limit: i64,
    }

    #[test]
    fn flatten_produces_one_object_per_failure() {
        let sample = Sample {
            name: String::new(),
            limit: 500,
        };
        let errors = sample.validate().unwrap_err();
        let list = flatten_validation_errors(&errors, "");
        assert_eq!(list.len(), 2);
        for entry in &list {
            let obj = entry.as_object().unwrap();
            assert_eq!(obj.len(), 1);
        }
    }

    #[test]
    fn conflict_message_names_known_constraints() {
        assert!(conflict_message("uq_tags_name").contains("tag"));
        assert!(conflict_message("uq_model_prompts_model_id_sort_order").contains("sort_order"));
        assert!(conflict_message("uq_something_else").contains("uq_something_else"));
    }

    #[test]
    fn write_errors_without_constraint_info_pass_through() {
        use assert_matches::assert_matches;

        assert_matches!(
            map_write_err("tag", sqlx::Error::RowNotFound),
            AppError::Database(sqlx::Error::RowNotFound)
        );
        assert_matches!(
            map_delete_err("tag", sqlx::Error::PoolTimedOut),
            AppError::Database(sqlx::Error::PoolTimedOut)
        );
    }
}
