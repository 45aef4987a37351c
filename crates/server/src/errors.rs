use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::beer::errors::{BeerError, FieldViolation};
use tracing::error;

/// JSON error body: `{"error": ..., "detail": ..., "violations": [...]}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<String>,
    pub violations: Vec<FieldViolation>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    violations: &'a Vec<FieldViolation>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail, violations: Vec::new() }
    }
}

impl From<BeerError> for JsonApiError {
    fn from(e: BeerError) -> Self {
        let detail = Some(e.to_string());
        if !e.is_client_error() {
            return Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", detail);
        }
        match e {
            BeerError::Validation(errs) => Self {
                status: StatusCode::BAD_REQUEST,
                error: "Validation Error",
                detail,
                violations: errs.violations,
            },
            BeerError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Not Found", detail),
            BeerError::Conflict { .. } => Self::new(StatusCode::CONFLICT, "Conflict", detail),
            _ => Self::new(StatusCode::BAD_REQUEST, "Validation Error", detail),
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection {
            // undecodable or mistyped body
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => StatusCode::BAD_REQUEST,
            _ => rejection.status(),
        };
        let error = if status == StatusCode::BAD_REQUEST {
            "Validation Error"
        } else {
            status.canonical_reason().unwrap_or("Bad Request")
        };
        Self::new(status, error, Some(rejection.body_text()))
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(rejection.body_text()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, detail = ?self.detail, "request failed");
        }
        let body = ErrorBody {
            error: self.error,
            detail: self.detail.as_deref(),
            violations: &self.violations,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;
    use service::beer::errors::{MappingError, ValidationErrors};
    use uuid::Uuid;

    #[test]
    fn client_errors_keep_their_status() {
        let mut errs = ValidationErrors::default();
        errs.push("price", "positive", "price must be greater than 0");
        let e = JsonApiError::from(BeerError::Validation(errs));
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.violations.len(), 1);

        let e = JsonApiError::from(BeerError::Mapping(MappingError::UnknownStyle("NOPE".into())));
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        let e = JsonApiError::from(BeerError::Model(ModelError::Validation("beer_style is required".into())));
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        let e = JsonApiError::from(BeerError::NotFound(Uuid::new_v4()));
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        let e = JsonApiError::from(BeerError::Conflict { id: Uuid::new_v4(), version: 3 });
        assert_eq!(e.status, StatusCode::CONFLICT);
    }

    #[test]
    fn storage_faults_are_internal() {
        let e = JsonApiError::from(BeerError::Repository("connection reset".into()));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.error, "Internal Server Error");
        let e = JsonApiError::from(BeerError::Model(ModelError::Db("timeout".into())));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
