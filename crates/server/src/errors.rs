use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use models::errors::ModelError;
use service::errors::ServiceError;

/// HTTP mapping of the business-layer error. Validation lands on 400,
/// missing records on 404, everything database-shaped on 500 with the
/// detail kept out of the response body.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ServiceError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServiceError::Model(ModelError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ServiceError::Db(detail) | ServiceError::Model(ModelError::Db(detail)) => {
                error!(error = %detail, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };
        (status, Json(serde_json::json!({"message": message}))).into_response()
    }
}
