use api_shared::ErrorRes;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use medrec_core::ServiceError;

/// A failed request on its way out as an HTTP response.
///
/// Every variant is rendered with the same `{ "message": .. }` body.
#[derive(Debug)]
pub enum ApiError {
    Service(ServiceError),
    /// The request could not be read: malformed JSON, a field that fails
    /// validation, or a path segment of the wrong type.
    Rejected { status: StatusCode, message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Service(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Service(ServiceError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Service(ServiceError::ServiceUnavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Rejected { status, .. } => *status,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Service(err) => err.to_string(),
            Self::Rejected { message, .. } => message.clone(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            tracing::error!("request failed: {}", message);
        } else if let Self::Rejected { .. } = self {
            tracing::debug!("request rejected: {}", message);
        }
        (status, Json(ErrorRes::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_kind_to_its_status() {
        assert_eq!(
            ApiError::from(ServiceError::not_found("Patient", 1)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ServiceError::Conflict("dup".into())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(ServiceError::unavailable()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn rejection_keeps_its_own_status_and_text() {
        let err = ApiError::Rejected {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "bad email".into(),
        };
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message(), "bad email");
    }
}
