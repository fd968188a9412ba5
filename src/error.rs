use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Errors surfaced to clients of the game API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("game not found")]
    GameNotFound,
    #[error("invalid game payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),
    #[error("failed to encode game: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::GameNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Not-found carries no body
            ApiError::GameNotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::InvalidPayload(ref err) => {
                tracing::warn!(error = %err, "rejected game payload");
                (self.status(), self.to_string()).into_response()
            }
            ApiError::Encode(ref err) => {
                tracing::error!(error = %err, "failed to encode game data");
                (self.status(), "Failed to encode game").into_response()
            }
            ApiError::MethodNotAllowed => (
                self.status(),
                [(header::ALLOW, "GET, PATCH, POST")],
                self.to_string(),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_has_empty_body() {
        let response = ApiError::GameNotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_payload_is_bad_request() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let response = ApiError::InvalidPayload(err).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.starts_with("invalid game payload"));
    }

    #[tokio::test]
    async fn test_method_not_allowed_response() {
        let response = ApiError::MethodNotAllowed.into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.headers().get(header::ALLOW).unwrap(),
            "GET, PATCH, POST"
        );
        assert_eq!(body_text(response).await, "Method not allowed");
    }
}
