use serde::Serialize;
use thiserror::Error;

/// Failure to turn a request body into [`Params`](crate::Params).
///
/// Both variants answer `400 Bad Request` with the configured message; the
/// underlying cause is kept for logging only.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("{message}")]
    InvalidBody {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    UnreadableBody { message: String, detail: String },
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl HandlerError {
    pub fn message(&self) -> &str {
        match self {
            HandlerError::InvalidBody { message, .. } => message,
            HandlerError::UnreadableBody { message, .. } => message,
        }
    }

    pub fn status(&self) -> http::StatusCode {
        match self {
            HandlerError::InvalidBody { .. } | HandlerError::UnreadableBody { .. } => {
                http::StatusCode::BAD_REQUEST
            }
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            HandlerError::InvalidBody { .. } | HandlerError::UnreadableBody { .. } => "bad_request",
        }
    }

    pub fn to_response_body(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.error_type().to_string(),
            message: self.message().to_string(),
        }
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        let body = axum::Json(self.to_response_body());
        axum::response::IntoResponse::into_response((self.status(), body))
    }
}

#[cfg(feature = "actix")]
impl actix_web::ResponseError for HandlerError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        // actix-web 4 is still on http 0.2, so go through the numeric code
        actix_web::http::StatusCode::from_u16(self.status().as_u16())
            .unwrap_or(actix_web::http::StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code()).json(self.to_response_body())
    }
}

pub type HandlerResult<T> = Result<T, HandlerError>;
