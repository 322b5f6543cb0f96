use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use session_store::SessionError;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Infrastructure failures only. Domain errors (bad names, unknown ids)
/// never surface here; controllers turn those into flash messages.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

#[derive(Serialize)]
struct JsonError {
    message: String,
    r#type: String,
}

#[derive(Serialize)]
struct JsonErrorWrapper {
    error: JsonError,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_response = JsonErrorWrapper {
            error: JsonError {
                message: self.to_string(),
                r#type: "api_error".to_string(),
            },
        };
        HttpResponse::build(self.status_code()).json(error_response)
    }
}
