use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("got an incorrect caption substring: {0}")]
    IncorrectCaptionSubstring(String),

    #[error("a request to the DB failed")]
    DbRequestFailed(#[from] sqlx::Error),

    #[error("failed to serialize the videos list to JSON")]
    SerializationFailed(#[from] serde_json::Error),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        // Infrastructure details stay in the logs; clients only see the
        // status code. Error responses carry no body.
        match self {
            AppError::DbRequestFailed(source) => {
                tracing::error!(error = %self, source = %source, "request failed");
            }
            AppError::SerializationFailed(source) => {
                tracing::error!(error = %self, source = %source, "request failed");
            }
            AppError::IncorrectCaptionSubstring(_) => {
                tracing::error!(error = %self, "request failed");
            }
        }

        HttpResponse::new(self.status_code())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::IncorrectCaptionSubstring(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
