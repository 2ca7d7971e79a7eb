use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Shown for every retrieval miss, whether the record never existed or was
/// removed by retention.
pub const NOT_FOUND_MESSAGE: &str = "Result not found. The link may have expired.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("At least {required} participants are required, got {found}")]
    InsufficientParticipants { found: usize, required: usize },

    #[error("No valid draw found after {attempts} attempts")]
    DerangementUnattainable { attempts: u32 },

    #[error("Store write failure: {0}")]
    StoreWriteFailure(String),

    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::InsufficientParticipants { .. } => "INSUFFICIENT_PARTICIPANTS",
            AppError::DerangementUnattainable { .. } => "DERANGEMENT_UNATTAINABLE",
            AppError::StoreWriteFailure(_) => "STORE_WRITE_FAILURE",
            AppError::NotFound => "NOT_FOUND",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::ConfigError(_) | AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to a participant. Store and database details stay
    /// in the logs.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) | AppError::BadRequest(msg) => msg.clone(),
            AppError::InsufficientParticipants { required, .. } => {
                format!("At least {required} participants are required")
            }
            AppError::DerangementUnattainable { .. } => {
                "Unable to produce a valid draw, please try again".to_string()
            }
            AppError::StoreWriteFailure(_) => "Failed to save the draw".to_string(),
            AppError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            AppError::DatabaseError(_) => "Database error".to_string(),
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_)
            | AppError::InsufficientParticipants { .. }
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::DerangementUnattainable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::StoreWriteFailure(_)
            | AppError::DatabaseError(_)
            | AppError::ConfigError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::InvalidInput(_)
            | AppError::InsufficientParticipants { .. }
            | AppError::BadRequest(_)
            | AppError::DerangementUnattainable { .. } => {
                log::warn!("Rejected request: {self}");
            }
            // misses are routine; logging the id would leak it
            AppError::NotFound => {}
            _ => {
                log::error!("Request failed: {self}");
            }
        }

        HttpResponse::build(self.status_code()).json(json!({
            "error": self.user_message(),
            "code": self.code(),
        }))
    }
}
