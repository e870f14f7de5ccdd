use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub const MISSING_FIELDS: &str = "Missing title or content in request";
pub const POST_NOT_FOUND: &str = "Post not found";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PostError{
    #[error("Missing title or content in request")]
    Validation,

    #[error("{0}")]
    InvalidBody(String),

    #[error("Post not found")]
    NotFound,

    /// Malformed identifiers and driver faults, carrying the underlying description.
    #[error("{0}")]
    Storage(String)
}

impl From<mongodb::error::Error> for PostError {
    fn from(error: mongodb::error::Error) -> Self {
        PostError::Storage(error.to_string())
    }
}

impl From<mongodb::bson::oid::Error> for PostError {
    fn from(error: mongodb::bson::oid::Error) -> Self {
        PostError::Storage(error.to_string())
    }
}

impl ResponseError for PostError {
    fn status_code(&self) -> StatusCode {
        match self {
            PostError::Validation | PostError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            PostError::NotFound => StatusCode::NOT_FOUND,
            PostError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
