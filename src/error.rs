use actix_web::{body::BoxBody, http::StatusCode, HttpResponse, ResponseError};
use log::{debug, error};
use serde::Serialize;
use thiserror::Error;

/// Server errors are logged with their cause, client errors only at debug.
fn log_error<E: ResponseError + std::fmt::Debug>(err: &E) {
    if err.status_code().is_server_error() {
        error!("{:?}", err);
    } else {
        debug!("{:?}", err);
    }
}

/// Errors of the HTML services (web front-end and payment).
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid movie id")]
    InvalidId,

    #[error("Template error")]
    Template(#[from] tera::Error),

    #[error("Upstream service error")]
    Downstream(#[from] FetchError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidId => StatusCode::BAD_REQUEST,
            AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Downstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        log_error(self);
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}

/// Errors of the catalog's JSON API.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid movie id")]
    InvalidId,

    #[error("Movie not found")]
    NotFound,

    #[error("Not found")]
    UnknownRoute,

    #[error("Database error")]
    Storage(#[from] sqlx::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::InvalidId => StatusCode::BAD_REQUEST,
            CatalogError::NotFound | CatalogError::UnknownRoute => StatusCode::NOT_FOUND,
            CatalogError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        log_error(self);
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

/// Failure of a call to another service.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("remote error: {0}")]
    Remote(String),
}
