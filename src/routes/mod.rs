//! src/routes/mod.rs
mod health_check;
pub use health_check::*;

mod email_config;
pub use email_config::*;

mod email_templates;
pub use email_templates::*;

use crate::domain::ValidationError;
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};

#[derive(thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid settings payload: {0}")]
    ValidationError(#[from] ValidationError),
    #[error("Unreadable JSON body: {0}")]
    PayloadError(#[from] JsonPayloadError),
}

/// Hands extractor failures (bad JSON, wrong content type) to `SettingsError`
/// so they get the same body as shape errors.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(error.cause_chain = ?err, "Rejected request body");
    SettingsError::from(err).into()
}

impl std::fmt::Debug for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SettingsError {
    fn status_code(&self) -> StatusCode {
        match self {
            SettingsError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SettingsError::PayloadError(e) => e.status_code(),
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "detail": self.to_string() }))
    }
}

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
