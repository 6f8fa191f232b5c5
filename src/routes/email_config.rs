//! src/routes/email_config.rs
use super::SettingsError;
use crate::domain::EmailConfigInput;
use crate::store::SettingsStore;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

#[tracing::instrument(
    name = "Reading email configuration",
    skip(store),
    fields(request_id = %Uuid::new_v4())
)]
pub async fn get_email_config(store: web::Data<SettingsStore>) -> HttpResponse {
    let config = store.email_config().await;
    HttpResponse::Ok().json(config)
}

#[tracing::instrument(
    name = "Updating email configuration",
    skip(payload, store),
    fields(
        request_id = %Uuid::new_v4(),
        provider = tracing::field::Empty
    )
)]
pub async fn update_email_config(
    payload: web::Json<serde_json::Value>,
    store: web::Data<SettingsStore>,
) -> Result<HttpResponse, SettingsError> {
    let input = EmailConfigInput::parse(payload.into_inner()).map_err(|e| {
        tracing::warn!(error.cause_chain = ?e, "Rejected email configuration");
        e
    })?;
    tracing::Span::current().record("provider", tracing::field::display(&input.provider));

    let config = store.update_email_config(input).await;
    Ok(HttpResponse::Ok().json(config))
}
