//! src/routes/email_templates.rs
use super::SettingsError;
use crate::domain::EmailTemplatesInput;
use crate::store::SettingsStore;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

#[tracing::instrument(
    name = "Reading email templates",
    skip(store),
    fields(request_id = %Uuid::new_v4())
)]
pub async fn get_email_templates(store: web::Data<SettingsStore>) -> HttpResponse {
    let templates = store.email_templates().await;
    HttpResponse::Ok().json(templates)
}

#[tracing::instrument(
    name = "Replacing email templates",
    skip(payload, store),
    fields(request_id = %Uuid::new_v4())
)]
pub async fn update_email_templates(
    payload: web::Json<serde_json::Value>,
    store: web::Data<SettingsStore>,
) -> Result<HttpResponse, SettingsError> {
    let templates = EmailTemplatesInput::parse(payload.into_inner()).map_err(|e| {
        tracing::warn!(error.cause_chain = ?e, "Rejected email templates");
        e
    })?;

    let templates = store.replace_email_templates(templates).await;
    Ok(HttpResponse::Ok().json(templates))
}
