//! src/domain/email_config.rs
use super::{Provider, ValidationError};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

/// An edit of the email delivery settings.
///
/// Every optional field left out of the payload means "leave it as it is".
/// The type is never serialized, so the secrets it carries can only flow inward.
#[derive(Debug, Default, Deserialize)]
pub struct EmailConfigInput {
    #[serde(default)]
    pub provider: Provider,
    pub from_email: Option<String>,

    pub smtp_host: Option<String>,
    pub smtp_port: Option<i64>,
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<Secret<String>>,

    pub mailjet_api_key: Option<Secret<String>>,
    pub mailjet_api_secret: Option<Secret<String>>,
}

impl EmailConfigInput {
    pub fn parse(payload: serde_json::Value) -> Result<Self, ValidationError> {
        Ok(serde_json::from_value(payload)?)
    }
}

/// The email delivery settings as shown to an administrator.
///
/// Credentials are reduced to presence flags computed by whoever holds them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EmailConfigOutput {
    pub provider: Provider,
    pub from_email: Option<String>,
    pub smtp_host: Option<String>,
    pub smtp_port: Option<i64>,
    pub smtp_user: Option<String>,
    pub has_smtp_pass: bool,
    pub has_mailjet_keys: bool,
}
