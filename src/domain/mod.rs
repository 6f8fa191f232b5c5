//! src/domain/mod.rs
mod provider;
pub use provider::{Provider, UnknownProvider};

mod email_config;
pub use email_config::{EmailConfigInput, EmailConfigOutput};

mod email_templates;
pub use email_templates::{
    EmailTemplates, EmailTemplatesInput, EmailTemplatesOutput, TemplateFields,
};

/// A payload that does not have the shape a settings operation expects.
/// An unknown provider ends up here as well as any mistyped field.
#[derive(thiserror::Error, Debug)]
#[error("{0}")]
pub struct ValidationError(#[from] serde_json::Error);
