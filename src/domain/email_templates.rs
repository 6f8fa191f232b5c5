//! src/domain/email_templates.rs
use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Text fields of one template, e.g. `subject` and `body`.
pub type TemplateFields = BTreeMap<String, String>;

/// Named email templates, keyed by the event they are sent for (`comment_user`, ...).
///
/// Reading and writing share the same shape: templates carry no secrets.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EmailTemplates {
    pub templates: BTreeMap<String, TemplateFields>,
}

pub type EmailTemplatesInput = EmailTemplates;
pub type EmailTemplatesOutput = EmailTemplates;

impl EmailTemplates {
    /// Either every template is a flat string map or the whole payload is rejected.
    pub fn parse(payload: serde_json::Value) -> Result<Self, ValidationError> {
        Ok(serde_json::from_value(payload)?)
    }

    pub fn get(&self, name: &str) -> Option<&TemplateFields> {
        self.templates.get(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
