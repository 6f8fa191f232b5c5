//! src/store.rs
use crate::configuration::EmailSeed;
use crate::domain::{EmailConfigInput, EmailConfigOutput, EmailTemplates, Provider};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

/// The email settings as currently held, credentials included.
#[derive(Debug, Clone, Default)]
pub struct StoredEmailConfig {
    pub provider: Provider,
    pub from_email: Option<String>,
    pub smtp_host: Option<String>,
    pub smtp_port: Option<i64>,
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<Secret<String>>,
    pub mailjet_api_key: Option<Secret<String>>,
    pub mailjet_api_secret: Option<Secret<String>>,
}

impl StoredEmailConfig {
    /// The provider is always replaced, everything else only when the edit carries it.
    pub fn apply(&mut self, input: EmailConfigInput) {
        self.provider = input.provider;

        replace_if_present(&mut self.from_email, input.from_email);
        replace_if_present(&mut self.smtp_host, input.smtp_host);
        replace_if_present(&mut self.smtp_port, input.smtp_port);
        replace_if_present(&mut self.smtp_user, input.smtp_user);
        replace_if_present(&mut self.smtp_pass, input.smtp_pass);
        replace_if_present(&mut self.mailjet_api_key, input.mailjet_api_key);
        replace_if_present(&mut self.mailjet_api_secret, input.mailjet_api_secret);
    }

    pub fn has_smtp_pass(&self) -> bool {
        is_stored(&self.smtp_pass)
    }

    pub fn has_mailjet_keys(&self) -> bool {
        is_stored(&self.mailjet_api_key) && is_stored(&self.mailjet_api_secret)
    }

    pub fn to_output(&self) -> EmailConfigOutput {
        EmailConfigOutput {
            provider: self.provider,
            from_email: self.from_email.clone(),
            smtp_host: self.smtp_host.clone(),
            smtp_port: self.smtp_port,
            smtp_user: self.smtp_user.clone(),
            has_smtp_pass: self.has_smtp_pass(),
            has_mailjet_keys: self.has_mailjet_keys(),
        }
    }
}

impl From<EmailSeed> for StoredEmailConfig {
    fn from(seed: EmailSeed) -> Self {
        Self {
            provider: seed.provider,
            from_email: seed.from_email,
            smtp_host: seed.smtp_host,
            smtp_port: seed.smtp_port,
            smtp_user: seed.smtp_user,
            smtp_pass: seed.smtp_pass,
            mailjet_api_key: seed.mailjet_api_key,
            mailjet_api_secret: seed.mailjet_api_secret,
        }
    }
}

// A blank secret is what a cleared form field sends; it does not count as set.
fn is_stored(secret: &Option<Secret<String>>) -> bool {
    secret
        .as_ref()
        .is_some_and(|s| !s.expose_secret().is_empty())
}

fn replace_if_present<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

/// Process-local holder for the settings the admin surface reads and writes.
/// Nothing survives a restart.
#[derive(Debug, Default)]
pub struct SettingsStore {
    email_config: RwLock<StoredEmailConfig>,
    email_templates: RwLock<EmailTemplates>,
}

impl SettingsStore {
    pub fn new(email_config: StoredEmailConfig) -> Self {
        Self {
            email_config: RwLock::new(email_config),
            email_templates: RwLock::new(EmailTemplates::default()),
        }
    }

    pub async fn email_config(&self) -> EmailConfigOutput {
        self.email_config.read().await.to_output()
    }

    #[tracing::instrument(name = "Storing email configuration", skip(self, input))]
    pub async fn update_email_config(&self, input: EmailConfigInput) -> EmailConfigOutput {
        let mut stored = self.email_config.write().await;
        stored.apply(input);
        stored.to_output()
    }

    pub async fn email_templates(&self) -> EmailTemplates {
        self.email_templates.read().await.clone()
    }

    #[tracing::instrument(
        name = "Storing email templates",
        skip(self, templates),
        fields(template_count = templates.len())
    )]
    pub async fn replace_email_templates(&self, templates: EmailTemplates) -> EmailTemplates {
        let mut stored = self.email_templates.write().await;
        *stored = templates;
        stored.clone()
    }
}
