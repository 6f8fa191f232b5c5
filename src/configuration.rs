//! src/configuration.rs
use crate::domain::Provider;
use anyhow::Context;
use config::{Config, File};
use secrecy::Secret;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    #[serde(skip)]
    pub email: Option<EmailSeed>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Email settings the store starts out with, read from `EMAIL_*` variables.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct EmailSeed {
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

#[derive(PartialEq)]
pub enum Environment {
    Local,
    Production,
}
impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_ref() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                s
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, anyhow::Error> {
    let base_path = std::env::current_dir().context("Failed to determine the current directory")?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if not specified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)
        .context("Failed to parse APP_ENVIRONMENT")?;

    // APP_APPLICATION__PORT=5001 would set `Settings.application.port`
    let settings = Config::builder()
        .add_source(File::from(configuration_directory.join("base")).required(true))
        .add_source(File::from(configuration_directory.join(environment.as_str())).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("Failed to read configuration files")?;

    let mut settings: Settings = settings
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    if environment == Environment::Local {
        let email_file_path = configuration_directory.join("email");
        if email_file_path.exists() {
            dotenvy::from_path(&email_file_path)
                .with_context(|| format!("Failed to read {}", email_file_path.display()))?;
        }
    }

    settings.email = get_email_seed()?;

    Ok(settings)
}

/// `None` when no `EMAIL_*` variable is set at all.
fn get_email_seed() -> Result<Option<EmailSeed>, anyhow::Error> {
    let any_set = std::env::vars_os().any(|(key, _)| key.to_string_lossy().starts_with("EMAIL_"));
    if !any_set {
        return Ok(None);
    }

    let seed = envy::prefixed("EMAIL_")
        .from_env::<EmailSeed>()
        .context("Failed to parse email settings from environment")?;

    Ok(Some(seed))
}
