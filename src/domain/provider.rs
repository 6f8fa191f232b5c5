//! src/domain/provider.rs
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, PartialEq)]
#[error(
    "`{0}` is not a supported email provider. Use one of `smtp`, `mailjet`, `console` or `disabled`."
)]
pub struct UnknownProvider(String);

/// The backend outgoing mail is handed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum Provider {
    Smtp,
    #[default]
    Mailjet,
    Console,
    Disabled,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::Smtp,
        Provider::Mailjet,
        Provider::Console,
        Provider::Disabled,
    ];

    pub fn parse(s: &str) -> Result<Self, UnknownProvider> {
        match s {
            "smtp" => Ok(Provider::Smtp),
            "mailjet" => Ok(Provider::Mailjet),
            "console" => Ok(Provider::Console),
            "disabled" => Ok(Provider::Disabled),
            other => Err(UnknownProvider(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Smtp => "smtp",
            Provider::Mailjet => "mailjet",
            Provider::Console => "console",
            Provider::Disabled => "disabled",
        }
    }
}

impl TryFrom<String> for Provider {
    type Error = UnknownProvider;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Provider::parse(&s)
    }
}

impl std::str::FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::parse(s)
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
