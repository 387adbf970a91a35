//! Configuration types.

use secrecy::SecretString;

use crate::error::ConfigError;

/// Default listen port for the events endpoint.
pub const DEFAULT_PORT: u16 = 3000;

/// Bot configuration, built once at process start from environment
/// variables and immutable afterwards.
pub struct Config {
    /// Bot token used to authenticate `chat.postMessage` calls.
    pub bot_token: SecretString,
    /// Slack signing secret. Part of the hosting contract, but inbound
    /// requests are not signature-verified (see DESIGN.md).
    pub signing_secret: SecretString,
    /// Port the events server listens on.
    pub port: u16,
}

impl Config {
    /// Build config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bot_token = std::env::var("SLACK_BOT_TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("SLACK_BOT_TOKEN".into()))?;
        let signing_secret = std::env::var("SLACK_SIGNING_SECRET")
            .map_err(|_| ConfigError::MissingEnvVar("SLACK_SIGNING_SECRET".into()))?;

        let port = parse_port(std::env::var("SLACK_EVENTS_PORT").ok())?;

        Ok(Self {
            bot_token: SecretString::from(bot_token),
            signing_secret: SecretString::from(signing_secret),
            port,
        })
    }
}

fn parse_port(raw: Option<String>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: "SLACK_EVENTS_PORT".into(),
            message: format!("not a valid port: {raw}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn port_parses_valid_value() {
        assert_eq!(parse_port(Some("8080".into())).unwrap(), 8080);
    }

    #[test]
    fn port_rejects_garbage() {
        let err = parse_port(Some("not-a-port".into())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
