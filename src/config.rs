//! Service configuration parsed from environment variables.
//!
//! Every knob has a default so the demo runs with an empty environment.
//! Values that are present but malformed are rejected instead of silently
//! falling back.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SETTLEMENT_DELAY_MS: u64 = 2000;
pub const DEFAULT_AUTH_DELAY_MS: u64 = 2000;
pub const DEFAULT_ASSISTANT_DELAY_MS: u64 = 1500;
pub const DEFAULT_NOTIFY_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_NOTIFY_USER: &str = "campuspay-demo";
pub const DEFAULT_APP_ID: u64 = 1002;
pub const DEFAULT_ALGOD_SERVER: &str = "http://localhost";
pub const DEFAULT_ALGOD_PORT: u16 = 4001;
pub const DEFAULT_ALGOD_TOKEN: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
pub const DEFAULT_EXPLORER_TX_URL: &str = "https://lora.algokit.io/localnet/transaction";
pub const DEFAULT_DEMO_USER_NAME: &str = "Campus Student";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Outbound webhook settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyConfig {
    /// Webhook URL. `None` disables notifications.
    pub webhook_url: Option<String>,
    /// Name shown in the embed footer.
    pub user: String,
    pub timeout_secs: u64,
}

/// Connection details for the (never exercised) algod node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgodConfig {
    pub server: String,
    pub port: u16,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub settlement_delay: Duration,
    pub auth_delay: Duration,
    pub assistant_delay: Duration,
    pub app_id: u64,
    pub explorer_tx_url: String,
    pub demo_user_name: String,
    pub notify: NotifyConfig,
    pub algod: AlgodConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            settlement_delay: Duration::from_millis(DEFAULT_SETTLEMENT_DELAY_MS),
            auth_delay: Duration::from_millis(DEFAULT_AUTH_DELAY_MS),
            assistant_delay: Duration::from_millis(DEFAULT_ASSISTANT_DELAY_MS),
            app_id: DEFAULT_APP_ID,
            explorer_tx_url: DEFAULT_EXPLORER_TX_URL.to_owned(),
            demo_user_name: DEFAULT_DEMO_USER_NAME.to_owned(),
            notify: NotifyConfig {
                webhook_url: None,
                user: DEFAULT_NOTIFY_USER.to_owned(),
                timeout_secs: DEFAULT_NOTIFY_TIMEOUT_SECS,
            },
            algod: AlgodConfig {
                server: DEFAULT_ALGOD_SERVER.to_owned(),
                port: DEFAULT_ALGOD_PORT,
                token: DEFAULT_ALGOD_TOKEN.to_owned(),
            },
        }
    }
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// - `PORT`: listen port (default 3000)
    /// - `SETTLEMENT_DELAY_MS`, `AUTH_DELAY_MS`, `ASSISTANT_DELAY_MS`: simulated latencies
    /// - `CAMPUSPAY_APP_ID`: app id used for payments (default 1002)
    /// - `EXPLORER_TX_URL`: base URL for transaction links
    /// - `DEMO_USER_NAME`: display name given to student logins
    /// - `DISCORD_WEBHOOK_URL`: webhook target; unset or empty disables notifications
    /// - `NOTIFY_USER`, `NOTIFY_TIMEOUT_SECS`: embed footer and request timeout
    /// - `ALGOD_SERVER`, `ALGOD_PORT`, `ALGOD_TOKEN`: ledger node handle
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());
        let millis = |key: &'static str, default: u64| -> Result<Duration, ConfigError> {
            parse_or(&lookup, key, default).map(Duration::from_millis)
        };

        let webhook_url = lookup("DISCORD_WEBHOOK_URL")
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty());

        Ok(Self {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            settlement_delay: millis("SETTLEMENT_DELAY_MS", DEFAULT_SETTLEMENT_DELAY_MS)?,
            auth_delay: millis("AUTH_DELAY_MS", DEFAULT_AUTH_DELAY_MS)?,
            assistant_delay: millis("ASSISTANT_DELAY_MS", DEFAULT_ASSISTANT_DELAY_MS)?,
            app_id: parse_or(&lookup, "CAMPUSPAY_APP_ID", DEFAULT_APP_ID)?,
            explorer_tx_url: string("EXPLORER_TX_URL", DEFAULT_EXPLORER_TX_URL)
                .trim_end_matches('/')
                .to_owned(),
            demo_user_name: string("DEMO_USER_NAME", DEFAULT_DEMO_USER_NAME),
            notify: NotifyConfig {
                webhook_url,
                user: string("NOTIFY_USER", DEFAULT_NOTIFY_USER),
                timeout_secs: parse_or(&lookup, "NOTIFY_TIMEOUT_SECS", DEFAULT_NOTIFY_TIMEOUT_SECS)?,
            },
            algod: AlgodConfig {
                server: string("ALGOD_SERVER", DEFAULT_ALGOD_SERVER),
                port: parse_or(&lookup, "ALGOD_PORT", DEFAULT_ALGOD_PORT)?,
                token: string("ALGOD_TOKEN", DEFAULT_ALGOD_TOKEN),
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => Ok(value),
            Err(_) => Err(ConfigError::Invalid { key, value: raw }),
        },
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
