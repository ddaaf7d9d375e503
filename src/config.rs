//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory. Every setting has a default, so an empty
//! environment yields a usable configuration.

use crate::birthdays::DEFAULT_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use crate::models::SingletonPolicy;
use std::env;
use std::path::PathBuf;

/// Longest accepted birthday window, one leap year.
const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the contact book shell.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file holding the address book (default: address_book.json)
    pub book_path: PathBuf,

    /// Days ahead covered by the birthday command (default: 7)
    pub birthday_window_days: u32,

    /// Save after every mutating command (default: true)
    pub autosave: bool,

    /// Behaviour of `add` on an already set birthday or group (default: replace)
    pub singleton_policy: SingletonPolicy,

    /// Log level used when RUST_LOG is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: Address book file (default: address_book.json)
    /// - `BIRTHDAY_WINDOW_DAYS`: Birthday look-ahead, 1-366 (default: 7)
    /// - `CONTACT_BOOK_AUTOSAVE`: Save after each change (default: true)
    /// - `CONTACT_BOOK_SINGLETON_POLICY`: `replace` or `reject` (default: replace)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let book_path = env::var("CONTACT_BOOK_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.book_path);

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;
        if birthday_window_days == 0 || birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_WINDOW_DAYS),
            });
        }

        let autosave = Self::parse_env_bool("CONTACT_BOOK_AUTOSAVE", defaults.autosave)?;

        let singleton_policy: SingletonPolicy = match env::var("CONTACT_BOOK_SINGLETON_POLICY") {
            Ok(val) => val.parse().map_err(|reason| ConfigError::InvalidValue {
                var: "CONTACT_BOOK_SINGLETON_POLICY".to_string(),
                reason,
            })?,
            Err(_) => defaults.singleton_policy,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            book_path,
            birthday_window_days,
            autosave,
            singleton_policy,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from("address_book.json"),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            autosave: true,
            singleton_policy: SingletonPolicy::Replace,
            log_level: "warn".to_string(),
        }
    }
}
