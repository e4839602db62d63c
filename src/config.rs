//! Configuration management for the contact book CLI.
//!
//! Settings come from environment variables, with a `.env` file loaded first
//! if one is present. Every setting has a default.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the contact book CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// File the book is saved to and loaded from (default: "address_book.bin")
    pub book_path: PathBuf,

    /// Records per page when listing (default: 2)
    pub page_size: usize,

    /// Keyword searched by the demo run (default: "Ro")
    pub search_keyword: String,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: File to save the book to (default: address_book.bin)
    /// - `CONTACT_BOOK_PAGE_SIZE`: Records per page, greater than zero (default: 2)
    /// - `CONTACT_BOOK_SEARCH`: Search keyword for the demo (default: Ro)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let book_path = env::var("CONTACT_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.book_path);

        let page_size = Self::parse_env_usize("CONTACT_BOOK_PAGE_SIZE", defaults.page_size)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let search_keyword =
            env::var("CONTACT_BOOK_SEARCH").unwrap_or(defaults.search_keyword);
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            book_path,
            page_size,
            search_keyword,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from("address_book.bin"),
            page_size: 2,
            search_keyword: "Ro".to_string(),
            log_level: "info".to_string(),
        }
    }
}
