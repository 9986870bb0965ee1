// src/config.rs
use crate::application::commands::conversion::{
    ConversionConfig, DEFAULT_BATCH_SIZE, DEFAULT_MAX_DOCUMENTS, DEFAULT_SLUG_FIELD,
};
use crate::domain::document::SlugAffixes;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    max_connections: u32,
    conversion: ConversionConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://documents.db?mode=rwc".into()
}

fn default_max_connections() -> u32 {
    4
}

/// Reads settings through a key lookup so parsing does not depend on the
/// process environment.
struct Settings<'a> {
    lookup: &'a dyn Fn(&str) -> Option<String>,
}

impl Settings<'_> {
    /// Non-blank value of `key`, trimmed.
    fn optional(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn number<T: std::str::FromStr>(&self, key: &str, default: T) -> Result<T, ConfigError> {
        match self.optional(key) {
            None => Ok(default),
            Some(raw) => raw.parse::<T>().map_err(|_| {
                ConfigError::Invalid(format!("{key} must be a positive integer, got `{raw}`"))
            }),
        }
    }

    fn flag(&self, key: &str) -> Result<bool, ConfigError> {
        let Some(raw) = self.optional(key) else {
            return Ok(false);
        };
        match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(ConfigError::Invalid(format!(
                "{key} must be one of 1/0, true/false, yes/no, got `{raw}`"
            ))),
        }
    }

    fn list(&self, key: &str) -> Vec<String> {
        self.optional(key)
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl AppConfig {
    /// Build configuration from environment variables (after loading `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from `lookup`. Every setting is optional; malformed
    /// numbers or flags and settings that fail validation are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = Settings { lookup: &lookup };

        let database_url = settings
            .optional("DATABASE_URL")
            .unwrap_or_else(default_database_url);
        let max_connections =
            settings.number("DATABASE_MAX_CONNECTIONS", default_max_connections())?;

        let conversion = ConversionConfig {
            allowed_types: settings.list("SLUG_ALLOWED_TYPES"),
            document_type: settings.optional("SLUG_DOCUMENT_TYPE"),
            search: settings.optional("SLUG_SEARCH"),
            raw_query: settings.optional("SLUG_RAW_QUERY"),
            max_documents: settings.number("SLUG_MAX_DOCUMENTS", DEFAULT_MAX_DOCUMENTS)?,
            source_field: settings.optional("SLUG_SOURCE_FIELD"),
            slug_field: settings
                .optional("SLUG_FIELD")
                .unwrap_or_else(|| DEFAULT_SLUG_FIELD.into()),
            replace_existing: settings.flag("SLUG_REPLACE_EXISTING")?,
            affixes: SlugAffixes::new(
                settings.optional("SLUG_PREFIX"),
                settings.optional("SLUG_SUFFIX"),
            ),
            batch_size: settings.number("SLUG_BATCH_SIZE", DEFAULT_BATCH_SIZE)?,
            dry_run: settings.flag("SLUG_DRY_RUN")?,
        };

        if max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DATABASE_MAX_CONNECTIONS must be at least 1".into(),
            ));
        }
        conversion
            .validate()
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;

        Ok(Self {
            database_url,
            max_connections,
            conversion,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }

    pub fn conversion(&self) -> &ConversionConfig {
        &self.conversion
    }
}
