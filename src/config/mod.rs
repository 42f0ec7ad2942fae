use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Command line shell. The job itself takes no arguments; it always runs the
/// full pipeline once.
#[derive(Debug, Clone, Parser)]
#[command(name = "myshop-etl")]
#[command(about = "Loads MyShop API data into the warehouse")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Process-wide configuration, read from the environment once at startup and
/// passed down explicitly. No deep call path re-reads the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API origin, `MYSHOP_BASE_URL`.
    pub base_url: String,
    /// Provenance tag stamped into `_source`, `MYSHOP_SOURCE`.
    pub source: String,
    /// Target database, `SNOWFLAKE_DATABASE`.
    pub database: String,
    /// Target namespace schema, `SNOWFLAKE_SCHEMA`.
    pub schema: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            base_url: env_or("MYSHOP_BASE_URL", "https://myshop.com"),
            source: env_or("MYSHOP_SOURCE", "myshop_api"),
            database: env_or("SNOWFLAKE_DATABASE", "RAW"),
            schema: env_or("SNOWFLAKE_SCHEMA", "ECOMMERCE"),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("MYSHOP_BASE_URL", &self.base_url)?;
        validate_non_empty_string("MYSHOP_SOURCE", &self.source)?;
        validate_non_empty_string("SNOWFLAKE_DATABASE", &self.database)?;
        validate_non_empty_string("SNOWFLAKE_SCHEMA", &self.schema)?;
        Ok(())
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
