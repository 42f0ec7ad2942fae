pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::snowflake::SnowflakeStubLoader;
pub use config::{AppConfig, CliConfig};
pub use core::pipeline::ShopPipeline;
pub use utils::error::{ErrorCategory, EtlError, Result};
