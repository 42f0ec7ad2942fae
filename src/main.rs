use clap::Parser;
use myshop_etl::utils::logger;
use myshop_etl::{AppConfig, CliConfig, ErrorCategory, ShopPipeline, SnowflakeStubLoader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting myshop-etl");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    if cli.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    let pipeline = ShopPipeline::new(config, SnowflakeStubLoader)?;

    if let Err(e) = pipeline.run().await {
        let label = match e.category() {
            ErrorCategory::Network => "API error",
            ErrorCategory::Unexpected => "unexpected error",
        };
        eprintln!("Pipeline failed due to {}: {}", label, e);
        std::process::exit(1);
    }

    Ok(())
}
