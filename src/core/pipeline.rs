use crate::config::AppConfig;
use crate::core::fetch::ApiClient;
use crate::core::metadata::add_metadata;
use crate::core::schema::{
    TableSchema, CUSTOMERS_SCHEMA, ORDERS_SCHEMA, ORDER_LINE_ITEMS_SCHEMA,
};
use crate::core::transform::{
    transform_customers, transform_order_line_items, transform_orders,
};
use crate::domain::model::LoadReport;
use crate::domain::ports::WarehouseLoader;
use crate::utils::error::{ErrorCategory, Result};
use serde::Serialize;
use serde_json::Value;

/// Drives the full job: customers, then orders, then order line items. Each
/// entity goes fetch -> transform -> stamp -> load before the next starts.
/// No retries and no partial resume; the first failure ends the run.
pub struct ShopPipeline<L: WarehouseLoader> {
    client: ApiClient,
    loader: L,
    config: AppConfig,
}

impl<L: WarehouseLoader> ShopPipeline<L> {
    pub fn new(config: AppConfig, loader: L) -> Result<Self> {
        let client = ApiClient::new(config.base_url.clone())?;
        Ok(Self {
            client,
            loader,
            config,
        })
    }

    pub async fn run(&self) -> Result<()> {
        tracing::info!("Pipeline started");

        match self.run_stages().await {
            Ok(()) => {
                tracing::info!("Pipeline completed successfully");
                Ok(())
            }
            Err(e) => {
                match e.category() {
                    ErrorCategory::Network => {
                        tracing::error!("Pipeline failed due to API error: {}", e)
                    }
                    ErrorCategory::Unexpected => {
                        tracing::error!("Pipeline failed due to unexpected error: {}", e)
                    }
                }
                Err(e)
            }
        }
    }

    async fn run_stages(&self) -> Result<()> {
        let raw = self.client.fetch_all("/api/customers").await?;
        let customers = add_metadata(transform_customers(raw), &self.config.source);
        self.load_rows(&CUSTOMERS_SCHEMA, &customers, "CUSTOMERS")
            .await?;

        let raw = self.client.fetch_all("/api/orders").await?;
        let orders = add_metadata(transform_orders(raw), &self.config.source);
        self.load_rows(&ORDERS_SCHEMA, &orders, "ORDERS").await?;

        let raw = self.client.fetch_all("/api/order-line-items").await?;
        let items = add_metadata(transform_order_line_items(raw), &self.config.source);
        self.load_rows(&ORDER_LINE_ITEMS_SCHEMA, &items, "ORDER_LINE_ITEMS")
            .await?;

        Ok(())
    }

    async fn load_rows<R: Serialize>(
        &self,
        schema: &TableSchema,
        rows: &[R],
        table: &str,
    ) -> Result<LoadReport> {
        tracing::info!(
            "Loading {} rows into {}.{}.{}",
            rows.len(),
            self.config.database,
            self.config.schema,
            table
        );

        let rows: Vec<Value> = rows
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<_, _>>()?;

        let report = self
            .loader
            .load(
                schema,
                rows,
                &self.config.database,
                &self.config.schema,
                table,
            )
            .await?;

        tracing::info!(
            "Loaded {} rows into {} ({} skipped)",
            report.records_loaded,
            table,
            report.records_skipped
        );
        Ok(report)
    }
}
