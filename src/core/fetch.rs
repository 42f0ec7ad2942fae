use crate::domain::model::RawRecord;
use crate::utils::error::{EtlError, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Fixed page size for every paginated endpoint.
pub const PAGE_SIZE: u64 = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the shop API. One instance per pipeline run; reqwest
/// pools connections underneath.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(EtlError::ClientSetup)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetches every record from a paginated endpoint, page by page, in
    /// API-returned order.
    ///
    /// The loop re-reads `pagination.total_pages` from each response and
    /// keeps going while the page counter is within the last-seen value, so
    /// a collection growing mid-run extends the fetch. A response without a
    /// `total_pages` counts as a single page.
    ///
    /// Transport failures, timeouts and non-2xx statuses abort with
    /// [`EtlError::Network`]. A 2xx body that is not the expected JSON shape
    /// degrades to an empty page instead of failing.
    pub async fn fetch_all(&self, endpoint: &str) -> Result<Vec<RawRecord>> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), endpoint);
        tracing::info!("Fetching data from {}", url);

        let mut records = Vec::new();
        let mut page: u64 = 1;
        let mut total_pages: u64 = 1;

        while page <= total_pages {
            tracing::debug!("Requesting page {} of {} from {}", page, total_pages, url);
            let response = self
                .client
                .get(&url)
                .query(&[("page", page), ("per_page", PAGE_SIZE)])
                .send()
                .await
                .and_then(|resp| resp.error_for_status())
                .map_err(|e| EtlError::Network {
                    url: url.clone(),
                    source: e,
                })?;

            let body = response.bytes().await.map_err(|e| EtlError::Network {
                url: url.clone(),
                source: e,
            })?;
            // Unparseable 2xx bodies count as an empty page, not a failure.
            let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

            if let Some(data) = payload.get("data").and_then(Value::as_array) {
                for item in data {
                    if let Value::Object(obj) = item {
                        records.push(RawRecord::from(obj.clone()));
                    }
                }
            }

            total_pages = payload
                .pointer("/pagination/total_pages")
                .and_then(Value::as_u64)
                .unwrap_or(1);
            page += 1;
        }

        tracing::info!("Fetched {} records from {}", records.len(), url);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;
    use httpmock::prelude::*;
    use serde_json::json;

    fn page_body(ids: &[u64], total_pages: u64) -> Value {
        json!({
            "data": ids.iter().map(|id| json!({"id": id})).collect::<Vec<_>>(),
            "pagination": {"total_pages": total_pages, "page_size": PAGE_SIZE},
        })
    }

    #[tokio::test]
    async fn test_fetch_all_concatenates_pages_in_order() {
        let server = MockServer::start();
        let page1 = server.mock(|when, then| {
            when.method(GET)
                .path("/api/customers")
                .query_param("page", "1")
                .query_param("per_page", "100");
            then.status(200).json_body(page_body(&[1, 2], 3));
        });
        let page2 = server.mock(|when, then| {
            when.method(GET)
                .path("/api/customers")
                .query_param("page", "2");
            then.status(200).json_body(page_body(&[3], 3));
        });
        let page3 = server.mock(|when, then| {
            when.method(GET)
                .path("/api/customers")
                .query_param("page", "3");
            then.status(200).json_body(page_body(&[4, 5], 3));
        });

        let client = ApiClient::new(server.base_url()).unwrap();
        let records = client.fetch_all("/api/customers").await.unwrap();

        page1.assert();
        page2.assert();
        page3.assert();
        let ids: Vec<u64> = records
            .iter()
            .map(|r| r.data.get("id").unwrap().as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_fetch_all_empty_single_page() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/orders");
            then.status(200).json_body(page_body(&[], 1));
        });

        let client = ApiClient::new(server.base_url()).unwrap();
        let records = client.fetch_all("/api/orders").await.unwrap();

        api_mock.assert_hits(1);
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_server_error_is_network_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/customers");
            then.status(500);
        });

        let client = ApiClient::new(server.base_url()).unwrap();
        let err = client.fetch_all("/api/customers").await.unwrap_err();

        api_mock.assert_hits(1);
        assert_eq!(err.category(), ErrorCategory::Network);
        match err {
            EtlError::Network { url, .. } => assert!(url.ends_with("/api/customers")),
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_error_midway_stops_paging() {
        let server = MockServer::start();
        let page1 = server.mock(|when, then| {
            when.method(GET)
                .path("/api/customers")
                .query_param("page", "1");
            then.status(200).json_body(page_body(&[1], 5));
        });
        let page2 = server.mock(|when, then| {
            when.method(GET)
                .path("/api/customers")
                .query_param("page", "2");
            then.status(503);
        });
        let later_pages = server.mock(|when, then| {
            when.method(GET)
                .path("/api/customers")
                .query_param("page", "3");
            then.status(200).json_body(page_body(&[3], 5));
        });

        let client = ApiClient::new(server.base_url()).unwrap();
        let err = client.fetch_all("/api/customers").await.unwrap_err();

        page1.assert_hits(1);
        page2.assert_hits(1);
        later_pages.assert_hits(0);
        assert_eq!(err.category(), ErrorCategory::Network);
    }

    #[tokio::test]
    async fn test_fetch_all_rereads_total_pages_each_response() {
        let server = MockServer::start();
        let page1 = server.mock(|when, then| {
            when.method(GET)
                .path("/api/customers")
                .query_param("page", "1");
            then.status(200).json_body(page_body(&[1], 1));
        });
        let page2 = server.mock(|when, then| {
            when.method(GET)
                .path("/api/customers")
                .query_param("page", "2");
            then.status(200).json_body(page_body(&[2], 2));
        });

        // First page reports a single page, so the run ends after one request
        // even though a second page exists server-side.
        let client = ApiClient::new(server.base_url()).unwrap();
        let records = client.fetch_all("/api/customers").await.unwrap();

        page1.assert_hits(1);
        page2.assert_hits(0);
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_all_growing_total_pages_extends_run() {
        let server = MockServer::start();
        let page1 = server.mock(|when, then| {
            when.method(GET)
                .path("/api/customers")
                .query_param("page", "1");
            then.status(200).json_body(page_body(&[1], 2));
        });
        let page2 = server.mock(|when, then| {
            when.method(GET)
                .path("/api/customers")
                .query_param("page", "2");
            then.status(200).json_body(page_body(&[2], 3));
        });
        let page3 = server.mock(|when, then| {
            when.method(GET)
                .path("/api/customers")
                .query_param("page", "3");
            then.status(200).json_body(page_body(&[3], 3));
        });

        let client = ApiClient::new(server.base_url()).unwrap();
        let records = client.fetch_all("/api/customers").await.unwrap();

        page1.assert_hits(1);
        page2.assert_hits(1);
        page3.assert_hits(1);
        assert_eq!(records.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_all_missing_keys_degrade_gracefully() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/customers");
            then.status(200).json_body(json!({"unexpected": true}));
        });

        let client = ApiClient::new(server.base_url()).unwrap();
        let records = client.fetch_all("/api/customers").await.unwrap();

        api_mock.assert_hits(1);
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_malformed_body_is_empty_page() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/customers");
            then.status(200).body("not json at all");
        });

        let client = ApiClient::new(server.base_url()).unwrap();
        let records = client.fetch_all("/api/customers").await.unwrap();

        api_mock.assert_hits(1);
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_trims_trailing_base_url_slash() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/customers");
            then.status(200).json_body(page_body(&[1], 1));
        });

        let client = ApiClient::new(format!("{}/", server.base_url())).unwrap();
        let records = client.fetch_all("/api/customers").await.unwrap();

        api_mock.assert_hits(1);
        assert_eq!(records.len(), 1);
    }
}
