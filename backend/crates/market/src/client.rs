//! Market Data Client
//!
//! Thin client for the government commodity-price resource. Filters are
//! passed through as the API's `filters[...]` query parameters; the result
//! count is clamped to a fixed cap.

use serde::{Deserialize, Serialize};

use crate::error::{MarketError, MarketResult};

/// Default endpoint for the daily mandi price resource
pub const DEFAULT_BASE_URL: &str =
    "https://api.data.gov.in/resource/9ef84268-d588-465a-a308-a864a43d0070";

/// Hard cap on the number of records per request
pub const MAX_RESULT_LIMIT: u32 = 500;

/// Default number of records when the caller gives no limit
pub const DEFAULT_RESULT_LIMIT: u32 = 100;

/// Optional filter set for a price lookup
#[derive(Debug, Clone, Default)]
pub struct PriceFilter {
    pub state: Option<String>,
    pub district: Option<String>,
    pub market: Option<String>,
    pub commodity: Option<String>,
}

/// One price record as reported upstream.
///
/// The upstream API serializes every field as a string; values are passed
/// through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceRecord {
    pub state: String,
    pub district: String,
    pub market: String,
    pub commodity: String,
    pub variety: String,
    pub arrival_date: String,
    pub min_price: String,
    pub max_price: String,
    pub modal_price: String,
}

#[derive(Debug, Deserialize)]
struct PriceResponse {
    #[serde(default)]
    records: Vec<PriceRecord>,
}

/// Client for the external pricing API
#[derive(Clone)]
pub struct MarketDataClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl MarketDataClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Fetch price records matching the filter, read-only.
    pub async fn fetch_prices(
        &self,
        filter: &PriceFilter,
        limit: Option<u32>,
    ) -> MarketResult<Vec<PriceRecord>> {
        let params = build_query(&self.api_key, filter, limit);

        let response = self
            .http
            .get(&self.base_url)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketError::Status(status.as_u16()));
        }

        let body: PriceResponse = response.json().await?;

        tracing::debug!(records = body.records.len(), "Fetched market prices");

        Ok(body.records)
    }
}

/// Build the upstream query parameter list.
fn build_query(
    api_key: &str,
    filter: &PriceFilter,
    limit: Option<u32>,
) -> Vec<(&'static str, String)> {
    let limit = limit
        .unwrap_or(DEFAULT_RESULT_LIMIT)
        .min(MAX_RESULT_LIMIT);

    let mut params = vec![
        ("api-key", api_key.to_string()),
        ("format", "json".to_string()),
        ("limit", limit.to_string()),
    ];

    if let Some(state) = &filter.state {
        params.push(("filters[state.keyword]", state.clone()));
    }
    if let Some(district) = &filter.district {
        params.push(("filters[district]", district.clone()));
    }
    if let Some(market) = &filter.market {
        params.push(("filters[market]", market.clone()));
    }
    if let Some(commodity) = &filter.commodity {
        params.push(("filters[commodity]", commodity.clone()));
    }

    params
}
