//! HTTP Handlers

use axum::Json;
use axum::extract::{Query, State};
use std::sync::Arc;

use crate::client::{MarketDataClient, PriceFilter};
use crate::error::MarketResult;
use crate::presentation::dto::{PriceQuery, PricesResponse};

/// Shared state for market handlers
#[derive(Clone)]
pub struct MarketAppState {
    pub client: Arc<MarketDataClient>,
}

/// GET /api/market/prices
pub async fn prices(
    State(state): State<MarketAppState>,
    Query(query): Query<PriceQuery>,
) -> MarketResult<Json<PricesResponse>> {
    let filter = PriceFilter {
        state: query.state,
        district: query.district,
        market: query.market,
        commodity: query.commodity,
    };

    let records = state.client.fetch_prices(&filter, query.limit).await?;

    Ok(Json(PricesResponse { records }))
}
