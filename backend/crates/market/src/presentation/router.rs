//! Market Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::client::MarketDataClient;
use crate::presentation::handlers::{self, MarketAppState};

/// Create the market router
pub fn market_router(client: MarketDataClient) -> Router {
    let state = MarketAppState {
        client: Arc::new(client),
    };

    Router::new()
        .route("/prices", get(handlers::prices))
        .with_state(state)
}
