//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::client::PriceRecord;

/// Query parameters for a price lookup
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceQuery {
    pub state: Option<String>,
    pub district: Option<String>,
    pub market: Option<String>,
    pub commodity: Option<String>,
    pub limit: Option<u32>,
}

/// Price lookup response
#[derive(Debug, Clone, Serialize)]
pub struct PricesResponse {
    pub records: Vec<PriceRecord>,
}
