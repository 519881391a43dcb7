/*
 * Responsibility
 * - Basket request/response DTOs for the /order-service routes
 */
use serde::{Deserialize, Serialize};

use crate::services::basket::BasketLine;

/// One basket entry as returned by `GET /order-service`.
#[derive(Debug, Serialize)]
pub struct BasketLineResponse {
    pub id: i64,
    pub title: String,
    pub units: i32,
}

impl From<BasketLine> for BasketLineResponse {
    fn from(line: BasketLine) -> Self {
        Self {
            id: line.product_id,
            title: line.title,
            units: line.units,
        }
    }
}

/// Query for `POST /order-service/{product_id}`; `units` must be positive
/// (validated by the basket service, not here).
#[derive(Debug, Deserialize)]
pub struct AddToBasketQuery {
    pub units: i32,
}

/// Query for `PUT /order-service/{product_id}`; `units` is a signed delta.
#[derive(Debug, Deserialize)]
pub struct ModifyBasketQuery {
    pub units: i32,
}
