/*
 * Responsibility
 * - URL structure of the basket routes; all of them sit behind the auth
 *   middleware (applied in app::build_router)
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::basket::{add_product_to_basket, get_basket, modify_basket};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/order-service", get(get_basket))
        .route(
            "/order-service/{product_id}",
            post(add_product_to_basket).put(modify_basket),
        )
}
