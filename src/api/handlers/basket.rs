/*
 * Responsibility
 * - /order-service handlers: read, add, modify
 * - Subject comes from AuthCtx (set by the auth middleware); handlers never
 *   look at the credential themselves
 */
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    api::dto::basket::{AddToBasketQuery, BasketLineResponse, ModifyBasketQuery},
    api::extractors::AuthCtxExtractor,
    error::AppError,
    state::AppState,
};

pub async fn get_basket(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<Vec<BasketLineResponse>>, AppError> {
    let lines = state.basket.basket(&ctx.subject_id)?;

    let res = lines.into_iter().map(BasketLineResponse::from).collect();
    Ok(Json(res))
}

pub async fn add_product_to_basket(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(product_id): Path<i64>,
    Query(query): Query<AddToBasketQuery>,
) -> Result<StatusCode, AppError> {
    state
        .basket
        .add(&ctx.subject_id, product_id, query.units)
        .await?;

    Ok(StatusCode::CREATED)
}

pub async fn modify_basket(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(product_id): Path<i64>,
    Query(query): Query<ModifyBasketQuery>,
) -> Result<StatusCode, AppError> {
    state
        .basket
        .modify(&ctx.subject_id, product_id, query.units)?;

    Ok(StatusCode::NO_CONTENT)
}
