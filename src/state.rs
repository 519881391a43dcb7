/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 * - Clone is cheap: everything inside is behind an Arc
 */
use std::sync::Arc;

use crate::services::access::AccessDecider;
use crate::services::basket::BasketService;

#[derive(Clone)]
pub struct AppState {
    pub basket: Arc<BasketService>,
    pub access: Arc<dyn AccessDecider>,
}

impl AppState {
    pub fn new(basket: Arc<BasketService>, access: Arc<dyn AccessDecider>) -> Self {
        Self { basket, access }
    }
}
