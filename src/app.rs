/*
 * Responsibility
 * - Config loading -> dependency construction -> Router assembly
 * - Tracing/panic-hook setup, axum::serve() startup
 */
use std::{panic, process, sync::Arc};

use anyhow::Result;
use axum::{Router, routing::get};
use tonic::transport::Endpoint;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::api::handlers::health::health;
use crate::config::Config;
use crate::middleware;
use crate::services::access::GrpcAccessDecider;
use crate::services::basket::BasketService;
use crate::services::catalog::GrpcProductCatalog;
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,order_service=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Always surface panics via tracing so they don't get lost
        // (stderr can be hidden depending on how the process is launched).
        tracing::error!(?info, "panic");

        // In development, fail fast: crash the whole process so we notice
        // immediately. In production, keep the default behavior.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    let abort_on_panic = !config.app_env.is_production();
    init_panic_hook(abort_on_panic);

    tracing::info!(
        "starting order service in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_state(config: &Config) -> Result<AppState> {
    // connect_lazy: boot order of the services must not matter. Per-call
    // failures come back as a Status from the first rpc instead.
    let auth_channel = Endpoint::from_shared(config.auth_service_addr.clone())?
        .connect_timeout(config.upstream_timeout)
        .timeout(config.upstream_timeout)
        .connect_lazy();

    let product_channel = Endpoint::from_shared(config.product_service_addr.clone())?
        .connect_timeout(config.upstream_timeout)
        .timeout(config.upstream_timeout)
        .connect_lazy();

    let access = Arc::new(GrpcAccessDecider::new(auth_channel));
    let catalog = Arc::new(GrpcProductCatalog::new(product_channel));
    let basket = Arc::new(BasketService::new(catalog));

    Ok(AppState::new(basket, access))
}

pub fn build_router(state: AppState) -> Router {
    let basket_routes = middleware::auth::access::apply(api::routes(), state.clone());

    Router::new()
        .route("/health", get(health))
        .merge(basket_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
