/*
 * Responsibility
 * - tokio runtime entrypoint; all logic lives in app::run()
 */
use anyhow::Result;

use order_service::app;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await
}
