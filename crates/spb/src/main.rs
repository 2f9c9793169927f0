use std::sync::Arc;

use tracing::info;

use spb_core::config::Config;
use spb_line::{router::AppState, LineClient};
use spb_statsapi::StatsApiClient;

#[tokio::main]
async fn main() -> Result<(), spb_core::Error> {
    spb_core::logging::init("spb")?;

    let cfg = Arc::new(Config::load()?);

    let stats = Arc::new(StatsApiClient::new(
        cfg.statsapi_base_url.clone(),
        cfg.http_timeout,
    ));
    let sink = Arc::new(LineClient::new(
        cfg.line_api_base_url.clone(),
        cfg.bot_token.clone(),
        cfg.http_timeout,
    ));

    let app = spb_line::router::build_router(AppState {
        cfg: cfg.clone(),
        stats,
        sink,
    });

    let addr = cfg.listen_addr();
    info!(%addr, "scoring plays bot listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
