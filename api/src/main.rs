use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use nutriai_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_logger(log: &LogArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if log.json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    if args.llm.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; completion endpoints will return 500");
    }

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;
    let app_state = state(args.clone());
    let router = router(app_state)?;

    info!("listening on {}", addr);
    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
