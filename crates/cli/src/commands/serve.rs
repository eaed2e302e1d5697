use anyhow::Result;
use phonebook_core::env_config::{env_non_empty, env_parse_with_default};
use phonebook_core::{DEFAULT_PORT, PORT_VAR, STATIC_DIR_VAR};
use phonebook_http::{AppState, create_router};
use phonebook_service::PersonService;
use std::path::PathBuf;
use std::sync::Arc;

use crate::open_storage;

pub(crate) async fn run(
    port: Option<u16>,
    host: String,
    static_dir: Option<PathBuf>,
    in_memory: bool,
) -> Result<()> {
    let storage = open_storage(in_memory).await?;
    let person_service = Arc::new(PersonService::new(storage));

    let static_dir = static_dir.or_else(|| env_non_empty(STATIC_DIR_VAR).map(PathBuf::from));
    let state = AppState::new(person_service).with_static_dir(static_dir);

    let router = create_router(Arc::new(state));
    let port = port.unwrap_or_else(|| env_parse_with_default(PORT_VAR, DEFAULT_PORT));
    let addr = format!("{host}:{port}");
    tracing::info!("Server is running on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
