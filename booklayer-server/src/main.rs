use std::{path::PathBuf, sync::Arc};

use booklayer::{
    memory::InMemoryBookStore,
    repository::{BookRepository, BookRepositoryBuilder},
};
use booklayer_server::{
    config::{Backend, Overrides, Settings},
    routes, server,
};
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "booklayer-server", version, about = "Book catalogue HTTP API")]
struct Cli {
    /// Path to a TOML settings file. Defaults to ./booklayer.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Store backing the API.
    #[arg(long, value_enum)]
    backend: Option<Backend>,
    /// Address to listen on, e.g. 0.0.0.0:8080.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load(
        cli.config.as_deref(),
        Overrides {
            backend: cli.backend,
            bind: cli.bind,
        },
    )?;

    let listener = TcpListener::bind(&settings.server.bind).await?;
    tracing::info!(backend = ?settings.backend, "listening on http://{}", listener.local_addr()?);

    match settings.backend {
        Backend::Memory => {
            let store = InMemoryBookStore::builder()
                .seed(settings.memory.seed)
                .build()
                .await?;

            server::serve(listener, routes::memory::router(store)).await?;
        }
        Backend::MongoDb => {
            let store = settings.mongodb.builder().build().await?;

            server::serve(listener, routes::document::router(Arc::new(store.clone()))).await?;

            if let Err(e) = store.shutdown().await {
                tracing::warn!(error = %e, "failed to disconnect from MongoDB");
            }
        }
    }

    Ok(())
}
