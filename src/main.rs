//! ModestWear Storefront - shopping store service

use std::sync::Arc;

use anyhow::Result;
use modestwear_storefront::api::{self, AppState};
use modestwear_storefront::config::{Backend, Config};
use modestwear_storefront::{FileStore, KeyValueStore, MemoryStore, Store, Synchronizer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())).with(tracing_subscriber::fmt::layer()).init();
    let config = Config::from_env()?;

    match config.backend {
        Backend::File => {
            let kv = FileStore::open(&config.data_dir).await?;
            tracing::info!(dir = %kv.root().display(), "using file storage");
            serve(config, kv).await
        }
        Backend::Memory => {
            tracing::warn!("using in-memory storage; state will not survive a restart");
            serve(config, MemoryStore::new()).await
        }
    }
}

async fn serve<K: KeyValueStore>(config: Config, kv: K) -> Result<()> {
    let store = Arc::new(Store::new());
    let sync = Synchronizer::new(kv);
    sync.rehydrate(&store).await;
    let _sync_task = sync.spawn(&store);

    let app = api::router(AppState::new(Arc::clone(&store), config.checkout.clone()));
    tracing::info!("🛍️ ModestWear storefront listening on 0.0.0.0:{}", config.port);
    axum::serve(tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?, app).await?;
    Ok(())
}
