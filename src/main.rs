//! Smart notes server.
//!
//! Serves the note pages, persists notes in sled, and answers the
//! categorize/summarize/sentiment requests made by the browser form
//! controller (served from `/pkg`, see `form::dom`).

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::sync::Arc;

    use anyhow::Context;
    use smart_notes::analysis::ChatAnalyzer;
    use smart_notes::config::Config;
    use smart_notes::notes::NoteStore;
    use smart_notes::{router, AppState};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smart_notes=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = sled::open(&config.db_path)
        .with_context(|| format!("failed to open database at {}", config.db_path.display()))?;
    let store = NoteStore::open(&db)?;
    let analyzer = ChatAnalyzer::from_config(&config)?;

    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set: categorize/summarize/sentiment will fail");
    }

    let state = Arc::new(AppState::new(store, Arc::new(analyzer)));
    let app = router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.addr))?;

    tracing::info!(addr = %config.addr, "Smart notes server running");
    tracing::info!(db = %config.db_path.display(), static_dir = %config.static_dir.display(), "storage");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
