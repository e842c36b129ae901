// src/cli/serve.rs
// Server bootstrap: credential -> config -> store -> client -> service -> bind

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::chat::ChatService;
use crate::config::{Credential, ServerConfig};
use crate::llm::{ChatModel, GeminiClient};
use crate::prompts::FilePromptStore;
use crate::web::{self, state::AppState};

pub async fn run(token_path: &Path, config_path: &Path, root: &Path) -> Result<()> {
    // Credential first: a missing or empty api_key is fatal before
    // anything else is built
    let credential = Credential::load(token_path)?;
    let config = ServerConfig::load(config_path);

    let store = Arc::new(FilePromptStore::open(root)?);
    let model: Arc<dyn ChatModel> = Arc::new(GeminiClient::new(credential.api_key));

    info!(
        model = %model.model_name(),
        root = %root.display(),
        "relay configured"
    );

    let service = Arc::new(ChatService::new(store, model));
    let app = web::create_router(AppState::new(service));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("pricel relay listening on http://{}", addr);
    println!("pricel relay listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
