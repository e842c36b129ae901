// src/web/state.rs

use std::sync::Arc;

use crate::chat::ChatService;

/// Shared application state: the read-only service behind an Arc is the
/// only state requests share, so they may be served concurrently with
/// no coordination.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
}

impl AppState {
    pub fn new(chat: Arc<ChatService>) -> Self {
        Self { chat }
    }
}
