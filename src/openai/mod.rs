mod client;
pub mod dto;

use async_trait::async_trait;

use crate::error::ChatError;
pub use client::OpenAiClient;
pub use dto::ChatMessage;

/// A remote model that answers a conversation with one assistant turn.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<ChatMessage, ChatError>;
}
