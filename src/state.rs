use crate::chat::ChatRepository;
use crate::config::AppConfig;
use crate::diary::DiaryRepository;
use crate::foods::FoodRepository;
use crate::meals::MealRepository;
use crate::openai::{ChatCompletion, OpenAiClient};
use crate::profile::ProfileRepository;
use std::sync::Arc;

/// Every repository the app owns. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub foods: FoodRepository,
    pub meals: MealRepository,
    pub diary: DiaryRepository,
    pub profile: ProfileRepository,
    pub chat: ChatRepository,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let client = Arc::new(OpenAiClient::new(&config.openai)) as Arc<dyn ChatCompletion>;
        Ok(Self::from_parts(config, client))
    }

    pub fn from_parts(config: Arc<AppConfig>, client: Arc<dyn ChatCompletion>) -> Self {
        Self {
            config,
            foods: FoodRepository::with_catalog(),
            meals: MealRepository::new(),
            diary: DiaryRepository::new(),
            profile: ProfileRepository::new(),
            chat: ChatRepository::new(client),
        }
    }

    /// State backed by a local stand-in model: replies `echo: <text>` and
    /// fails whenever the last user message is `fail`.
    #[cfg(test)]
    pub fn fake() -> Self {
        use crate::error::ChatError;
        use crate::openai::dto::Role;
        use crate::openai::ChatMessage;
        use async_trait::async_trait;

        struct EchoModel;
        #[async_trait]
        impl ChatCompletion for EchoModel {
            async fn complete(&self, messages: &[ChatMessage]) -> Result<ChatMessage, ChatError> {
                let last = messages
                    .iter()
                    .rev()
                    .find(|m| m.role == Role::User)
                    .map(|m| m.content.as_str())
                    .unwrap_or_default();
                if last == "fail" {
                    return Err(ChatError::EmptyResponse);
                }
                Ok(ChatMessage::assistant(format!("echo: {last}")))
            }
        }

        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            openai: crate::config::OpenAiConfig {
                api_key: "test".into(),
                base_url: "http://localhost".into(),
                model: "test".into(),
                temperature: 0.0,
            },
        });

        Self::from_parts(config, Arc::new(EchoModel))
    }
}
