use std::sync::Arc;

use crate::config::Config;
use crate::openai::OpenAIClient;

/// Shared application state, cloned into each request handler.
///
/// Holds only configuration and the completion client; nothing in here is
/// mutated after startup and nothing is carried across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub openai: Arc<OpenAIClient>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let openai = Arc::new(OpenAIClient::new(
            config.openai_base_url.clone(),
            config.openai_api_key.clone(),
        ));

        Self { config, openai }
    }
}
