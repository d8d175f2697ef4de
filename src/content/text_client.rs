use crate::{
    config::OpenRouterConfig,
    content::prompts::build_prompt,
    error::{Result, SlideError},
    logger,
    models::{ChatCompletion, ChatMessage, ChatRequest, GenerationRequest, GenerationResult},
};
use reqwest::Client;

/// Chat-completion client. One call per request, no retries.
#[derive(Clone)]
pub struct TextClient {
    client: Client,
    config: OpenRouterConfig,
}

impl TextClient {
    pub fn new(client: Client, config: OpenRouterConfig) -> Self {
        Self { client, config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| SlideError::ConfigError("OpenRouter API key is not set.".into()))?;

        let action = request.mode.action();
        let prompt = build_prompt(request);
        let payload = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
        };

        log::info!(
            "Requesting {:?} for '{}' from model: {}",
            request.mode,
            request.topic,
            self.config.model
        );
        log::debug!("Prompt: {}", prompt);

        let _timer = logger::timer("chat completion");
        let url = format!("{}/chat/completions", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                log::error!("{}: transport error: {}", action, e);
                SlideError::upstream(action, e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("{}: HTTP {} - {}", action, status, body);
            return Err(SlideError::upstream(
                action,
                format!("HTTP {status} from {url}: {body}"),
            ));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| SlideError::upstream(action, e))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| SlideError::upstream(action, "response contained no choices"))?;

        log::debug!("Received {} characters", text.len());
        Ok(GenerationResult::new(text))
    }
}
