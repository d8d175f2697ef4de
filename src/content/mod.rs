pub mod cache;
pub mod image_client;
pub mod prompts;
pub mod text_client;

use crate::{
    config::Config,
    error::Result,
    models::{GenerationRequest, GenerationResult, ImageResult},
};
use async_trait::async_trait;
use reqwest::Client;

pub use cache::ResponseCache;
pub use image_client::ImageClient;
pub use text_client::TextClient;

/// What the deck builder needs from a content backend.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult>;

    /// Never fails; an unavailable image is an empty result.
    async fn fetch_image(&self, topic: &str) -> ImageResult;
}

/// Memoizing front for the chat and photo clients.
///
/// Each instance owns its caches. Two equal requests made through the same
/// instance hit the network once; drop the instance or call
/// [`ContentService::clear_cache`] to forget them.
pub struct ContentService {
    text_client: TextClient,
    image_client: ImageClient,
    text_cache: ResponseCache<GenerationRequest, GenerationResult>,
    image_cache: ResponseCache<String, ImageResult>,
}

impl ContentService {
    pub fn new(config: Config) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    pub fn with_http_client(client: Client, config: Config) -> Self {
        Self {
            text_client: TextClient::new(client.clone(), config.openrouter),
            image_client: ImageClient::new(client, config.pexels),
            text_cache: ResponseCache::new(),
            image_cache: ResponseCache::new(),
        }
    }

    pub fn text(&self) -> &TextClient {
        &self.text_client
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        request.validate()?;

        if let Some(cached) = self.text_cache.get(request) {
            log::debug!("Cache hit for {:?} '{}'", request.mode, request.topic);
            return Ok(cached);
        }

        let result = self.text_client.generate(request).await?;
        self.text_cache.insert(request.clone(), result.clone());
        Ok(result)
    }

    pub async fn fetch_image(&self, topic: &str) -> ImageResult {
        let key = topic.to_string();
        if let Some(cached) = self.image_cache.get(&key) {
            log::debug!("Cache hit for photo '{}'", topic);
            return cached;
        }

        match self.image_client.fetch(topic).await {
            Ok(result) => {
                self.image_cache.insert(key, result.clone());
                result
            }
            Err(e) => {
                log::warn!("Continuing without an image: {}", e);
                ImageResult::empty()
            }
        }
    }

    pub fn clear_cache(&self) {
        self.text_cache.clear();
        self.image_cache.clear();
    }

    pub fn cached_entries(&self) -> usize {
        self.text_cache.len() + self.image_cache.len()
    }
}

#[async_trait]
impl ContentProvider for ContentService {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        ContentService::generate(self, request).await
    }

    async fn fetch_image(&self, topic: &str) -> ImageResult {
        ContentService::fetch_image(self, topic).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OpenRouterConfig, PexelsConfig};
    use crate::error::SlideError;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn service_for(
        server: &Server,
        chat_key: Option<&str>,
        photo_key: Option<&str>,
    ) -> ContentService {
        let mut openrouter = OpenRouterConfig::new().with_base_url(server.url());
        openrouter.api_key = chat_key.map(String::from);
        let mut pexels = PexelsConfig::new().with_base_url(server.url());
        pexels.api_key = photo_key.map(String::from);
        ContentService::new(Config::new().with_openrouter(openrouter).with_pexels(pexels))
    }

    fn completion_body(content: &str) -> String {
        json!({"choices": [{"message": {"content": content}}]}).to_string()
    }

    #[tokio::test]
    async fn test_identical_requests_hit_network_once() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(completion_body("- one\n- two"))
            .expect(1)
            .create_async()
            .await;

        let service = service_for(&server, Some("sk-test"), None);
        let request = GenerationRequest::full_content("Ancient Egypt", 10);

        let first = service.generate(&request).await.unwrap();
        let second = service.generate(&request.clone()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(first, second);
        assert_eq!(service.cached_entries(), 1);
    }

    #[tokio::test]
    async fn test_different_arguments_are_separate_entries() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(completion_body("text"))
            .expect(3)
            .create_async()
            .await;

        let service = service_for(&server, Some("sk-test"), None);
        service
            .generate(&GenerationRequest::full_content("Rust", 4))
            .await
            .unwrap();
        service
            .generate(&GenerationRequest::full_content("Rust", 5))
            .await
            .unwrap();
        service
            .generate(&GenerationRequest::titles("Rust", 4))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(service.cached_entries(), 3);
    }

    #[tokio::test]
    async fn test_clear_cache_forces_new_call() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(completion_body("text"))
            .expect(2)
            .create_async()
            .await;

        let service = service_for(&server, Some("sk-test"), None);
        let request = GenerationRequest::titles("Rust", 4);
        service.generate(&request).await.unwrap();
        service.clear_cache();
        service.generate(&request).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_caches_are_per_instance() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(completion_body("text"))
            .expect(2)
            .create_async()
            .await;

        let request = GenerationRequest::titles("Rust", 4);
        service_for(&server, Some("sk-test"), None)
            .generate(&request)
            .await
            .unwrap();
        service_for(&server, Some("sk-test"), None)
            .generate(&request)
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(503)
            .expect(2)
            .create_async()
            .await;

        let service = service_for(&server, Some("sk-test"), None);
        let request = GenerationRequest::full_content("Rust", 3);
        assert!(service.generate(&request).await.is_err());
        assert!(service.generate(&request).await.is_err());

        mock.assert_async().await;
        assert_eq!(service.cached_entries(), 0);
    }

    #[tokio::test]
    async fn test_missing_chat_key_is_config_error_without_calls() {
        let mut server = Server::new_async().await;
        let mock = server.mock("POST", Matcher::Any).expect(0).create_async().await;

        let service = service_for(&server, None, Some("px-key"));
        let err = service
            .generate(&GenerationRequest::full_content("Rust", 3))
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, SlideError::ConfigError(_)));
    }

    #[tokio::test]
    async fn test_invalid_request_is_rejected_before_network() {
        let mut server = Server::new_async().await;
        let mock = server.mock("POST", Matcher::Any).expect(0).create_async().await;

        let service = service_for(&server, Some("sk-test"), None);
        let mut request = GenerationRequest::summarize("Rust", "text", 3);
        request.source_text = None;
        let err = service.generate(&request).await.unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, SlideError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_oversized_slide_count_is_rejected_before_network() {
        let mut server = Server::new_async().await;
        let mock = server.mock("POST", Matcher::Any).expect(0).create_async().await;

        let service = service_for(&server, Some("sk-test"), None);
        let err = service
            .generate(&GenerationRequest::full_content("Rust", 1_000_000_000))
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, SlideError::InvalidRequest(_)));
        assert_eq!(service.cached_entries(), 0);
    }

    #[tokio::test]
    async fn test_missing_photo_key_is_empty_without_calls() {
        let mut server = Server::new_async().await;
        let mock = server.mock("GET", Matcher::Any).expect(0).create_async().await;

        let service = service_for(&server, Some("sk-test"), None);
        assert!(service.fetch_image("Volcanoes").await.is_empty());

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_image_failure_degrades_and_is_retried() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(500)
            .expect(2)
            .create_async()
            .await;

        let service = service_for(&server, None, Some("px-key"));
        assert!(service.fetch_image("Volcanoes").await.is_empty());
        assert!(service.fetch_image("Volcanoes").await.is_empty());

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_image_hits_are_cached() {
        let mut server = Server::new_async().await;
        let base = server.url();
        let search = server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                json!({
                    "photos": [{
                        "photographer": "Ana",
                        "src": {"medium": format!("{base}/p.jpeg")}
                    }]
                })
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;
        let download = server
            .mock("GET", "/p.jpeg")
            .with_status(200)
            .with_body("jpeg")
            .expect(1)
            .create_async()
            .await;

        let service = service_for(&server, None, Some("px-key"));
        let first = service.fetch_image("Volcanoes").await;
        let second = service.fetch_image("Volcanoes").await;

        search.assert_async().await;
        download.assert_async().await;
        assert_eq!(first, second);
        assert_eq!(first.photo().unwrap().credit, "Photo by Ana via Pexels");
    }
}
