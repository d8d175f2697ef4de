use crate::{
    config::PexelsConfig,
    error::{Result, SlideError},
    logger,
    models::{ImageResult, PhotoSearchResponse},
};
use reqwest::Client;

/// Stock photo search plus download of the first hit.
#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    config: PexelsConfig,
}

impl ImageClient {
    pub fn new(client: Client, config: PexelsConfig) -> Self {
        Self { client, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Looks up one landscape photo for `topic`. A missing key or a search
    /// with no hits is `Ok(ImageResult::empty())`; transport and HTTP
    /// failures are `ImageUnavailable` for the caller to swallow.
    pub async fn fetch(&self, topic: &str) -> Result<ImageResult> {
        match self.config.api_key.as_deref() {
            Some(api_key) => self.search_and_download(api_key, topic).await,
            None => {
                log::debug!("No Pexels API key configured, skipping image for '{}'", topic);
                Ok(ImageResult::empty())
            }
        }
    }

    async fn search_and_download(&self, api_key: &str, topic: &str) -> Result<ImageResult> {
        let _timer = logger::timer("photo lookup");
        let url = format!("{}/search", self.config.base_url);

        log::info!("Searching stock photos for: {}", topic);

        let search: PhotoSearchResponse = self
            .client
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, api_key)
            .query(&[
                ("query", topic),
                ("per_page", "1"),
                ("orientation", "landscape"),
            ])
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| SlideError::ImageUnavailable(format!("photo search failed: {e}")))?
            .json()
            .await
            .map_err(|e| SlideError::ImageUnavailable(format!("unreadable search response: {e}")))?;

        let Some(hit) = search.photos.into_iter().next() else {
            log::info!("No stock photo found for: {}", topic);
            return Ok(ImageResult::empty());
        };

        let bytes = self
            .client
            .get(&hit.src.medium)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| SlideError::ImageUnavailable(format!("photo download failed: {e}")))?
            .bytes()
            .await
            .map_err(|e| SlideError::ImageUnavailable(format!("photo download failed: {e}")))?;

        log::debug!("Downloaded {} bytes from {}", bytes.len(), hit.src.medium);
        Ok(ImageResult::found(bytes.to_vec(), hit.credit()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn client_for(server: &Server, api_key: Option<&str>) -> ImageClient {
        let mut config = PexelsConfig::new().with_base_url(server.url());
        config.api_key = api_key.map(String::from);
        ImageClient::new(Client::new(), config)
    }

    #[tokio::test]
    async fn test_fetch_searches_then_downloads() {
        let mut server = Server::new_async().await;
        let base = server.url();
        let search = server
            .mock("GET", "/search")
            .match_header("authorization", "px-key")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("query".into(), "Ancient Egypt".into()),
                Matcher::UrlEncoded("per_page".into(), "1".into()),
                Matcher::UrlEncoded("orientation".into(), "landscape".into()),
            ]))
            .with_status(200)
            .with_body(
                json!({
                    "photos": [{
                        "photographer": "Jane Doe",
                        "src": {"medium": format!("{base}/photos/42/medium.jpeg")}
                    }]
                })
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;
        let download = server
            .mock("GET", "/photos/42/medium.jpeg")
            .with_status(200)
            .with_body(vec![0xFF, 0xD8, 0xFF, 0xE0])
            .expect(1)
            .create_async()
            .await;

        let result = client_for(&server, Some("px-key"))
            .fetch("Ancient Egypt")
            .await
            .unwrap();

        search.assert_async().await;
        download.assert_async().await;
        let photo = result.photo().unwrap();
        assert_eq!(photo.bytes, vec![0xFF, 0xD8, 0xFF, 0xE0]);
        assert_eq!(photo.credit, "Photo by Jane Doe via Pexels");
    }

    #[tokio::test]
    async fn test_fetch_without_key_makes_no_call() {
        let mut server = Server::new_async().await;
        let mock = server.mock("GET", Matcher::Any).expect(0).create_async().await;

        let result = client_for(&server, None).fetch("Volcanoes").await.unwrap();
        mock.assert_async().await;
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_zero_results_is_empty_not_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"photos": [], "total_results": 0}"#)
            .create_async()
            .await;

        let result = client_for(&server, Some("px-key")).fetch("qwertyuiop").await;
        assert_eq!(result.unwrap(), ImageResult::empty());
    }

    #[tokio::test]
    async fn test_search_failure_is_image_unavailable() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let err = client_for(&server, Some("px-key"))
            .fetch("Volcanoes")
            .await
            .unwrap_err();
        assert!(matches!(err, SlideError::ImageUnavailable(_)));
    }

    #[tokio::test]
    async fn test_download_failure_is_image_unavailable() {
        let mut server = Server::new_async().await;
        let base = server.url();
        let _search = server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                json!({
                    "photos": [{
                        "photographer": "Jane Doe",
                        "src": {"medium": format!("{base}/gone.jpeg")}
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;
        let _download = server
            .mock("GET", "/gone.jpeg")
            .with_status(404)
            .create_async()
            .await;

        let err = client_for(&server, Some("px-key"))
            .fetch("Volcanoes")
            .await
            .unwrap_err();
        assert!(matches!(err, SlideError::ImageUnavailable(_)));
    }
}
