use serde::Deserialize;

/// A stock photo and its attribution line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub bytes: Vec<u8>,
    pub credit: String,
}

/// Outcome of a stock photo lookup. `None` means "carry on without an image".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageResult(pub Option<Photo>);

impl ImageResult {
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn found(bytes: Vec<u8>, credit: impl Into<String>) -> Self {
        Self(Some(Photo {
            bytes,
            credit: credit.into(),
        }))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn photo(&self) -> Option<&Photo> {
        self.0.as_ref()
    }

    pub fn into_photo(self) -> Option<Photo> {
        self.0
    }
}

#[derive(Debug, Deserialize)]
pub struct PhotoSearchResponse {
    #[serde(default)]
    pub photos: Vec<PhotoHit>,
}

#[derive(Debug, Deserialize)]
pub struct PhotoHit {
    pub photographer: String,
    pub src: PhotoSources,
}

#[derive(Debug, Deserialize)]
pub struct PhotoSources {
    pub medium: String,
}

impl PhotoHit {
    pub fn credit(&self) -> String {
        format!("Photo by {} via Pexels", self.photographer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_parses_first_hit() {
        let body = r#"{
            "total_results": 1,
            "photos": [{
                "id": 1,
                "photographer": "Jane Doe",
                "src": {"original": "https://x/o.jpg", "medium": "https://x/m.jpg"}
            }]
        }"#;
        let parsed: PhotoSearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.photos.len(), 1);
        assert_eq!(parsed.photos[0].src.medium, "https://x/m.jpg");
        assert_eq!(parsed.photos[0].credit(), "Photo by Jane Doe via Pexels");
    }

    #[test]
    fn test_missing_photos_field_is_empty() {
        let parsed: PhotoSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.photos.is_empty());
    }
}
