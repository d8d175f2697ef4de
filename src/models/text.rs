use serde::{Deserialize, Serialize};

use super::deck::{MAX_SLIDES, MIN_SLIDES};
use crate::error::{Result, SlideError};

/// Which prompt template to use, and how many lines to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationMode {
    /// Bullet points written from the topic alone.
    FullContent,
    /// Slide titles written from the topic alone.
    Titles,
    /// Slide titles pulled out of user-supplied text.
    ExtractTitles,
    /// User-supplied paragraph condensed into bullet points.
    Summarize,
}

impl GenerationMode {
    pub fn needs_source_text(&self) -> bool {
        matches!(self, GenerationMode::ExtractTitles | GenerationMode::Summarize)
    }

    /// Number of bullets or titles requested for a deck of `slide_count` slides.
    /// The first slide is the title slide, hence `- 1` for title modes.
    pub fn target_count(&self, slide_count: u32) -> u32 {
        match self {
            GenerationMode::FullContent => slide_count.saturating_mul(5),
            GenerationMode::Summarize => slide_count.saturating_mul(4),
            GenerationMode::Titles | GenerationMode::ExtractTitles => {
                slide_count.saturating_sub(1)
            }
        }
    }

    /// Label used in error messages when the remote call fails.
    pub fn action(&self) -> &'static str {
        match self {
            GenerationMode::FullContent => "Failed to generate content",
            GenerationMode::Titles => "Failed to generate titles",
            GenerationMode::ExtractTitles => "Failed to extract titles",
            GenerationMode::Summarize => "Failed to summarize content",
        }
    }
}

/// One content request. Equal requests share a cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenerationRequest {
    pub topic: String,
    pub slide_count: u32,
    pub mode: GenerationMode,
    pub source_text: Option<String>,
}

impl GenerationRequest {
    pub fn full_content(topic: impl Into<String>, slide_count: u32) -> Self {
        Self {
            topic: topic.into(),
            slide_count,
            mode: GenerationMode::FullContent,
            source_text: None,
        }
    }

    pub fn titles(topic: impl Into<String>, slide_count: u32) -> Self {
        Self {
            topic: topic.into(),
            slide_count,
            mode: GenerationMode::Titles,
            source_text: None,
        }
    }

    pub fn extract_titles(
        topic: impl Into<String>,
        source_text: impl Into<String>,
        slide_count: u32,
    ) -> Self {
        Self {
            topic: topic.into(),
            slide_count,
            mode: GenerationMode::ExtractTitles,
            source_text: Some(source_text.into()),
        }
    }

    pub fn summarize(
        topic: impl Into<String>,
        source_text: impl Into<String>,
        slide_count: u32,
    ) -> Self {
        Self {
            topic: topic.into(),
            slide_count,
            mode: GenerationMode::Summarize,
            source_text: Some(source_text.into()),
        }
    }

    pub fn target_count(&self) -> u32 {
        self.mode.target_count(self.slide_count)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_SLIDES..=MAX_SLIDES).contains(&self.slide_count) {
            return Err(SlideError::InvalidRequest(format!(
                "slide count must be between {MIN_SLIDES} and {MAX_SLIDES}, got {}",
                self.slide_count
            )));
        }

        let has_text = self
            .source_text
            .as_deref()
            .map_or(false, |text| !text.trim().is_empty());

        match (self.mode.needs_source_text(), has_text) {
            (true, false) => Err(SlideError::InvalidRequest(format!(
                "{:?} needs source text",
                self.mode
            ))),
            (false, _) if self.source_text.is_some() => Err(SlideError::InvalidRequest(format!(
                "{:?} works from the topic alone and does not take source text",
                self.mode
            ))),
            _ => Ok(()),
        }
    }
}

/// Raw model output. Line count is only approximately what was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub text: String,
}

impl GenerationResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn lines(&self) -> Vec<String> {
        self.text.split('\n').map(String::from).collect()
    }
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponseMessage {
    pub content: String,
}
