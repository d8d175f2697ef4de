pub mod assembler;

use crate::{
    content::ContentProvider,
    error::{Result, SlideError},
    logger,
    models::{
        ContentSource, DeckSettings, GenerationRequest, GenerationResult, Layout, Presentation,
        MAX_SLIDES, MIN_SLIDES,
    },
};
use std::sync::Arc;

pub use assembler::{AssemblyInput, DocumentAssembler};

/// How the slide text will be obtained for a given set of settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPlan {
    Request(GenerationRequest),
    Verbatim(String),
}

/// Checks the settings and picks a prompt mode, or decides the user's text
/// can be used as-is.
pub fn plan_content(settings: &DeckSettings) -> Result<ContentPlan> {
    let topic = settings.topic.trim();
    if topic.is_empty() {
        return Err(SlideError::InvalidRequest("Please enter a topic.".into()));
    }
    if !(MIN_SLIDES..=MAX_SLIDES).contains(&settings.slides) {
        return Err(SlideError::InvalidRequest(format!(
            "Number of slides must be between {MIN_SLIDES} and {MAX_SLIDES}, got {}",
            settings.slides
        )));
    }

    let slides = settings.slides;
    let plan = match (&settings.source, settings.layout) {
        (ContentSource::Custom { text, .. }, _) if text.trim().is_empty() => {
            return Err(SlideError::InvalidRequest(
                "Please paste your custom content.".into(),
            ));
        }
        (ContentSource::Generate, Layout::Titles) => {
            ContentPlan::Request(GenerationRequest::titles(topic, slides))
        }
        (ContentSource::Custom { text, .. }, Layout::Titles) => {
            ContentPlan::Request(GenerationRequest::extract_titles(topic, text.as_str(), slides))
        }
        (ContentSource::Generate, _) => {
            ContentPlan::Request(GenerationRequest::full_content(topic, slides))
        }
        (ContentSource::Custom { text, summarize: true }, _) => {
            ContentPlan::Request(GenerationRequest::summarize(topic, text.as_str(), slides))
        }
        (ContentSource::Custom { text, summarize: false }, _) => ContentPlan::Verbatim(text.clone()),
    };

    Ok(plan)
}

/// Runs one generation action: content, optional photo, assembly.
#[derive(Clone)]
pub struct DeckBuilder {
    content: Arc<dyn ContentProvider>,
    assembler: Arc<dyn DocumentAssembler>,
}

impl DeckBuilder {
    pub fn new(content: Arc<dyn ContentProvider>, assembler: Arc<dyn DocumentAssembler>) -> Self {
        Self { content, assembler }
    }

    pub async fn build(&self, settings: &DeckSettings) -> Result<Presentation> {
        let _timer = logger::timer("deck build");

        let plan = plan_content(settings)?;
        let text = match plan {
            ContentPlan::Request(request) => {
                log::info!(
                    "Generating {:?} content for '{}' ({} slides)",
                    request.mode,
                    request.topic,
                    request.slide_count
                );
                self.content.generate(&request).await?.text
            }
            ContentPlan::Verbatim(text) => {
                log::info!("Using custom content as-is for '{}'", settings.topic);
                text
            }
        };
        let lines = GenerationResult::new(text).lines();

        let (images, image_credit) = self.collect_images(settings).await;

        let input = AssemblyInput {
            topic: settings.topic.trim(),
            lines: &lines,
            slide_count: settings.slides,
            layout: settings.layout,
            font: settings.font,
            title_color: settings.title_color,
            bullet_color: settings.bullet_color,
            images: &images,
        };
        let bytes = self.assembler.build(&input)?;

        let presentation = Presentation::new(settings.topic.trim(), bytes, image_credit);
        log::info!(
            "Built {} ({} bytes, {} lines, {} images)",
            presentation.file_name,
            presentation.bytes.len(),
            lines.len(),
            images.len()
        );
        Ok(presentation)
    }

    async fn collect_images(&self, settings: &DeckSettings) -> (Vec<Vec<u8>>, Option<String>) {
        if settings.layout == Layout::Titles {
            if !settings.images.is_empty() {
                log::debug!("Titles layout ignores {} uploaded images", settings.images.len());
            }
            return (Vec::new(), None);
        }

        if !settings.images.is_empty() {
            return (settings.images.clone(), None);
        }

        if !settings.stock_photo {
            return (Vec::new(), None);
        }

        match self.content.fetch_image(settings.topic.trim()).await.into_photo() {
            Some(photo) => (vec![photo.bytes], Some(photo.credit)),
            None => (Vec::new(), None),
        }
    }
}
