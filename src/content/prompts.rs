use crate::models::{GenerationMode, GenerationRequest};

/// Renders the prompt for `request`. Callers validate the request first; a
/// missing source text renders as an empty quote rather than panicking.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let n = request.target_count();
    let topic = &request.topic;
    let text = request.source_text.as_deref().unwrap_or_default();

    match request.mode {
        GenerationMode::FullContent => format!(
            "Generate {n} short, informative bullet points for a presentation on the topic: {topic}."
        ),
        GenerationMode::Titles => format!(
            "Generate {n} engaging, one-line slide titles for a presentation on the topic: '{topic}'. \
             Do not number them. Each title should be on a new line."
        ),
        GenerationMode::Summarize => format!(
            "Summarize the following paragraph into exactly {n} short, informative bullet points. \
             Each bullet point should start with a '-'.\n\nParagraph: \"{text}\""
        ),
        GenerationMode::ExtractTitles => format!(
            "Read the following text and extract {n} potential, engaging, one-line slide titles from it. \
             Each title should be on a new line. Do not number them.\n\nText: \"{text}\""
        ),
    }
}
