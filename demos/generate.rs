use slidegen::{Config, ContentService, GenerationRequest};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::warn!("⚠️  No .env file found"),
    }
    slidegen::logger::init()?;

    let topic = env::args().nth(1).unwrap_or_else(|| "The Wonders of Ancient Egypt".to_string());
    let service = ContentService::new(Config::from_env());

    let request = GenerationRequest::summarize(
        &topic,
        "The pyramids of Giza were built as tombs for the pharaohs. \
         Hieroglyphs recorded religious texts and royal decrees. \
         The Nile flooded every year and made farming possible.",
        4,
    );
    let response = service.generate(&request).await?;
    println!("{:?}", response);

    let photo = service.fetch_image(&topic).await;
    println!("stock photo found: {}", !photo.is_empty());

    Ok(())
}
