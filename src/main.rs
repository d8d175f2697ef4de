use slidegen::{Config, ContentService, GenerationRequest, SlideError};
use std::env;
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    slidegen::logger::init_with_config(slidegen::logger::LoggerConfig::development())?;

    let mut args = env::args().skip(1);
    let topic = args
        .next()
        .unwrap_or_else(|| "The Wonders of Ancient Egypt".to_string());
    let slides = match args.next() {
        Some(raw) => raw.parse::<u32>()?,
        None => 5,
    };

    let config = Config::from_env();
    slidegen::logger::log_config_info(&config);
    let service = ContentService::new(config);

    log::info!(
        "📝 Generating {} slides on: {} (model: {})",
        slides,
        topic,
        service.text().model()
    );

    let titles = match service
        .generate(&GenerationRequest::titles(topic.as_str(), slides))
        .await
    {
        Ok(result) => result,
        Err(SlideError::ConfigError(msg)) => {
            log::error!("❌ {}", msg);
            log::warn!("💡 Set OPENROUTER_API_KEY in your environment or .env file");
            return Err(SlideError::ConfigError(msg).into());
        }
        Err(e) => {
            log::error!("❌ {}", e);
            return Err(e.into());
        }
    };

    let bullets = service
        .generate(&GenerationRequest::full_content(topic.as_str(), slides))
        .await?;

    log::info!("🏷️  Titles:");
    for line in titles.lines().iter().filter(|line| !line.trim().is_empty()) {
        log::info!("   {}", line.trim());
    }
    log::info!("📌 Bullets:");
    for line in bullets.lines().iter().filter(|line| !line.trim().is_empty()) {
        log::info!("   {}", line.trim());
    }

    if !service.image().is_configured() {
        log::info!("🖼️  PEXELS_API_KEY not set, skipping stock photo");
        return Ok(());
    }

    match service.fetch_image(&topic).await.into_photo() {
        Some(photo) => {
            let filename = slidegen::file_name_for(&topic).replace(".pptx", ".jpeg");
            fs::write(&filename, &photo.bytes)?;
            log::info!("🖼️  Saved stock photo to {} ({})", filename, photo.credit);
        }
        None => log::info!("🖼️  No stock photo for this topic"),
    }

    Ok(())
}
