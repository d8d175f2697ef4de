pub mod config;
pub mod content;
pub mod deck;
pub mod error;
pub mod logger;
pub mod models;

pub use config::{Config, OpenRouterConfig, PexelsConfig};
pub use content::{ContentProvider, ContentService, ImageClient, TextClient};
pub use deck::{plan_content, AssemblyInput, ContentPlan, DeckBuilder, DocumentAssembler};
pub use error::{Result, SlideError};
pub use models::*;
