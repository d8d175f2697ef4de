pub mod deck;
pub mod image;
pub mod text;

pub use deck::*;
pub use image::*;
pub use text::*;
