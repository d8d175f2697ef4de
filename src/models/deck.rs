use std::fmt;
use std::str::FromStr;

use crate::error::SlideError;

pub const PPTX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

pub const MIN_SLIDES: u32 = 2;
pub const MAX_SLIDES: u32 = 20;
pub const DEFAULT_SLIDES: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Mixed,
    Bullet,
    TwoColumn,
    Image,
    Titles,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Mixed => "mixed",
            Layout::Bullet => "bullet",
            Layout::TwoColumn => "two-column",
            Layout::Image => "image",
            Layout::Titles => "titles",
        }
    }
}

impl FromStr for Layout {
    type Err = SlideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mixed" => Ok(Layout::Mixed),
            "bullet" => Ok(Layout::Bullet),
            "two-column" => Ok(Layout::TwoColumn),
            "image" => Ok(Layout::Image),
            "titles" => Ok(Layout::Titles),
            other => Err(SlideError::InvalidRequest(format!("unknown layout: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    #[default]
    Arial,
    Calibri,
    TimesNewRoman,
    Verdana,
}

impl Font {
    pub fn name(&self) -> &'static str {
        match self {
            Font::Arial => "Arial",
            Font::Calibri => "Calibri",
            Font::TimesNewRoman => "Times New Roman",
            Font::Verdana => "Verdana",
        }
    }
}

impl FromStr for Font {
    type Err = SlideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Arial" => Ok(Font::Arial),
            "Calibri" => Ok(Font::Calibri),
            "Times New Roman" => Ok(Font::TimesNewRoman),
            "Verdana" => Ok(Font::Verdana),
            other => Err(SlideError::InvalidRequest(format!("unsupported font: {other}"))),
        }
    }
}

/// `#RRGGBB` colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const BLACK: HexColor = HexColor { r: 0, g: 0, b: 0 };
    pub const DARK_GREY: HexColor = HexColor {
        r: 0x33,
        g: 0x33,
        b: 0x33,
    };
}

impl FromStr for HexColor {
    type Err = SlideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SlideError::InvalidRequest(format!("invalid colour: {s}"));
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(HexColor {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Where slide text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Ask the model.
    Generate,
    /// Text pasted by the user, one bullet or title per line, or a paragraph
    /// when `summarize` is set.
    Custom { text: String, summarize: bool },
}

#[derive(Debug, Clone)]
pub struct DeckSettings {
    pub topic: String,
    pub layout: Layout,
    pub source: ContentSource,
    pub slides: u32,
    pub font: Font,
    pub title_color: HexColor,
    pub bullet_color: HexColor,
    pub images: Vec<Vec<u8>>,
    pub stock_photo: bool,
}

impl DeckSettings {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            layout: Layout::default(),
            source: ContentSource::Generate,
            slides: DEFAULT_SLIDES,
            font: Font::default(),
            title_color: HexColor::BLACK,
            bullet_color: HexColor::DARK_GREY,
            images: Vec::new(),
            stock_photo: false,
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_custom_content(mut self, text: impl Into<String>, summarize: bool) -> Self {
        self.source = ContentSource::Custom {
            text: text.into(),
            summarize,
        };
        self
    }

    pub fn with_slides(mut self, slides: u32) -> Self {
        self.slides = slides;
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_colors(mut self, title: HexColor, bullet: HexColor) -> Self {
        self.title_color = title;
        self.bullet_color = bullet;
        self
    }

    pub fn with_image(mut self, bytes: Vec<u8>) -> Self {
        self.images.push(bytes);
        self
    }

    pub fn with_stock_photo(mut self, enabled: bool) -> Self {
        self.stock_photo = enabled;
        self
    }
}

/// A finished deck, ready to be offered as a download.
#[derive(Debug, Clone)]
pub struct Presentation {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
    pub image_credit: Option<String>,
}

impl Presentation {
    pub fn new(topic: &str, bytes: Vec<u8>, image_credit: Option<String>) -> Self {
        Self {
            file_name: file_name_for(topic),
            mime_type: PPTX_MIME_TYPE,
            bytes,
            image_credit,
        }
    }
}

pub fn file_name_for(topic: &str) -> String {
    format!("{}.pptx", topic.replace(' ', "_").to_lowercase())
}
