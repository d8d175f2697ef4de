use crate::{
    error::Result,
    models::{Font, HexColor, Layout},
};

/// Everything the assembler needs to lay out one deck.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyInput<'a> {
    pub topic: &'a str,
    pub lines: &'a [String],
    pub slide_count: u32,
    pub layout: Layout,
    pub font: Font,
    pub title_color: HexColor,
    pub bullet_color: HexColor,
    pub images: &'a [Vec<u8>],
}

/// Turns text lines into a presentation file.
///
/// Implementations own the layout algorithm and return the bytes of a
/// complete `.pptx`. Failures should be reported as
/// [`crate::SlideError::AssemblyError`].
pub trait DocumentAssembler: Send + Sync {
    fn build(&self, input: &AssemblyInput<'_>) -> Result<Vec<u8>>;
}
