use crate::content::body_store::BodyFormat;
use crate::content::sanitizer::{FixupTable, Sanitizer};
use crate::content::text_renderer::render_paragraphs;

/// Turns a raw body payload into the markup placed in the page.
pub trait ContentRenderer {
    fn render(&self, slug: &str, raw: &str) -> String;
}

impl ContentRenderer for Sanitizer {
    fn render(&self, slug: &str, raw: &str) -> String {
        self.sanitize(slug, raw)
    }
}

pub struct ParagraphRenderer {}

impl ContentRenderer for ParagraphRenderer {
    fn render(&self, _slug: &str, raw: &str) -> String {
        render_paragraphs(raw)
    }
}

pub fn renderer_for(format: BodyFormat, fixups: FixupTable) -> Box<dyn ContentRenderer> {
    match format {
        BodyFormat::Html => Box::new(Sanitizer::new(fixups)),
        BodyFormat::Text => Box::new(ParagraphRenderer {}),
    }
}
