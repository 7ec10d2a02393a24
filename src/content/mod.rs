pub mod body_store;
pub mod content_renderer;
pub mod sanitizer;
pub mod text_renderer;
