pub mod page_writer;
pub mod post_renderer;
