pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod logger;
pub mod navigation;
pub mod post;
pub mod post_collection;
pub mod record_store;
pub mod text_utils;
pub mod view;
mod test_data;
