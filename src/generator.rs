use std::fs;
use std::path::PathBuf;

use spdlog::{debug, info};

use crate::config::Config;
use crate::content::body_store::{BodyFormat, BodyStore};
use crate::content::content_renderer::renderer_for;
use crate::content::sanitizer::FixupTable;
use crate::error::GenerateError;
use crate::navigation::resolve;
use crate::post_collection::{CollectionBuilder, PostCollection};
use crate::record_store::RecordStore;
use crate::view::page_writer::PageWriter;
use crate::view::post_renderer::{PostRenderer, POST_PLAIN_TEMPLATE, POST_TEMPLATE};

#[derive(Debug, Default)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
    pub skipped: usize,
    pub unpublished: usize,
}

fn load_template(config: &Config) -> Result<String, GenerateError> {
    match config.paths.template_file {
        Some(ref path) => fs::read_to_string(path).map_err(|source| GenerateError::TemplateFile {
            path: path.clone(),
            source,
        }),
        None => Ok(match config.defaults.body_format {
            BodyFormat::Html => POST_TEMPLATE,
            BodyFormat::Text => POST_PLAIN_TEMPLATE,
        }.to_string()),
    }
}

pub fn build_collection(config: &Config) -> Result<PostCollection, GenerateError> {
    let records = RecordStore::open(&config.paths.records_file)?;

    let mut fixups = FixupTable::default();
    fixups.extend(config.fixups.iter().cloned())?;

    let bodies = BodyStore::new(&config.paths.bodies_dir, config.defaults.body_format);
    let renderer = renderer_for(bodies.format(), fixups);
    let builder = CollectionBuilder {
        bodies: &bodies,
        renderer: renderer.as_ref(),
        date_format: config.defaults.date_format(),
    };

    Ok(builder.build(records))
}

/// Renders every published post of the record store into the output directory.
pub fn generate(config: &Config) -> Result<GenerationReport, GenerateError> {
    let collection = build_collection(config)?;
    debug!("{} posts to render, {} skipped, {} unpublished",
        collection.len(), collection.skipped, collection.unpublished);

    let template_src = load_template(config)?;
    let renderer = PostRenderer::new(&template_src, config.defaults.content_indent())?;
    let writer = PageWriter::new(&config.paths.output_dir)?;

    let posts = collection.posts();
    let mut written = Vec::with_capacity(posts.len());
    for (i, post) in posts.iter().enumerate() {
        let page = renderer.render(post, resolve(posts, i));
        let path = writer.write(&post.file_name(), &page)?;
        info!("Created: {}", path.display());
        written.push(path);
    }

    info!("Done generating post pages!");

    Ok(GenerationReport {
        written,
        skipped: collection.skipped,
        unpublished: collection.unpublished,
    })
}
