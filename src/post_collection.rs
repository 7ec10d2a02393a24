use std::slice::Iter;

use spdlog::{debug, warn};

use crate::content::body_store::BodyStore;
use crate::content::content_renderer::ContentRenderer;
use crate::error::RecordStoreError;
use crate::post::{Post, PostId};
use crate::record_store::{Record, FIELD_IS_PUBLISHED, FIELD_POST_DATE, FIELD_POST_ID, FIELD_TITLE};
use crate::text_utils::{strip_quotes, PostDate};

/// Published posts, most recent first.
#[derive(Debug, Default)]
pub struct PostCollection {
    posts: Vec<Post>,
    pub skipped: usize,
    pub unpublished: usize,
    /// One message per skipped record, in record order.
    pub warnings: Vec<String>,
}

impl PostCollection {
    pub fn from_posts(mut posts: Vec<Post>) -> PostCollection {
        // Stable, so posts sharing a date keep the record store order
        posts.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
        PostCollection {
            posts,
            skipped: 0,
            unpublished: 0,
            warnings: vec![],
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn iter(&self) -> Iter<'_, Post> {
        self.posts.iter()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

pub struct CollectionBuilder<'a> {
    pub bodies: &'a BodyStore,
    pub renderer: &'a dyn ContentRenderer,
    pub date_format: &'a str,
}

enum Outcome {
    Accepted(Post),
    Unpublished,
    Skipped(String),
}

impl CollectionBuilder<'_> {
    pub fn build<I>(&self, records: I) -> PostCollection
    where
        I: IntoIterator<Item = Result<Record, RecordStoreError>>,
    {
        let mut posts = vec![];
        let mut warnings = vec![];
        let mut unpublished = 0;

        for record in records {
            let outcome = match record {
                Ok(record) => self.process(&record),
                Err(e) => Outcome::Skipped(format!("Skipping malformed record: {}", e)),
            };

            match outcome {
                Outcome::Accepted(post) => posts.push(post),
                Outcome::Unpublished => unpublished += 1,
                Outcome::Skipped(msg) => {
                    warn!("{}", msg);
                    warnings.push(msg);
                }
            }
        }

        let mut collection = PostCollection::from_posts(posts);
        collection.skipped = warnings.len();
        collection.unpublished = unpublished;
        collection.warnings = warnings;
        collection
    }

    fn process(&self, record: &Record) -> Outcome {
        let post_id = record.get(FIELD_POST_ID).unwrap_or_default();

        if record.get(FIELD_IS_PUBLISHED) != Some("true") {
            debug!("Ignoring unpublished post {}", post_id);
            return Outcome::Unpublished;
        }

        let post_id = PostId(post_id.to_string());
        let Some(slug) = post_id.slug() else {
            return Outcome::Skipped(format!("Post id '{}' has no slug, skipping", post_id.0));
        };

        let raw_body = match self.bodies.load(&post_id.0, slug) {
            Ok(Some(body)) => body,
            Ok(None) => {
                let path = self.bodies.locate(&post_id.0, slug);
                return Outcome::Skipped(format!("{} not found", path.display()));
            }
            Err(e) => return Outcome::Skipped(e.to_string()),
        };

        let date = PostDate::parse(record.get(FIELD_POST_DATE).unwrap_or_default());
        let display_date = date.display(self.date_format);

        Outcome::Accepted(Post {
            slug: slug.to_string(),
            title: strip_quotes(record.get(FIELD_TITLE).unwrap_or_default()).to_string(),
            date,
            display_date,
            content: self.renderer.render(slug, &raw_body),
        })
    }
}
