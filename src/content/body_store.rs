use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Deserialize;

/// How post bodies are stored next to the record store.
#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BodyFormat {
    /// Pre-rendered markup named after the full post id, e.g. `ns.slug.html`.
    Html,
    /// Plain paragraphs named after the slug, e.g. `slug.md`.
    Text,
}

pub struct BodyStore {
    root: PathBuf,
    format: BodyFormat,
}

impl BodyStore {
    pub fn new(root: &Path, format: BodyFormat) -> BodyStore {
        BodyStore {
            root: root.to_path_buf(),
            format,
        }
    }

    pub fn format(&self) -> BodyFormat {
        self.format
    }

    pub fn locate(&self, post_id: &str, slug: &str) -> PathBuf {
        match self.format {
            BodyFormat::Html => self.root.join(format!("{}.html", post_id)),
            BodyFormat::Text => self.root.join(format!("{}.md", slug)),
        }
    }

    /// Reads the body of a post. A missing file is `Ok(None)`.
    pub fn load(&self, post_id: &str, slug: &str) -> io::Result<Option<String>> {
        let path = self.locate(post_id, slug);
        match fs::read_to_string(&path) {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io::Error::new(e.kind(), format!("Error reading {}: {}", path.display(), e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_locate() {
        let store = BodyStore::new(Path::new("bodies"), BodyFormat::Html);
        assert_eq!(store.locate("ns.my-post", "my-post"), PathBuf::from("bodies/ns.my-post.html"));

        let store = BodyStore::new(Path::new("bodies"), BodyFormat::Text);
        assert_eq!(store.locate("ns.my-post", "my-post"), PathBuf::from("bodies/my-post.md"));
    }

    #[test]
    fn test_load() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("ns.here.html"), "<p>hi</p>").unwrap();

        let store = BodyStore::new(tmp.path(), BodyFormat::Html);
        assert_eq!(store.load("ns.here", "here").unwrap(), Some("<p>hi</p>".to_string()));
        assert_eq!(store.load("ns.gone", "gone").unwrap(), None);
    }
}
