use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

use crate::content::body_store::BodyFormat;
use crate::content::sanitizer::Fixup;

pub const DEFAULT_CONTENT_INDENT: usize = 6;
pub const DEFAULT_DATE_FORMAT: &str = "%B %d, %Y";

#[derive(Deserialize)]
pub struct Paths {
    pub records_file: PathBuf,
    pub bodies_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template_file: Option<PathBuf>,
}

#[derive(Deserialize)]
pub struct Defaults {
    pub body_format: BodyFormat,
    pub content_indent: Option<usize>,
    pub date_format: Option<String>,
}

impl Defaults {
    pub fn content_indent(&self) -> usize {
        self.content_indent.unwrap_or(DEFAULT_CONTENT_INDENT)
    }

    pub fn date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub paths: Paths,
    pub defaults: Defaults,
    pub log: Option<Log>,
    #[serde(default)]
    pub fixups: Vec<Fixup>,
}

fn expand_path(path: PathBuf) -> io::Result<PathBuf> {
    let Some(str_path) = path.to_str() else {
        return Ok(path);
    };

    if str_path.starts_with("${exe_dir}") {
        let cur_exe = env::current_exe()?;
        let exe_dir = cur_exe.parent().unwrap_or(Path::new("."));
        let expanded = str_path.replacen("${exe_dir}", &exe_dir.to_string_lossy(), 1);
        return Ok(PathBuf::from(expanded));
    }

    if let Some(rest) = str_path.strip_prefix("~/") {
        let home = dirs::home_dir()
            .ok_or_else(|| io::Error::new(ErrorKind::NotFound, "Could not find user home dir"))?;
        return Ok(home.join(rest));
    }

    Ok(path)
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        records_file: expand_path(cfg.paths.records_file)?,
        bodies_dir: expand_path(cfg.paths.bodies_dir)?,
        output_dir: expand_path(cfg.paths.output_dir)?,
        template_file: cfg.paths.template_file.map(expand_path).transpose()?,
    };

    if let Some(ref mut log) = cfg.log {
        log.location = log.location.take().map(expand_path).transpose()?;
    }

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let cfg_str = r##"
[paths]
records_file = "data/posts.csv"
bodies_dir = "data/posts"
output_dir = "site/posts"
template_file = "theme/post.tpl"

[defaults]
body_format = "html"
content_indent = 4
date_format = "%Y-%m-%d"

[log]
level = "Debug"
log_to_console = true

[[fixups]]
slug = "some-post"
find = "teh"
replace = "the"
"##;
        let cfg = parse_config(cfg_str).unwrap();
        assert_eq!(cfg.paths.records_file, PathBuf::from("data/posts.csv"));
        assert_eq!(cfg.paths.template_file, Some(PathBuf::from("theme/post.tpl")));
        assert_eq!(cfg.defaults.body_format, BodyFormat::Html);
        assert_eq!(cfg.defaults.content_indent(), 4);
        assert_eq!(cfg.defaults.date_format(), "%Y-%m-%d");
        assert_eq!(cfg.log.unwrap().level, LogLevel::Debug);
        assert_eq!(cfg.fixups, vec![Fixup::new("some-post", "teh", "the")]);
    }

    #[test]
    fn test_parse_minimal_config() {
        let cfg_str = r##"
[paths]
records_file = "posts.csv"
bodies_dir = "posts"
output_dir = "out"

[defaults]
body_format = "text"
"##;
        let cfg = parse_config(cfg_str).unwrap();
        assert_eq!(cfg.defaults.body_format, BodyFormat::Text);
        assert_eq!(cfg.defaults.content_indent(), DEFAULT_CONTENT_INDENT);
        assert_eq!(cfg.defaults.date_format(), DEFAULT_DATE_FORMAT);
        assert!(cfg.paths.template_file.is_none());
        assert!(cfg.log.is_none());
        assert!(cfg.fixups.is_empty());
    }

    #[test]
    fn test_home_dir_expansion() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let path = expand_path(PathBuf::from("~/blog/posts.csv")).unwrap();
        assert_eq!(path, home.join("blog/posts.csv"));
    }

    #[test]
    fn test_invalid_config() {
        let err = parse_config("[paths]\nrecords_file = 1").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
