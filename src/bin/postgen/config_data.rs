use std::fs;
use std::io;
use std::path::Path;

pub(crate) const CONFIG_SAMPLE: &str = r#"# For the file locations, if you want them relative to the executable directory
# use ${exe_dir}/location. A leading ~/ points to the home directory.
[paths]
records_file = "~/blog/posts.csv"
bodies_dir = "~/blog/posts"
output_dir = "site/posts"
# template_file = "theme/post.tpl"

# body_format: "html" for pre-rendered bodies named <post_id>.html,
# "text" for plain paragraphs named <slug>.md
[defaults]
body_format = "html"
content_indent = 6
date_format = "%B %d, %Y"

# [log]
# level = "Info"
# log_to_console = true
# location = "~/.cache/postgen/postgen.log"

# Manual corrections, applied to the cleaned body of a single post
# [[fixups]]
# slug = "my-post"
# find = "<pre>I.\n\n"
# replace = "<pre>      I.\n\n"
"#;

pub(crate) fn write_sample_cfg(file_path: &Path) -> io::Result<()> {
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, CONFIG_SAMPLE)
}

#[cfg(test)]
mod tests {
    use postgen::config::parse_config;

    use super::*;

    #[test]
    fn test_sample_is_valid() {
        let cfg = parse_config(CONFIG_SAMPLE).unwrap();
        assert_eq!(cfg.defaults.content_indent(), 6);
        assert!(cfg.fixups.is_empty());
    }
}
