use ramhorns::Template;

use crate::error::GenerateError;
use crate::navigation::NavigationLink;
use crate::post::Post;
use crate::text_utils::indent_content;

pub const POST_TEMPLATE: &str = include_str!("../../res/template/post.tpl");
pub const POST_PLAIN_TEMPLATE: &str = include_str!("../../res/template/post_plain.tpl");

const HIDDEN_STYLE: &str = r#" style="visibility: hidden;""#;
const NO_TARGET: &str = "#";

#[derive(ramhorns::Content)]
struct PostPage<'a> {
    title: &'a str,
    date: &'a str,
    content: &'a str,
    prev_link: String,
    prev_title: &'a str,
    prev_style: &'a str,
    next_link: String,
    next_title: &'a str,
    next_style: &'a str,
}

struct NavFields<'a> {
    link: String,
    title: &'a str,
    style: &'a str,
}

impl<'a> NavFields<'a> {
    fn from(neighbor: Option<&'a Post>) -> NavFields<'a> {
        match neighbor {
            Some(post) => NavFields {
                link: post.file_name(),
                title: post.title.as_str(),
                style: "",
            },
            None => NavFields {
                link: NO_TARGET.to_string(),
                title: "",
                style: HIDDEN_STYLE,
            },
        }
    }
}

pub struct PostRenderer<'a> {
    template: Template<'a>,
    content_indent: usize,
}

impl<'a> PostRenderer<'a> {
    pub fn new(tpl_src: &'a str, content_indent: usize) -> Result<PostRenderer<'a>, GenerateError> {
        let template = match Template::new(tpl_src) {
            Ok(x) => x,
            Err(e) => return Err(GenerateError::Template(e.to_string())),
        };

        Ok(PostRenderer {
            template,
            content_indent,
        })
    }

    pub fn render(&self, post: &Post, nav: NavigationLink) -> String {
        let content = indent_content(&post.content, self.content_indent);
        let prev = NavFields::from(nav.previous);
        let next = NavFields::from(nav.next);

        self.template.render(&PostPage {
            title: post.title.as_str(),
            date: post.display_date.as_str(),
            content: content.as_str(),
            prev_link: prev.link,
            prev_title: prev.title,
            prev_style: prev.style,
            next_link: next.link,
            next_title: next.title,
            next_style: next.style,
        })
    }
}
