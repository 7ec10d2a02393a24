/// Wraps every blank-line separated block of a plain text body in a paragraph.
pub fn render_paragraphs(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let mut rendered = String::new();
    for block in text.split("\n\n") {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        rendered.push_str("<p>");
        rendered.push_str(block);
        rendered.push_str("</p>\n");
    }
    rendered
}
