#[cfg(test)]
pub const RECORDS_CSV: &str = r#"post_id,title,post_date,is_published,type
goldenblue.first-light,"""First Light""",2024-01-01T10:00:00.000Z,true,newsletter
goldenblue.spring-tide,Spring Tide,2024-03-01T08:30:00.000Z,true,newsletter
goldenblue.midwinter,"""Midwinter""",2024-02-01T12:00:00.000Z,true,newsletter
goldenblue.draft-notes,Draft Notes,2024-04-01T09:00:00.000Z,false,newsletter
orphan,No Namespace,2024-05-01T09:00:00.000Z,true,newsletter
"#;

#[cfg(test)]
pub const POST_DATA_HTML: &str = r#"<p>The first light came over the ridge.</p>
<div class="preformatted-block" data-attrs="{&quot;language&quot;:&quot;text&quot;}"><label class="hide-text" contenteditable="false">Text within this block will maintain its original spacing when published</label><pre class="text">I.

the snow
  keeps falling</pre></div>
<p class="button-wrapper"><a class="button primary" href="https://example.substack.com/subscribe?"><span>Subscribe now</span></a></p>
<div class="subscription-widget-wrap"><div class="subscription-widget show-subscribe">
<p class="cta-caption">Thanks for reading! Subscribe for free.</p>
</div></div>
<p>Thanks for reading Golden Blue!
This post is public so feel free to share it.</p>
<iframe class="spotify-wrap" src="https://open.spotify.com/embed/track/123" frameborder="0">
</iframe>
<div class="image-container"><a class="image-link image2" href="https://cdn.example.com/img.jpeg"><img src="https://cdn.example.com/img.jpeg"></a><div class="image-link-expand"><div class="image-button">
<button tabindex="0" type="button">Open image</button></div></div></div>
<p>The end.</p>
"#;

#[cfg(test)]
pub const POST_DATA_TEXT: &str = "The tide came in early.\n\nIt left\nshells behind.\r\n\r\n\n\n   Last paragraph.  \n";
