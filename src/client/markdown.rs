//! The rendering contract for message content.
//!
//! Content is markdown with the extended table and strikethrough syntax,
//! bare URLs become links, and fenced code blocks keep their language tag
//! as a `language-*` class for syntax highlighting. Raw HTML is escaped by
//! the renderer itself; there is no further sanitization layer.

use comrak::{markdown_to_html, Options};

pub fn render_html(content: &str) -> String {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.render.escape = true;

    let html = markdown_to_html(content, &options);

    // Every anchor the renderer emits starts with `<a href`, so hardening
    // them is a plain rewrite: open in a new context, leak no referrer.
    html.replace(
        "<a href",
        "<a target=\"_blank\" rel=\"noopener noreferrer\" href",
    )
}
