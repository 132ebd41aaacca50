use pulldown_cmark::{html, Options, Parser};
use tagkit_core::{Modifier, Node};

use crate::{parse, Result};

/// Render CommonMark to HTML, with tables, strikethrough, footnotes and task lists enabled.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(text, options);
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Render markdown and parse the HTML into nodes, wrapping several blocks in a `section`.
pub fn markdown(text: &str, modifiers: impl Modifier) -> Result<Node> {
    parse(&render_markdown(text), modifiers)
}
