use std::sync::LazyLock;

use handlebars::Handlebars;
use serde::Serialize;
use tagkit_core::{Modifier, Node};

use crate::{parse, Result};

/// Output is HTML-escaped. Missing bindings are errors.
static MARKUP: LazyLock<Handlebars<'static>> = LazyLock::new(|| {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    hbs
});

/// Output is written as-is, for stylesheets.
static VERBATIM: LazyLock<Handlebars<'static>> = LazyLock::new(|| {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    hbs.register_escape_fn(handlebars::no_escape);
    hbs
});

/// Expand a handlebars template against `bindings`, then parse the result.
///
/// Values substituted into the template are escaped, so bindings cannot inject markup.
///
/// ```
/// use tagkit_html::{parse_template, prelude::*};
/// use serde_json::json;
///
/// let node = parse_template("<h1>{{title}}</h1>", &json!({ "title": "Hi" }), id("top")).unwrap();
/// assert_eq!(node.render(), "<h1 id=\"top\">Hi</h1>");
/// ```
pub fn parse_template(
    template: &str,
    bindings: &impl Serialize,
    modifiers: impl Modifier,
) -> Result<Node> {
    let markup = MARKUP.render_template(template, bindings)?;
    parse(&markup, modifiers)
}

pub(crate) fn expand_verbatim(template: &str, bindings: &impl Serialize) -> Result<String> {
    Ok(VERBATIM.render_template(template, bindings)?)
}
