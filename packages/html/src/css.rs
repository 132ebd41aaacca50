//! `<style>` elements built from CSS templates, optionally scoped under a selector.

use cssparser::{ParseError, ParseErrorKind, Parser, ParserInput, SourcePosition, Token};
use serde::Serialize;
use tagkit_core::Node;

use crate::{style, templates::expand_verbatim, Error, Result};

/// Build a `<style>` element.
///
/// With `plain` set, `rules` is used exactly as written. Otherwise it is first expanded as a
/// template against `bindings`, and then, if `scope` is given, every rule is scoped under it.
///
/// ```
/// use tagkit_html::stylesheet;
/// use serde_json::json;
///
/// let node = stylesheet("p { color: {{color}} }", &json!({ "color": "red" }), Some("#app"), false).unwrap();
/// assert_eq!(node.render(), "<style>#app p { color: red }</style>");
/// ```
pub fn stylesheet(
    rules: &str,
    bindings: &impl Serialize,
    scope: Option<&str>,
    plain: bool,
) -> Result<Node> {
    if plain {
        return Ok(style(rules));
    }

    let css = expand_verbatim(rules, bindings)?;
    let css = match scope {
        Some(scope) => scope_css(&css, scope)?,
        None => css,
    };

    Ok(style(css))
}

/// At-rules whose blocks hold more rules that need scoping.
const GROUPING_RULES: &[&str] = &["media", "supports", "container", "layer", "document"];

#[derive(Debug, Clone, Copy)]
enum ScopeError {
    StrayCloseBrace,
    MissingBlock,
}

type CssParseError<'i> = ParseError<'i, ScopeError>;

/// Prefix every selector in `css` with `scope`. A selector containing `&` has it replaced
/// by the scope instead.
pub fn scope_css(css: &str, scope: &str) -> Result<String> {
    let scope = scope.trim();
    if scope.is_empty() {
        return Err(Error::Stylesheet {
            message: "empty scope selector".to_string(),
            line: 1,
            column: 1,
        });
    }

    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut out = String::with_capacity(css.len() + scope.len() * 8);

    scope_rules(&mut parser, scope, &mut out).map_err(|err| Error::Stylesheet {
        message: match err.kind {
            ParseErrorKind::Custom(ScopeError::StrayCloseBrace) => "unexpected `}`".to_string(),
            ParseErrorKind::Custom(ScopeError::MissingBlock) => {
                "expected `{` after selector".to_string()
            }
            ParseErrorKind::Basic(kind) => format!("{kind:?}"),
        },
        line: err.location.line + 1,
        column: err.location.column,
    })?;

    Ok(out)
}

fn scope_rules<'i>(
    parser: &mut Parser<'i, '_>,
    scope: &str,
    out: &mut String,
) -> Result<(), CssParseError<'i>> {
    loop {
        let start = parser.state();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(()),
        };

        match token {
            Token::WhiteSpace(_) | Token::Comment(_) | Token::CDO | Token::CDC => {
                out.push_str(parser.slice_from(start.position()));
            }

            Token::CloseCurlyBracket => {
                return Err(parser.new_custom_error(ScopeError::StrayCloseBrace));
            }

            Token::AtKeyword(name) => {
                let prelude = read_prelude(parser);
                let grouping = GROUPING_RULES
                    .iter()
                    .any(|&rule| name.eq_ignore_ascii_case(rule));

                match prelude.end {
                    PreludeEnd::Block if grouping => {
                        out.push('@');
                        out.push_str(&name);
                        out.push_str(prelude.text.trim_end());
                        out.push_str(" {");
                        parser.parse_nested_block(|p| scope_rules(p, scope, out))?;
                        out.push('}');
                    }
                    PreludeEnd::Block => {
                        parser.parse_nested_block(|p| {
                            while p.next_including_whitespace_and_comments().is_ok() {}
                            Ok::<_, CssParseError>(())
                        })?;
                        out.push_str(parser.slice_from(start.position()));
                    }
                    PreludeEnd::Semicolon | PreludeEnd::Eof => {
                        out.push_str(parser.slice_from(start.position()));
                    }
                }
            }

            _ => {
                parser.reset(&start);
                let prelude = read_prelude(parser);
                match prelude.end {
                    PreludeEnd::Block => {
                        let selectors: Vec<String> = prelude
                            .selectors
                            .iter()
                            .map(|parts| scope_selector(parts, scope))
                            .collect();
                        out.push_str(&selectors.join(", "));
                        out.push_str(" {");
                        parser.parse_nested_block(|p| {
                            let body = p.position();
                            while p.next_including_whitespace_and_comments().is_ok() {}
                            out.push_str(p.slice_from(body));
                            Ok::<_, CssParseError>(())
                        })?;
                        out.push('}');
                    }
                    PreludeEnd::Eof if prelude.text.trim().is_empty() => return Ok(()),
                    PreludeEnd::Semicolon | PreludeEnd::Eof => {
                        return Err(parser.new_custom_error(ScopeError::MissingBlock));
                    }
                }
            }
        }
    }
}

/// Join the pieces around each nesting `&` with the scope, or prefix the scope when there are none.
fn scope_selector(parts: &[&str], scope: &str) -> String {
    match parts {
        [selector] => format!("{scope} {}", selector.trim()),
        _ => parts.join(scope).trim().to_string(),
    }
}

enum PreludeEnd {
    Block,
    Semicolon,
    Eof,
}

type Span = (SourcePosition, SourcePosition);

struct Prelude<'i> {
    /// Everything up to the terminator.
    text: &'i str,

    /// Each selector in `text`, split on top-level commas and then cut around every nesting `&`.
    selectors: Vec<Vec<&'i str>>,

    end: PreludeEnd,
}

/// Read up to and including the `{` or `;` that ends a rule prelude.
///
/// Commas inside nested blocks (`:is(a, b)`, `[x]`) do not separate selectors. Only `&` delim
/// tokens count as nesting selectors, so an `&` in a string or escaped identifier is left alone.
fn read_prelude<'i>(parser: &mut Parser<'i, '_>) -> Prelude<'i> {
    let start = parser.position();
    let mut segment = start;
    let mut marks = Vec::new();
    let mut selectors = Vec::new();

    loop {
        let before = parser.position();
        let token = parser
            .next_including_whitespace_and_comments()
            .map(|token| token.clone());

        let end = match token {
            Ok(Token::CurlyBracketBlock) => PreludeEnd::Block,
            Ok(Token::Semicolon) => PreludeEnd::Semicolon,
            Ok(Token::Comma) => {
                selectors.push(split_at_marks(parser, segment, before, &mut marks));
                segment = parser.position();
                continue;
            }
            Ok(Token::Delim('&')) => {
                marks.push((before, parser.position()));
                continue;
            }
            Ok(Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock) => {
                nesting_marks(parser, &mut marks);
                continue;
            }
            Ok(_) => continue,
            Err(_) => PreludeEnd::Eof,
        };

        selectors.push(split_at_marks(parser, segment, before, &mut marks));
        return Prelude {
            text: parser.slice(start..before),
            selectors,
            end,
        };
    }
}

/// Record every `&` inside the block the parser has just opened.
fn nesting_marks(parser: &mut Parser<'_, '_>, marks: &mut Vec<Span>) {
    let _ = parser.parse_nested_block(|p| {
        loop {
            let before = p.position();
            let token = p
                .next_including_whitespace_and_comments()
                .map(|token| token.clone());
            match token {
                Ok(Token::Delim('&')) => marks.push((before, p.position())),
                Ok(
                    Token::Function(_)
                    | Token::ParenthesisBlock
                    | Token::SquareBracketBlock
                    | Token::CurlyBracketBlock,
                ) => nesting_marks(p, marks),
                Ok(_) => {}
                Err(_) => break,
            }
        }
        Ok::<_, CssParseError>(())
    });
}

fn split_at_marks<'i>(
    parser: &Parser<'i, '_>,
    from: SourcePosition,
    to: SourcePosition,
    marks: &mut Vec<Span>,
) -> Vec<&'i str> {
    let mut parts = Vec::with_capacity(marks.len() + 1);
    let mut at = from;
    for (mark_start, mark_end) in marks.drain(..) {
        parts.push(parser.slice(at..mark_start));
        at = mark_end;
    }
    parts.push(parser.slice(at..to));
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scopes_each_selector() {
        assert_eq!(
            scope_css("h1, .title > em { margin: 0 }", ".card").unwrap(),
            ".card h1, .card .title > em { margin: 0 }"
        );
    }

    #[test]
    fn ampersand_marks_the_scope() {
        assert_eq!(
            scope_css("&.active, & + p { color: red }", "#nav").unwrap(),
            "#nav.active, #nav + p { color: red }"
        );
    }

    #[test]
    fn ampersand_in_strings_and_escapes_is_not_nesting() {
        assert_eq!(
            scope_css(r#"a[href*="&x"] { color: red }"#, ".card").unwrap(),
            r#".card a[href*="&x"] { color: red }"#
        );
        assert_eq!(
            scope_css(r".a\&b { color: red }", ".card").unwrap(),
            r".card .a\&b { color: red }"
        );
    }

    #[test]
    fn ampersand_inside_functions_marks_the_scope() {
        assert_eq!(
            scope_css(":is(&, .x) p, :not(&) { a: b }", "#app").unwrap(),
            ":is(#app, .x) p, :not(#app) { a: b }"
        );
    }

    #[test]
    fn commas_inside_functions_do_not_split() {
        assert_eq!(
            scope_css(":is(h1, h2) span { x: y }", "main").unwrap(),
            "main :is(h1, h2) span { x: y }"
        );
    }

    #[test]
    fn grouping_rules_are_scoped_inside() {
        let css = "@media (max-width: 600px) { p { color: red } }";
        assert_eq!(
            scope_css(css, ".a").unwrap(),
            "@media (max-width: 600px) { .a p { color: red } }"
        );
    }

    #[test]
    fn other_at_rules_are_verbatim() {
        let css = "@import url(a.css);\n@keyframes spin { from { opacity: 0 } to { opacity: 1 } }\n";
        assert_eq!(scope_css(css, ".a").unwrap(), css);
    }

    #[test]
    fn comments_and_whitespace_survive() {
        assert_eq!(
            scope_css("/* top */\np{a:b}\n", "#x").unwrap(),
            "/* top */\n#x p {a:b}\n"
        );
    }

    #[test]
    fn malformed_css_is_reported() {
        assert!(matches!(
            scope_css("p { a: b } }", ".x"),
            Err(Error::Stylesheet { .. })
        ));
        assert!(matches!(
            scope_css("p; div { }", ".x"),
            Err(Error::Stylesheet { .. })
        ));
        assert!(matches!(scope_css("p {}", "  "), Err(Error::Stylesheet { .. })));
    }
}
