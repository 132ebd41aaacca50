use std::fmt::Write;

use crate::{Attribute, AttributeValue, Element, Node};

/// Serializes a markup tree to HTML.
#[derive(Debug, Default, Clone)]
pub struct Renderer {
    /// Write void elements as `<br>` rather than `<br/>`.
    pub html_void: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, node: &Node) -> String {
        let mut buf = String::new();
        // writing into a String cannot fail
        let _ = self.render_to(&mut buf, node);
        buf
    }

    pub fn render_to(&self, buf: &mut impl Write, node: &Node) -> std::fmt::Result {
        self.render_node(buf, node, None, false)
    }

    fn render_node(
        &self,
        buf: &mut impl Write,
        node: &Node,
        parent_namespace: Option<&'static str>,
        raw_text: bool,
    ) -> std::fmt::Result {
        match node {
            Node::Element(el) => self.render_element(buf, el, parent_namespace),
            Node::Text(text) if raw_text => buf.write_str(text),
            Node::Text(text) => write!(
                buf,
                "{}",
                askama_escape::escape(text, askama_escape::Html)
            ),
            Node::Raw(markup) => buf.write_str(markup),
        }
    }

    fn render_element(
        &self,
        buf: &mut impl Write,
        el: &Element,
        parent_namespace: Option<&'static str>,
    ) -> std::fmt::Result {
        write!(buf, "<{}", el.tag())?;

        if let Some(namespace) = el.namespace() {
            if el.namespace() != parent_namespace && el.attribute("xmlns").is_none() {
                write!(buf, " xmlns=\"{namespace}\"")?;
            }
        }

        let mut style_attr = None;
        for attr in el.attributes() {
            if attr.name == "style" {
                style_attr = Some(&attr.value);
                continue;
            }
            write_attribute(buf, attr)?;
        }

        if style_attr.is_some() || !el.styles().is_empty() {
            write!(buf, " style=\"")?;
            if let Some(value) = style_attr {
                let value = value.to_string();
                let value = value.trim();
                write!(buf, "{}", askama_escape::escape(value, askama_escape::Html))?;
                if !value.is_empty() && !value.ends_with(';') {
                    buf.write_char(';')?;
                }
            }
            for (property, value) in el.styles() {
                write!(
                    buf,
                    "{property}:{};",
                    askama_escape::escape(value, askama_escape::Html)
                )?;
            }
            buf.write_char('"')?;
        }

        if el.is_self_closing() {
            return buf.write_str(if self.html_void { ">" } else { "/>" });
        }

        buf.write_char('>')?;

        let raw_text = RAW_TEXT_ELEMENTS.contains(&el.tag());
        for child in el.children() {
            self.render_node(buf, child, el.namespace(), raw_text)?;
        }

        write!(buf, "</{}>", el.tag())
    }
}

/// Elements whose text content is never escaped.
pub(crate) const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

pub(crate) const BOOL_ATTRS: &[&str] = &[
    "allowfullscreen",
    "allowpaymentrequest",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "default",
    "defer",
    "disabled",
    "formnovalidate",
    "hidden",
    "inert",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "nomodule",
    "novalidate",
    "open",
    "playsinline",
    "readonly",
    "required",
    "reversed",
    "selected",
    "truespeed",
    "webkitdirectory",
];

pub(crate) fn write_attribute(buf: &mut impl Write, attr: &Attribute) -> std::fmt::Result {
    let name = &attr.name;
    match &attr.value {
        AttributeValue::Bool(true) => write!(buf, " {name}"),
        AttributeValue::Bool(false) => Ok(()),
        value if BOOL_ATTRS.contains(&&**name) => match value.is_truthy() {
            true => write!(buf, " {name}"),
            false => Ok(()),
        },
        AttributeValue::Text(value) => write!(
            buf,
            " {name}=\"{}\"",
            askama_escape::escape(value, askama_escape::Html)
        ),
        AttributeValue::Int(value) => write!(buf, " {name}=\"{value}\""),
        AttributeValue::Float(value) => write!(buf, " {name}=\"{value}\""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{attr, class, css, id, on};

    #[test]
    fn renders_nested_elements() {
        let node = Node::element("div", false).with((
            id("main"),
            class("card"),
            Node::element("p", false).with("hello"),
            Node::element("br", true),
        ));

        assert_eq!(
            node.render(),
            "<div id=\"main\" class=\"card\"><p>hello</p><br/></div>"
        );
    }

    #[test]
    fn void_style_is_configurable() {
        let renderer = Renderer { html_void: true };
        assert_eq!(renderer.render(&Node::element("hr", true)), "<hr>");
    }

    #[test]
    fn boolean_attributes() {
        let node = Node::element("input", true).with((
            attr("disabled", "false"),
            attr("checked", true),
            attr("required", "required"),
            attr("draggable", "true"),
            attr("hidden", false),
        ));

        assert_eq!(
            node.render(),
            "<input checked required draggable=\"true\"/>"
        );
    }

    #[test]
    fn styles_merge_with_style_attribute() {
        let node = Node::element("span", false).with((
            attr("style", "display: block"),
            css("color", "red"),
            css("margin", "0"),
            css("color", "blue"),
        ));

        assert_eq!(
            node.render(),
            "<span style=\"display: block;color:blue;margin:0;\"></span>"
        );
    }

    #[test]
    fn text_is_escaped_but_raw_is_not() {
        let node = Node::element("p", false).with((
            "<b>",
            Node::raw("&nbsp;<i>ok</i>"),
        ));
        let out = node.render();
        assert!(!out.contains("<b>"));
        assert!(out.ends_with("&nbsp;<i>ok</i></p>"));
    }

    #[test]
    fn script_and_style_text_is_verbatim() {
        let node = Node::element("style", false).with(".a > .b { color: red }");
        assert_eq!(node.render(), "<style>.a > .b { color: red }</style>");
    }

    #[test]
    fn listeners_are_not_rendered() {
        let node = Node::element("button", false).with((on("click", |_| {}), "Go"));
        assert_eq!(node.render(), "<button>Go</button>");
    }

    #[test]
    fn namespace_written_once() {
        let mut svg = Element::new_with_namespace("svg", "http://www.w3.org/2000/svg", false);
        svg.push_child(Element::new_with_namespace("circle", "http://www.w3.org/2000/svg", false).into());
        assert_eq!(
            Node::from(svg).render(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\"><circle></circle></svg>"
        );
    }
}
