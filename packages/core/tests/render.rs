use pretty_assertions::assert_eq;
use tagkit_core::{prelude::*, Renderer};

#[test]
fn escapes_text_and_attributes() {
    let node = Node::element("a", false).with((
        attr("title", "\"quoted\" & <tagged>"),
        "1 < 2 && 3 > 2",
    ));
    let out = node.render();

    assert!(out.starts_with("<a title=\""));
    assert!(!out.contains("<tagged>"));
    assert!(!out.contains("\"quoted\""));
    assert!(out.contains("&amp;"));
    assert!(!out.contains("1 < 2"));
}

#[test]
fn numbers_render_plainly() {
    let node = Node::element("td", false).with((attr("colspan", 2), attr("data-ratio", 0.5)));
    assert_eq!(node.render(), "<td colspan=\"2\" data-ratio=\"0.5\"></td>");
}

#[test]
fn display_matches_render() {
    let node = Node::element("p", false).with((class("lead"), "hello"));
    assert_eq!(node.to_string(), node.render());
}

#[test]
fn html_void_mode() {
    let node = Node::element("p", false).with((
        "a",
        Node::element("br", true),
        "b",
    ));
    assert_eq!(Renderer { html_void: true }.render(&node), "<p>a<br>b</p>");
    assert_eq!(Renderer::new().render(&node), "<p>a<br/>b</p>");
}

#[test]
fn explicit_xmlns_is_not_duplicated() {
    let mut svg = Element::new_with_namespace("svg", "http://www.w3.org/2000/svg", false);
    svg.set_attribute("xmlns", "http://www.w3.org/2000/svg");
    let out = Node::from(svg).render();
    assert_eq!(out.matches("xmlns").count(), 1);
}

#[test]
fn text_roots_render_alone() {
    assert_eq!(Node::text("a&b").render(), "a&amp;b");
    assert_eq!(Node::raw("&nbsp;").render(), "&nbsp;");
}
