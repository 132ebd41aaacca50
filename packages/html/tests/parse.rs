use pretty_assertions::assert_eq;
use serde_json::json;
use tagkit_html::{prelude::*, render_markdown, Error};

#[test]
fn single_node_gets_modifiers_directly() {
    let node = parse("<p>hello</p>", (id("greeting"), class("big"))).unwrap();
    assert_eq!(node.render(), "<p id=\"greeting\" class=\"big\">hello</p>");
}

#[test]
fn several_nodes_are_wrapped_in_a_section() {
    let node = parse("<h1>A</h1><p>B</p>", class("post")).unwrap();
    assert_eq!(
        node.render(),
        "<section class=\"post\"><h1>A</h1><p>B</p></section>"
    );
}

#[test]
fn empty_input_gives_an_empty_section() {
    assert_eq!(parse("", ()).unwrap().render(), "<section></section>");
}

#[test]
fn comments_are_dropped() {
    let node = parse("<div><!-- note --><span>x</span></div>", ()).unwrap();
    assert_eq!(node.render(), "<div><span>x</span></div>");
}

#[test]
fn attributes_are_sorted_after_id_and_class() {
    let node = parse(
        r#"<input type="checkbox" class="a b" id="agree" disabled name="agree">"#,
        (),
    )
    .unwrap();
    assert_eq!(
        node.render(),
        "<input id=\"agree\" class=\"a b\" disabled name=\"agree\" type=\"checkbox\"/>"
    );
}

#[test]
fn entities_survive_a_round_trip() {
    let node = parse(r#"<a title="Tom &amp; Jerry">Tom &amp; Jerry</a>"#, ()).unwrap();
    let el = node.as_element().unwrap();
    assert_eq!(el.attribute("title").and_then(|v| v.as_text()), Some("Tom & Jerry"));
    assert_eq!(
        node.render(),
        "<a title=\"Tom &amp; Jerry\">Tom &amp; Jerry</a>"
    );
}

#[test]
fn modifiers_compose_with_parsed_children() {
    let node = parse("<ul><li>one</li></ul>", tag("li", "two")).unwrap();
    assert_eq!(node.render(), "<ul><li>one</li><li>two</li></ul>");
}

#[test]
fn parse_in_root_drops_the_root() {
    let row = parse_in_root("tr", "<td>1</td><td>2</td>", ()).unwrap();
    assert_eq!(row.render(), "<section><td>1</td><td>2</td></section>");

    let cell = parse_in_root("tr", "<td>1</td>", class("num")).unwrap();
    assert_eq!(cell.render(), "<td class=\"num\">1</td>");
}

#[test]
fn parse_in_svg_root_uses_the_svg_namespace() {
    let node = parse_in_root("svg", "<circle r=\"1\"></circle>", ()).unwrap();
    let el = node.as_element().unwrap();
    assert_eq!(el.tag(), "circle");
    assert_eq!(el.namespace(), Some("http://www.w3.org/2000/svg"));
}

#[test]
fn parse_in_root_rejects_bad_roots() {
    for root in ["", "br", "two words", "<div>"] {
        assert!(
            matches!(parse_in_root(root, "x", ()), Err(Error::InvalidRoot(_))),
            "{root:?}"
        );
    }
}

#[test]
fn templates_escape_bindings() {
    let node = parse_template(
        "<p class=\"{{kind}}\">{{body}}</p>",
        &json!({ "kind": "note", "body": "<script>alert(1)</script>" }),
        (),
    )
    .unwrap();

    let out = node.render();
    assert!(out.starts_with("<p class=\"note\">"));
    assert!(!out.contains("<script>"));
}

#[test]
fn templates_loop_and_wrap() {
    let node = parse_template(
        "{{#each items}}<li>{{this}}</li>{{/each}}",
        &json!({ "items": ["a", "b"] }),
        id("list"),
    )
    .unwrap();
    assert_eq!(
        node.render(),
        "<section id=\"list\"><li>a</li><li>b</li></section>"
    );
}

#[test]
fn missing_bindings_are_errors() {
    let err = parse_template("<p>{{missing}}</p>", &json!({}), ()).unwrap_err();
    assert!(matches!(err, Error::Template(_)));
}

#[test]
fn broken_templates_are_errors() {
    let err = parse_template("<p>{{#if x}}</p>", &json!({ "x": true }), ()).unwrap_err();
    assert!(matches!(err, Error::Template(_)));
}

#[test]
fn markdown_blocks() {
    let single = markdown("Just *one* paragraph.", class("lead")).unwrap();
    let el = single.as_element().unwrap();
    assert_eq!(el.tag(), "p");
    assert_eq!(el.classes().collect::<Vec<_>>(), ["lead"]);
    assert!(single.text_content().contains("one"));

    let many = markdown("# Title\n\nBody text.", ()).unwrap();
    let el = many.as_element().unwrap();
    assert_eq!(el.tag(), "section");
    assert_eq!(
        el.children().iter().filter_map(Node::tag).collect::<Vec<_>>(),
        ["h1", "p"]
    );
}

#[test]
fn markdown_html_is_plain_text() {
    assert!(render_markdown("a ~~b~~").contains("<del>b</del>"));
}

#[test]
fn stylesheets() {
    let plain = stylesheet("p > a { color: {{c}} }", &json!({}), Some(".x"), true).unwrap();
    assert_eq!(plain.render(), "<style>p > a { color: {{c}} }</style>");

    let scoped = stylesheet(
        "a { color: {{color}} }\n@media print { a { color: black } }",
        &json!({ "color": "#333" }),
        Some("[data-card]"),
        false,
    )
    .unwrap();
    assert_eq!(
        scoped.render(),
        "<style>[data-card] a { color: #333 }\n@media print { [data-card] a { color: black } }</style>"
    );

    let unscoped = stylesheet("a{b:{{v}}}", &json!({ "v": "1" }), None, false).unwrap();
    assert_eq!(unscoped.render(), "<style>a{b:1}</style>");
}

#[test]
fn stylesheet_template_errors_propagate() {
    assert!(matches!(
        stylesheet("a { b: {{nope}} }", &json!({}), None, false),
        Err(Error::Template(_))
    ));
}
