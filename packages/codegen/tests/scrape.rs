use pretty_assertions::assert_eq;
use tagkit_codegen::{derive_catalog, scrape};
use tagkit_naming::Namespace;

const SVG_PAGE: &str = include_str!("fixtures/svg_reference.html");
const HTML_PAGE: &str = include_str!("fixtures/html_reference.html");

fn tags(manifest: &tagkit_codegen::Manifest) -> Vec<(&str, bool)> {
    manifest
        .elements
        .iter()
        .map(|entry| (entry.tag.as_str(), entry.deprecated))
        .collect()
}

#[test]
fn scrapes_definition_lists() {
    let manifest = scrape(SVG_PAGE, Namespace::Svg).unwrap();
    assert_eq!(manifest.namespace, Namespace::Svg);
    assert_eq!(
        tags(&manifest),
        [
            ("a", false),
            ("circle", false),
            ("feFuncA", false),
            ("g", false),
            ("svg", false),
            ("use", false),
            ("tref", true),
            ("font-face-src", true),
            ("altGlyph", true),
        ]
    );

    let circle = &manifest.elements[1];
    assert_eq!(circle.description, "Draws a circle.");
    assert_eq!(
        circle.link,
        "https://developer.mozilla.org/en-US/docs/Web/SVG/Element/circle"
    );
}

#[test]
fn scrapes_tables_and_heading_ranges() {
    let manifest = scrape(HTML_PAGE, Namespace::Html).unwrap();
    assert_eq!(
        tags(&manifest),
        [
            ("address", false),
            ("h1", false),
            ("h2", false),
            ("h3", false),
            ("nav", false),
            ("dl", false),
            ("h1", false),
            ("center", true),
        ]
    );
    assert_eq!(manifest.elements[0].description, "Contact information.");
}

#[test]
fn scraped_pages_derive_cleanly() {
    let html = scrape(HTML_PAGE, Namespace::Html).unwrap();
    let svg = scrape(SVG_PAGE, Namespace::Svg).unwrap();
    let descriptors = derive_catalog(&[html, svg]).unwrap();

    let names: Vec<_> = descriptors
        .iter()
        .map(|d| d.canonical_name.as_str())
        .collect();
    assert_eq!(
        names,
        [
            "Address",
            "H1",
            "H2",
            "H3",
            "Navigation",
            "DescriptionList",
            "SvgAnchor",
            "SvgCircle",
            "SvgFeFuncA",
            "Group",
            "Svg",
            "SvgUse",
        ]
    );
    assert!(descriptors.iter().find(|d| d.raw_tag == "use").unwrap().self_closing);
}

#[test]
fn manifests_survive_a_toml_round_trip() {
    let manifest = scrape(SVG_PAGE, Namespace::Svg).unwrap();
    let text = manifest.to_toml().unwrap();
    let parsed: tagkit_codegen::Manifest = toml::from_str(&text).unwrap();
    assert_eq!(parsed, manifest);
}
