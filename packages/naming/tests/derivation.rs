use pretty_assertions::assert_eq;
use tagkit_naming::*;

#[test]
fn overrides_map_exactly() {
    for (namespace, table) in [(Namespace::Html, HTML_OVERRIDES), (Namespace::Svg, SVG_OVERRIDES)] {
        // reverse order to show lookups don't depend on call order
        for (tag, name) in table.iter().rev() {
            assert_eq!(derive_name(tag, namespace).unwrap(), *name);
        }
    }

    assert_eq!(derive_name("g", Namespace::Svg).unwrap(), "Group");
    assert_eq!(derive_name("dl", Namespace::Html).unwrap(), "DescriptionList");
    assert_eq!(derive_name("font-face-src", Namespace::Svg).unwrap(), "FontFaceSrc");
}

#[test]
fn fallback_camel_joins_and_capitalizes() {
    assert_eq!(derive_name("font-face-format", Namespace::Html).unwrap(), "FontFaceFormat");
    assert_eq!(derive_name("font-face-uri", Namespace::Html).unwrap(), "FontFaceUri");
    assert_eq!(derive_name("div", Namespace::Html).unwrap(), "Div");
    assert_eq!(derive_name("h1", Namespace::Html).unwrap(), "H1");
}

#[test]
fn svg_names_are_prefixed() {
    assert_eq!(derive_name("circle", Namespace::Svg).unwrap(), "SvgCircle");
    assert_eq!(derive_name("feGaussianBlur", Namespace::Svg).unwrap(), "SvgFeGaussianBlur");
    assert_eq!(derive_name("font-face-uri", Namespace::Svg).unwrap(), "SvgFontFaceUri");
    assert_eq!(derive_name("svg", Namespace::Svg).unwrap(), "Svg");
}

#[test]
fn bad_tags_fail() {
    assert_eq!(derive_name("", Namespace::Html), Err(NamingError::EmptyTag));
    assert!(matches!(
        derive_name("my_tag", Namespace::Html),
        Err(NamingError::InvalidIdentifier { .. })
    ));
    assert!(matches!(
        derive_name("-", Namespace::Html),
        Err(NamingError::InvalidIdentifier { .. })
    ));
    assert!(matches!(
        derive_name("9lives", Namespace::Svg),
        Err(NamingError::InvalidIdentifier { .. })
    ));
}

#[test]
fn deprecated_entries_are_skipped() {
    let mut deriver = Deriver::new();
    let entries = vec![
        SourceEntry::new("marquee").deprecated(),
        SourceEntry::new("div").with_description("The generic container."),
    ];

    let found = deriver.derive_all(Namespace::Html, &entries).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].canonical_name, "Div");
    assert_eq!(found[0].description, "The generic container.");
}

#[test]
fn colliding_names_fail_the_run() {
    let mut deriver = Deriver::new();
    deriver
        .derive(Namespace::Html, &SourceEntry::new("font-face"))
        .unwrap();

    // `fontFace` camel-joins to the same name as `font-face`
    let err = deriver
        .derive(Namespace::Html, &SourceEntry::new("fontFace"))
        .unwrap_err();

    assert_eq!(
        err,
        NamingError::DuplicateName {
            name: "FontFace".to_string(),
            first: "font-face".to_string(),
            first_namespace: Namespace::Html,
            second: "fontFace".to_string(),
            second_namespace: Namespace::Html,
        }
    );
}

#[test]
fn descriptors_carry_classification() {
    let mut deriver = Deriver::new();
    let entries = [
        SourceEntry::new("svg"),
        SourceEntry::new("use").with_link("https://developer.mozilla.org/en-US/docs/Web/SVG/Element/use"),
        SourceEntry::new("g"),
    ];

    let found = deriver.derive_all(Namespace::Svg, &entries).unwrap();
    let summary: Vec<_> = found
        .iter()
        .map(|d| (d.canonical_name.as_str(), d.function_name(), d.self_closing))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("Svg", "svg".to_string(), false),
            ("SvgUse", "svg_use".to_string(), true),
            ("Group", "group".to_string(), false),
        ]
    );
    assert_eq!(
        found[1].source_link,
        "https://developer.mozilla.org/en-US/docs/Web/SVG/Element/use"
    );
}

#[test]
fn derivation_is_deterministic() {
    let entries: Vec<_> = ["a", "circle", "g", "svg", "font-face-src", "linearGradient", "a"]
        .into_iter()
        .map(SourceEntry::new)
        .collect();

    let run = || {
        Deriver::new()
            .derive_all(Namespace::Svg, &entries)
            .unwrap()
            .into_iter()
            .map(|d| d.canonical_name)
            .collect::<Vec<_>>()
    };

    let first = run();
    assert_eq!(first, run());
    assert_eq!(
        first,
        vec!["SvgAnchor", "SvgCircle", "Group", "Svg", "FontFaceSrc", "SvgLinearGradient"]
    );
}

#[test]
fn namespaces_parse() {
    assert_eq!("svg".parse::<Namespace>().unwrap(), Namespace::Svg);
    assert_eq!("HTML".parse::<Namespace>().unwrap(), Namespace::Html);
    assert!(matches!(
        "mathml".parse::<Namespace>(),
        Err(NamingError::UnknownNamespace(_))
    ));
    assert_eq!(Namespace::Svg.uri(), Some("http://www.w3.org/2000/svg"));
    assert_eq!(Namespace::Html.uri(), None);
}
