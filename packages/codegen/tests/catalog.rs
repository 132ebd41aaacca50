use std::path::Path;

use pretty_assertions::assert_eq;
use tagkit_codegen::{derive_catalog, generate, load_manifests, render_catalog, Error, GenConfig};

const CHECKED_IN: &str = include_str!("../../html/src/elements/catalog.rs");

fn shipped_config() -> GenConfig {
    GenConfig::load(Path::new(GenConfig::DEFAULT_PATH)).unwrap()
}

#[test]
fn checked_in_catalog_is_current() {
    let manifests = load_manifests(&shipped_config()).unwrap();
    let descriptors = derive_catalog(&manifests).unwrap();
    assert_eq!(render_catalog(&descriptors), CHECKED_IN);
}

#[test]
fn catalog_table_matches_the_manifests() {
    let manifests = load_manifests(&shipped_config()).unwrap();
    let descriptors = derive_catalog(&manifests).unwrap();

    assert_eq!(descriptors.len(), tagkit_html::ELEMENTS.len());
    for (descriptor, spec) in descriptors.iter().zip(tagkit_html::ELEMENTS) {
        assert_eq!(descriptor.canonical_name, spec.name);
        assert_eq!(descriptor.raw_tag, spec.tag);
        assert_eq!(descriptor.namespace, spec.namespace);
        assert_eq!(descriptor.self_closing, spec.self_closing);
        assert_eq!(descriptor.function_name(), spec.function_name());
    }
}

#[test]
fn derivation_is_deterministic() {
    let manifests = load_manifests(&shipped_config()).unwrap();
    let first = derive_catalog(&manifests).unwrap();
    let second = derive_catalog(&manifests).unwrap();
    assert_eq!(first, second);
    assert_eq!(render_catalog(&first), render_catalog(&second));
}

#[test]
fn manifests_include_rows_that_are_filtered() {
    let manifests = load_manifests(&shipped_config()).unwrap();
    let rows: usize = manifests.iter().map(|m| m.elements.len()).sum();
    let live: usize = manifests.iter().map(|m| m.live().count()).sum();
    let derived = derive_catalog(&manifests).unwrap().len();

    assert!(live < rows, "no deprecated rows");
    assert!(derived < live, "no repeated rows");
}

#[test]
fn generate_writes_and_checks() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = shipped_config();
    config.output = dir.path().join("out").join("catalog.rs");

    assert!(matches!(generate(&config, true), Err(Error::Stale(_))));
    assert!(!config.output.exists());

    let written = generate(&config, false).unwrap();
    assert!(written.changed);
    assert_eq!(written.entries, tagkit_html::ELEMENTS.len());
    assert_eq!(std::fs::read_to_string(&config.output).unwrap(), CHECKED_IN);

    let again = generate(&config, true).unwrap();
    assert!(!again.changed);
}

#[test]
fn collisions_leave_no_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("html.toml"),
        r#"
namespace = "html"

[[elements]]
tag = "font-face"

[[elements]]
tag = "fontFace"
"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("tagkit-gen.toml"),
        r#"
output = "catalog.rs"

[[manifest]]
namespace = "html"
path = "html.toml"
"#,
    )
    .unwrap();

    let config = GenConfig::load(&dir.path().join("tagkit-gen.toml")).unwrap();
    assert!(matches!(generate(&config, false), Err(Error::Naming(_))));
    assert!(!dir.path().join("catalog.rs").exists());
}

#[test]
fn manifests_must_match_their_configured_namespace() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("m.toml"), "namespace = \"svg\"\n").unwrap();
    std::fs::write(
        dir.path().join("tagkit-gen.toml"),
        "[[manifest]]\nnamespace = \"html\"\npath = \"m.toml\"\n",
    )
    .unwrap();

    let config = GenConfig::load(&dir.path().join("tagkit-gen.toml")).unwrap();
    assert!(matches!(
        load_manifests(&config),
        Err(Error::NamespaceMismatch { .. })
    ));
}
