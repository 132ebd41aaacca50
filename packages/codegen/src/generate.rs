//! Writes `elements/catalog.rs` for `tagkit-html`.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use tagkit_naming::{Deriver, ElementDescriptor};

use crate::{Error, GenConfig, Manifest, Result};

const HEADER: &str = "// @generated by `tagkit-gen generate`. Do not edit by hand.";

/// Load every configured manifest, checking each one holds the namespace it is configured as.
pub fn load_manifests(config: &GenConfig) -> Result<Vec<Manifest>> {
    config
        .manifests
        .iter()
        .map(|entry| {
            let manifest = Manifest::load(&entry.path)?;
            if manifest.namespace != entry.namespace {
                return Err(Error::NamespaceMismatch {
                    path: entry.path.clone(),
                    expected: entry.namespace,
                    found: manifest.namespace,
                });
            }
            tracing::debug!(
                path = %entry.path.display(),
                entries = manifest.elements.len(),
                "loaded manifest"
            );
            Ok(manifest)
        })
        .collect()
}

/// Derive descriptors for every manifest in one run, so names are unique across all of them.
pub fn derive_catalog(manifests: &[Manifest]) -> Result<Vec<ElementDescriptor>> {
    let mut deriver = Deriver::new();
    let mut out = Vec::new();

    for manifest in manifests {
        let derived = deriver.derive_all(manifest.namespace, &manifest.elements)?;
        tracing::info!(
            namespace = %manifest.namespace,
            entries = derived.len(),
            skipped = manifest.elements.len() - derived.len(),
            "derived names"
        );
        out.extend(derived);
    }

    Ok(out)
}

/// Render the catalog source for a list of descriptors.
pub fn render_catalog(descriptors: &[ElementDescriptor]) -> String {
    let entries: Vec<String> = descriptors.iter().map(render_entry).collect();

    let mut out = String::with_capacity(entries.iter().map(String::len).sum::<usize>() + 128);
    out.push_str(HEADER);
    out.push_str("\n\nelements! {\n");
    out.push_str(&entries.join("\n\n"));
    out.push_str("\n}\n");
    out
}

fn render_entry(descriptor: &ElementDescriptor) -> String {
    let mut out = String::new();

    // writing into a String cannot fail
    let _ = writeln!(
        out,
        "    /// {}",
        doc_text(&descriptor.description, &descriptor.raw_tag)
    );
    if !descriptor.source_link.is_empty() {
        let _ = writeln!(out, "    ///");
        let _ = writeln!(out, "    /// [MDN reference]({})", descriptor.source_link);
    }

    let namespace = match descriptor.namespace {
        tagkit_naming::Namespace::Html => "Html",
        tagkit_naming::Namespace::Svg => "Svg",
    };
    let _ = write!(
        out,
        "    {} => {}, {:?}, {}, {};",
        descriptor.function_name(),
        descriptor.canonical_name,
        descriptor.raw_tag,
        namespace,
        descriptor.self_closing
    );

    out
}

/// One line of doc text. Tag mentions like `<base>` are wrapped in backticks so rustdoc does
/// not read them as HTML.
fn doc_text(description: &str, tag: &str) -> String {
    let collapsed = description.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return format!("The `<{tag}>` element.");
    }

    let mut out = String::with_capacity(collapsed.len() + 16);
    let mut rest = collapsed.as_str();

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let candidate = &rest[open..];

        match candidate[1..].find('>') {
            Some(close) if is_tag_name(&candidate[1..=close]) => {
                out.push('`');
                out.push_str(&candidate[..close + 2]);
                out.push('`');
                rest = &candidate[close + 2..];
            }
            _ => {
                out.push('<');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn is_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// What a generation run produced.
#[derive(Debug)]
pub struct Generated {
    pub output: PathBuf,
    pub entries: usize,
    pub changed: bool,
}

/// Run a whole generation: load, derive, render, and write the output file.
///
/// Nothing is written unless every name derives cleanly. With `check` set, the file is only
/// compared against what would be written.
pub fn generate(config: &GenConfig, check: bool) -> Result<Generated> {
    let manifests = load_manifests(config)?;
    let descriptors = derive_catalog(&manifests)?;
    let source = render_catalog(&descriptors);

    let current = std::fs::read_to_string(&config.output).ok();
    let changed = current.as_deref() != Some(source.as_str());

    if check {
        if changed {
            return Err(Error::Stale(config.output.clone()));
        }
    } else if changed {
        write_atomically(&config.output, &source)?;
        tracing::info!(path = %config.output.display(), "wrote catalog");
    } else {
        tracing::info!(path = %config.output.display(), "catalog is up to date");
    }

    Ok(Generated {
        output: config.output.clone(),
        entries: descriptors.len(),
        changed,
    })
}

fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("rs.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tagkit_naming::{Namespace, SourceEntry};

    #[test]
    fn doc_text_quotes_tags() {
        assert_eq!(
            doc_text("Used with <area> elements, not <3 or a < b.", "map"),
            "Used with `<area>` elements, not <3 or a < b."
        );
        assert_eq!(doc_text("  spaced\n  out ", "x"), "spaced out");
        assert_eq!(doc_text("", "slot"), "The `<slot>` element.");
        assert_eq!(doc_text("<<a>", "x"), "<`<a>`");
    }

    #[test]
    fn renders_entries() {
        let mut html = Manifest::new(Namespace::Html);
        html.elements = vec![
            SourceEntry::new("dl")
                .with_description("A description list.")
                .with_link("https://developer.mozilla.org/en-US/docs/Web/HTML/Element/dl"),
            SourceEntry::new("br"),
        ];
        let mut svg = Manifest::new(Namespace::Svg);
        svg.elements = vec![SourceEntry::new("feFuncA")];

        let descriptors = derive_catalog(&[html, svg]).unwrap();
        assert_eq!(
            render_catalog(&descriptors),
            r#"// @generated by `tagkit-gen generate`. Do not edit by hand.

elements! {
    /// A description list.
    ///
    /// [MDN reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/dl)
    description_list => DescriptionList, "dl", Html, false;

    /// The `<br>` element.
    line_break => LineBreak, "br", Html, true;

    /// The `<feFuncA>` element.
    svg_fe_func_a => SvgFeFuncA, "feFuncA", Svg, false;
}
"#
        );
    }

    #[test]
    fn collisions_abort_the_run() {
        let mut manifest = Manifest::new(Namespace::Html);
        manifest.elements = vec![SourceEntry::new("font-face"), SourceEntry::new("fontFace")];
        assert!(matches!(
            derive_catalog(&[manifest]),
            Err(Error::Naming(_))
        ));
    }
}
