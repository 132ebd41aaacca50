//! Element lists from saved MDN reference pages.
//!
//! Rows come from tables (`tr`, first cell links the element, second cell describes it) and
//! from description lists (`dt` links, the following `dd` describes). A row is deprecated when
//! it sits under an obsolete/deprecated `h2` section, carries a deprecation icon, or links into
//! the MDN trash.

use html_parser::{Dom, Element, Node};
use tagkit_naming::{Namespace, SourceEntry};

use crate::{Manifest, Result};

const MDN_ORIGIN: &str = "https://developer.mozilla.org";

const DEPRECATION_ICONS: &[&str] = &["icon-deprecated", "icon-obsolete"];

/// Scrape every element entry from a reference page for `namespace`.
pub fn scrape(page: &str, namespace: Namespace) -> Result<Manifest> {
    let dom = Dom::parse(page)?;

    let mut scraper = Scraper {
        namespace,
        section_deprecated: false,
        entries: Vec::new(),
    };
    scraper.visit_all(&dom.children);

    let deprecated = scraper.entries.iter().filter(|e| e.deprecated).count();
    tracing::info!(
        %namespace,
        entries = scraper.entries.len(),
        deprecated,
        "scraped element reference"
    );

    let mut manifest = Manifest::new(namespace);
    manifest.elements = scraper.entries;
    Ok(manifest)
}

struct Scraper {
    namespace: Namespace,
    section_deprecated: bool,
    entries: Vec<SourceEntry>,
}

impl Scraper {
    fn visit_all(&mut self, nodes: &[Node]) {
        let elements: Vec<&Element> = child_elements(nodes).collect();

        for (idx, el) in elements.iter().enumerate() {
            match el.name.to_ascii_lowercase().as_str() {
                "h2" => {
                    let id = el.id.as_deref().unwrap_or_default().to_ascii_lowercase();
                    self.section_deprecated = id.contains("obsolete") || id.contains("deprecated");
                    tracing::trace!(%id, deprecated = self.section_deprecated, "entering section");
                }
                "tr" => self.visit_row(el),
                "dt" => {
                    let details = elements
                        .get(idx + 1)
                        .filter(|next| next.name.eq_ignore_ascii_case("dd"))
                        .copied();
                    self.visit_term(el, details);
                }
                "dd" => {}
                _ => self.visit_all(&el.children),
            }
        }
    }

    fn visit_row(&mut self, row: &Element) {
        let cells: Vec<&Element> = child_elements(&row.children)
            .filter(|cell| {
                cell.name.eq_ignore_ascii_case("td") || cell.name.eq_ignore_ascii_case("th")
            })
            .collect();

        let Some((first, rest)) = cells.split_first() else {
            return;
        };

        let description = rest.first().map(|cell| text_of(cell)).unwrap_or_default();
        self.collect(first, &description, has_deprecation_icon(row));
    }

    fn visit_term(&mut self, term: &Element, details: Option<&Element>) {
        let marked = has_deprecation_icon(term) || details.is_some_and(has_deprecation_icon);
        let description = details.map(text_of).unwrap_or_default();
        self.collect(term, &description, marked);
    }

    fn collect(&mut self, cell: &Element, description: &str, marked: bool) {
        let mut anchors = Vec::new();
        find_all(cell, "a", &mut anchors);

        for anchor in anchors {
            let Some(Some(href)) = anchor.attributes.get("href") else {
                continue;
            };

            let trashed = href.contains("/Trash/");
            if !trashed && !self.is_element_link(href) {
                continue;
            }

            for tag in anchor_tags(anchor) {
                self.entries.push(SourceEntry {
                    tag,
                    description: description.to_string(),
                    link: absolute_link(href),
                    deprecated: marked || trashed || self.section_deprecated,
                });
            }
        }
    }

    fn is_element_link(&self, href: &str) -> bool {
        let collection = match self.namespace {
            Namespace::Html => "/HTML/",
            Namespace::Svg => "/SVG/",
        };
        href.contains(collection) && (href.contains("/Element/") || href.contains("/Elements/"))
    }
}

fn child_elements(nodes: &[Node]) -> impl Iterator<Item = &Element> {
    nodes.iter().filter_map(|node| match node {
        Node::Element(el) => Some(el),
        _ => None,
    })
}

fn find_all<'a>(el: &'a Element, name: &str, out: &mut Vec<&'a Element>) {
    for child in child_elements(&el.children) {
        if child.name.eq_ignore_ascii_case(name) {
            out.push(child);
        } else {
            find_all(child, name, out);
        }
    }
}

fn has_deprecation_icon(el: &Element) -> bool {
    let marked = el
        .classes
        .iter()
        .any(|class| DEPRECATION_ICONS.contains(&class.as_str()));
    marked || child_elements(&el.children).any(has_deprecation_icon)
}

/// The tags named by the `<code>` labels inside an anchor.
fn anchor_tags(anchor: &Element) -> Vec<String> {
    let mut codes = Vec::new();
    find_all(anchor, "code", &mut codes);

    codes
        .into_iter()
        .flat_map(|code| expand_label(&text_of(code)))
        .collect()
}

/// Turn a label like `<font-face>` into its tag. A heading range such as `<h1>–<h6>`
/// expands to every level in between.
fn expand_label(label: &str) -> Vec<String> {
    let label = label.replace(['<', '>'], "");
    let label = label.trim();

    if let Some((from, to)) = label.split_once(['–', '—', '-']) {
        if let (Some(from), Some(to)) = (heading_level(from), heading_level(to)) {
            return (from..=to).map(|level| format!("h{level}")).collect();
        }
    }

    let valid = label.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');

    match valid {
        true => vec![label.to_string()],
        false => {
            tracing::debug!(label, "skipping label that is not a tag");
            Vec::new()
        }
    }
}

fn heading_level(tag: &str) -> Option<u8> {
    let level: u8 = tag.trim().strip_prefix(['h', 'H'])?.parse().ok()?;
    (1..=6).contains(&level).then_some(level)
}

fn absolute_link(href: &str) -> String {
    match href.starts_with('/') {
        true => format!("{MDN_ORIGIN}{href}"),
        false => href.to_string(),
    }
}

/// All text below an element with entities decoded and whitespace collapsed.
fn text_of(el: &Element) -> String {
    let mut raw = String::new();
    push_text(&el.children, &mut raw);
    decode_entities(&raw.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn push_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => push_text(&el.children, out),
            Node::Comment(_) => {}
        }
    }
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
        .replace("&ndash;", "–")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn labels() {
        assert_eq!(expand_label("<a>"), ["a"]);
        assert_eq!(expand_label("<font-face-src>"), ["font-face-src"]);
        assert_eq!(expand_label("<feFuncA>"), ["feFuncA"]);
        assert_eq!(expand_label("<h1>–<h6>"), ["h1", "h2", "h3", "h4", "h5", "h6"]);
        assert_eq!(expand_label("h2-h3"), ["h2", "h3"]);
        assert!(expand_label("<h1>–<h9>").is_empty());
        assert!(expand_label("not a tag").is_empty());
        assert!(expand_label("").is_empty());
    }

    #[test]
    fn links_become_absolute() {
        assert_eq!(
            absolute_link("/en-US/docs/Web/HTML/Element/a"),
            "https://developer.mozilla.org/en-US/docs/Web/HTML/Element/a"
        );
        assert_eq!(absolute_link("https://example.com/x"), "https://example.com/x");
    }
}
