// src/core/html.rs
use scraper::{ElementRef, Html, Node, Selector};

use super::sanitize::{collapse_lines, normalize_ws};

/// Subtrees that never carry readable text.
const SKIP_TAGS: &[&str] = &[
    "head", "script", "style", "noscript", "template", "svg", "iframe", "canvas",
];

/// Elements that start a new line in the extracted text.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4",
    "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section",
    "table", "td", "th", "tr", "ul",
];

/// ASCII-only lower-casing; everything else passes through untouched.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Readable text of an HTML document, one block per line.
///
/// Links are kept as `[text](href)` and images as `![alt](src)`, so their
/// targets take part in keyword matching downstream.
pub fn extract_text(html: &str) -> String {
    let doc = Html::parse_document(html);

    let body = Selector::parse("body")
        .ok()
        .and_then(|sel| doc.select(&sel).next());
    let root = body.unwrap_or_else(|| doc.root_element());

    let mut out = String::with_capacity(html.len() / 2);
    walk(root, &mut out);
    collapse_lines(&out)
}

fn walk(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            // Source line breaks are layout, not structure; blocks decide lines.
            Node::Text(t) => out.extend(t.chars().map(|c| if c.is_whitespace() { ' ' } else { c })),
            Node::Element(e) => {
                let name = e.name();
                if SKIP_TAGS.contains(&name) {
                    continue;
                }
                let Some(child_el) = ElementRef::wrap(child) else { continue };

                match name {
                    "a" => push_link(child_el, e.attr("href"), out),
                    "img" => {
                        if let Some(src) = e.attr("src").filter(|s| !s.trim().is_empty()) {
                            let alt = normalize_ws(e.attr("alt").unwrap_or(""));
                            out.push_str(&format!("![{alt}]({})", src.trim()));
                        }
                    }
                    _ if BLOCK_TAGS.contains(&name) => {
                        out.push('\n');
                        walk(child_el, out);
                        out.push('\n');
                    }
                    _ => walk(child_el, out),
                }
            }
            _ => {}
        }
    }
}

fn push_link(a: ElementRef<'_>, href: Option<&str>, out: &mut String) {
    let mut inner = String::new();
    walk(a, &mut inner);
    let text = normalize_ws(&inner);

    match href.map(str::trim).filter(|h| !h.is_empty()) {
        Some(href) => out.push_str(&format!("[{text}]({href})")),
        None => out.push_str(&text),
    }
}
