//! Document outline
//!
//! Reads the anchored headings back out of rendered HTML, so every entry's slug is
//! exactly the `id` the page carries.

use crate::postprocess::anchors::{heading_text, slugify, HEADING};
use serde::Serialize;

/// One heading of a rendered document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    pub level: u8,
    pub text: String,
    pub slug: String,
}

/// Headings of `html` in document order.
///
/// Works on anchored and plain output alike; the anchor link is markup and is
/// stripped with the rest.
pub fn extract(html: &str) -> Vec<OutlineEntry> {
    HEADING
        .captures_iter(html)
        .filter(|caps| caps[1] == caps[3])
        .filter_map(|caps| {
            let level = caps[1].parse().ok()?;
            let text = heading_text(&caps[2]);
            let slug = slugify(&text);
            Some(OutlineEntry { level, text, slug })
        })
        .collect()
}

/// Nested `<nav class="toc">` list linking every entry.
pub fn to_html(entries: &[OutlineEntry]) -> String {
    let mut toc = String::from("<nav class=\"toc\">\n");
    // Heading level of each open list, outermost first. The last `<li>` stays open
    // so a deeper heading can nest its list inside it.
    let mut open: Vec<u8> = Vec::new();
    for entry in entries {
        match open.last().copied() {
            None => {
                toc.push_str("<ul>\n");
                open.push(entry.level);
            }
            Some(current) if entry.level > current => {
                toc.push_str("\n<ul>\n");
                open.push(entry.level);
            }
            Some(_) => {
                toc.push_str("</li>\n");
                while open.len() > 1 && open[open.len() - 2] >= entry.level {
                    open.pop();
                    toc.push_str("</ul>\n</li>\n");
                }
                if let Some(last) = open.last_mut() {
                    *last = entry.level;
                }
            }
        }
        toc.push_str(&format!(
            "<li><a href=\"#{}\">{}</a>",
            entry.slug,
            html_escape::encode_text(&entry.text)
        ));
    }
    if !open.is_empty() {
        toc.push_str("</li>\n");
        for _ in 1..open.len() {
            toc.push_str("</ul>\n</li>\n");
        }
        toc.push_str("</ul>\n");
    }
    toc.push_str("</nav>\n");
    toc
}
