//! Heading anchors
//!
//! Every `<h1>`..`<h6>` produced by the engine is wrapped so it can be deep linked:
//!
//! ```text
//! <div class="heading-container">
//!   <span class="heading-anchor" id="SLUG" style="position: relative; top: OFFSET; visibility: hidden;"></span>
//!   <hN><a class="heading-link" href="#SLUG">INNER</a></hN>
//! </div>
//! ```
//!
//! (emitted without the whitespace shown). Identical headings share a slug.

use crate::error::RenderError;
use crate::pass::Pass;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Characters `encodeURIComponent` leaves alone, besides ASCII alphanumerics.
pub(crate) const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub(crate) static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<h([1-6])>(.*?)</h([1-6])>").expect("heading pattern is valid")
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

const LINK_OPEN: &str = "<a class=\"heading-link\"";

/// URL-fragment-safe identifier for a heading's text.
///
/// Whitespace runs collapse to a single `-`, everything outside the unreserved set
/// is percent-encoded, and the result is lowercased.
pub fn slugify(text: &str) -> String {
    let hyphenated = text.split_whitespace().collect::<Vec<_>>().join("-");
    utf8_percent_encode(&hyphenated, URI_COMPONENT)
        .to_string()
        .to_lowercase()
}

/// Visible text of a heading's inner HTML: tags stripped, entities decoded.
pub fn heading_text(inner_html: &str) -> String {
    let stripped = TAG.replace_all(inner_html, "");
    html_escape::decode_html_entities(&stripped).trim().to_string()
}

/// Wrap each heading in an anchored container.
pub fn inject_anchors(html: &str, anchor_offset: &str) -> String {
    HEADING
        .replace_all(html, |caps: &Captures| {
            let level = &caps[1];
            let inner = &caps[2];
            if level != &caps[3] || inner.starts_with(LINK_OPEN) {
                return caps[0].to_string();
            }
            let slug = slugify(&heading_text(inner));
            format!(
                "<div class=\"heading-container\"><span class=\"heading-anchor\" id=\"{slug}\" style=\"position: relative; top: {offset}; visibility: hidden;\"></span><h{level}>{LINK_OPEN} href=\"#{slug}\">{inner}</a></h{level}></div>",
                offset = html_escape::encode_double_quoted_attribute(anchor_offset),
            )
        })
        .into_owned()
}

/// HTML pass injecting heading anchors.
pub struct HeadingAnchors {
    anchor_offset: String,
}

impl HeadingAnchors {
    pub fn new(anchor_offset: impl Into<String>) -> Self {
        Self {
            anchor_offset: anchor_offset.into(),
        }
    }
}

impl Default for HeadingAnchors {
    fn default() -> Self {
        Self::new("-5rem")
    }
}

impl Pass for HeadingAnchors {
    fn name(&self) -> &str {
        "heading-anchors"
    }

    fn description(&self) -> &str {
        "Wraps headings in deep-linkable containers"
    }

    fn apply(&self, input: &str) -> Result<String, RenderError> {
        Ok(inject_anchors(input, &self.anchor_offset))
    }
}
