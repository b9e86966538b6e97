//! Custom tag substitutions on rendered HTML
//!
//! Each pass is a plain textual rewrite. Unbalanced tags are not an error: an open tag
//! without its close still becomes its opening markup and the rest is left as is.
//! Every rewrite is idempotent, so running a pass twice changes nothing.

use crate::error::RenderError;
use crate::pass::Pass;
use crate::registry::FontRegistry;
use regex::{Captures, Regex};
use std::sync::LazyLock;

const TEX_OPEN: &str = "<div class='tex-content'>\n ";

/// `<justify>`, `<left>`, `<right>` and their div replacements
const TEXT_ALIGN_TAGS: &[(&str, &str)] = &[
    ("<justify>", "<div style=\"text-align: justify\">"),
    ("<left>", "<div style=\"text-align: left\">"),
    ("<right>", "<div style=\"text-align: right\">"),
];

const TEXT_ALIGN_CLOSES: &[&str] = &["</justify>", "</left>", "</right>"];

pub const PAGE_BREAK: &str = "<div class=\"code-page-break\"><p style=\"page-break-after: always;\"> </p><p style=\"page-break-before: always;\"> </p></div>";

static CENTER_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<center>\n?").expect("center pattern is valid"));
static CENTER_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ?</center>").expect("center pattern is valid"));
static NEWPAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<newpage ?/>").expect("newpage pattern is valid"));
static ICON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<bi-([\w-]+)>").expect("icon pattern is valid"));

/// `$$$` becomes `$$ $` so a display delimiter followed by inline math stays parseable.
pub fn escape_triple_dollars(html: &str) -> String {
    html.replace("$$$", "$$ $")
}

pub fn substitute_alignment(html: &str) -> String {
    let mut out = html.replace("<tex>", TEX_OPEN).replace("</tex>", "</div>");
    out = CENTER_OPEN.replace_all(&out, "<center>\n").into_owned();
    out = CENTER_CLOSE.replace_all(&out, " </center>").into_owned();
    for (tag, div) in TEXT_ALIGN_TAGS {
        out = out.replace(tag, div);
    }
    for close in TEXT_ALIGN_CLOSES {
        out = out.replace(close, "</div>");
    }
    out
}

pub fn substitute_page_breaks(html: &str) -> String {
    NEWPAGE.replace_all(html, PAGE_BREAK).into_owned()
}

/// `<bi-NAME>` to a Bootstrap Icons `<i>` element.
pub fn substitute_icons(html: &str) -> String {
    ICON.replace_all(html, "<i class=\"bi bi-${1}\"></i>")
        .into_owned()
}

/// `<font KEY>` to the registered font class; unknown keys stay literal.
pub fn substitute_fonts(html: &str, registry: &FontRegistry) -> String {
    let opened = registry
        .open_tag_pattern()
        .replace_all(html, |caps: &Captures| match registry.css_class(&caps[1]) {
            Some(class) => format!("<div class=\"{class}\">"),
            None => caps[0].to_string(),
        });
    opened.replace("</font>", "</div>")
}

pub struct DollarEscape;

impl Pass for DollarEscape {
    fn name(&self) -> &str {
        "dollar-escape"
    }

    fn apply(&self, input: &str) -> Result<String, RenderError> {
        Ok(escape_triple_dollars(input))
    }
}

pub struct AlignmentTags;

impl Pass for AlignmentTags {
    fn name(&self) -> &str {
        "alignment-tags"
    }

    fn description(&self) -> &str {
        "Rewrites <tex>, <center>, <justify>, <left> and <right>"
    }

    fn apply(&self, input: &str) -> Result<String, RenderError> {
        Ok(substitute_alignment(input))
    }
}

pub struct PageBreaks;

impl Pass for PageBreaks {
    fn name(&self) -> &str {
        "page-breaks"
    }

    fn apply(&self, input: &str) -> Result<String, RenderError> {
        Ok(substitute_page_breaks(input))
    }
}

pub struct IconTags;

impl Pass for IconTags {
    fn name(&self) -> &str {
        "icon-tags"
    }

    fn apply(&self, input: &str) -> Result<String, RenderError> {
        Ok(substitute_icons(input))
    }
}

pub struct FontTags {
    registry: &'static FontRegistry,
}

impl FontTags {
    pub fn new(registry: &'static FontRegistry) -> Self {
        Self { registry }
    }
}

impl Default for FontTags {
    fn default() -> Self {
        Self::new(FontRegistry::global())
    }
}

impl Pass for FontTags {
    fn name(&self) -> &str {
        "font-tags"
    }

    fn description(&self) -> &str {
        "Rewrites <font KEY> for registered fonts"
    }

    fn apply(&self, input: &str) -> Result<String, RenderError> {
        Ok(substitute_fonts(input, self.registry))
    }
}
