//! HTML passes
//!
//! Run on the engine output, in order: heading anchors, `$$$` escaping, alignment
//! tags, page breaks, icons, fonts. Table tags are not here; they are converted on
//! the source before Markdown parsing (see [`crate::preprocess::table`]).

pub mod anchors;
pub mod tags;

pub use anchors::{heading_text, inject_anchors, slugify, HeadingAnchors};
pub use tags::{AlignmentTags, DollarEscape, FontTags, IconTags, PageBreaks, PAGE_BREAK};

use crate::options::RenderOptions;
use crate::pass::Pass;
use crate::registry::FontRegistry;

/// The HTML passes in pipeline order.
pub fn default_passes(options: &RenderOptions, registry: &'static FontRegistry) -> Vec<Box<dyn Pass>> {
    vec![
        Box::new(HeadingAnchors::new(options.anchor_offset.clone())),
        Box::new(DollarEscape),
        Box::new(AlignmentTags),
        Box::new(PageBreaks),
        Box::new(IconTags),
        Box::new(FontTags::new(registry)),
    ]
}

/// Apply every tag substitution except heading anchors.
pub fn substitute_tags(html: &str, registry: &FontRegistry) -> String {
    let html = tags::escape_triple_dollars(html);
    let html = tags::substitute_alignment(&html);
    let html = tags::substitute_page_breaks(&html);
    let html = tags::substitute_icons(&html);
    tags::substitute_fonts(&html, registry)
}
