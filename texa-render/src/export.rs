//! Standalone HTML export
//!
//! Wraps rendered output in a complete HTML5 document with the Texa stylesheet
//! embedded. Client-side scripts (math hydration, mermaid) are not injected; the
//! hosting page decides how to load them.

use crate::outline::{self, OutlineEntry};
use crate::registry::FontRegistry;

const BASE_CSS: &str = include_str!("../css/texa.css");

/// Default title of exported documents
pub const DEFAULT_TITLE: &str = "Texa Document";

/// Options for [`standalone_document`]
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub title: String,
    /// Embed [`stylesheet`] in a `<style>` element
    pub include_stylesheet: bool,
    /// Prepend a table of contents built from the rendered headings
    pub include_toc: bool,
    /// Extra CSS appended after the stylesheet
    pub custom_css: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            include_stylesheet: true,
            include_toc: false,
            custom_css: None,
        }
    }
}

impl ExportOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_toc(mut self) -> Self {
        self.include_toc = true;
        self
    }
}

/// The complete stylesheet: the base rules followed by one rule per registered font.
pub fn stylesheet() -> String {
    stylesheet_for(FontRegistry::global())
}

pub fn stylesheet_for(registry: &FontRegistry) -> String {
    let mut css = String::from(BASE_CSS);
    css.push_str("\n/* Registered fonts */\n");
    for font in registry.fonts() {
        css.push_str(&format!(
            ".{} {{\n  font-family: {};\n}}\n",
            font.css_class, font.family
        ));
    }
    css
}

/// Wrap `body_html` in a full document styled for the default fonts.
pub fn standalone_document(body_html: &str, options: &ExportOptions) -> String {
    standalone_document_for(body_html, options, FontRegistry::global())
}

/// Wrap `body_html` in a full document whose stylesheet covers `registry`.
pub fn standalone_document_for(
    body_html: &str,
    options: &ExportOptions,
    registry: &FontRegistry,
) -> String {
    let title = html_escape::encode_text(&options.title);

    let mut style = String::new();
    if options.include_stylesheet {
        style.push_str(&stylesheet_for(registry));
    }
    if let Some(custom) = &options.custom_css {
        style.push_str(custom);
    }
    let style = if style.is_empty() {
        String::new()
    } else {
        format!("  <style>\n{style}\n  </style>\n")
    };

    let toc = if options.include_toc {
        let entries: Vec<OutlineEntry> = outline::extract(body_html);
        outline::to_html(&entries)
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="texa">
  <title>{title}</title>
{style}</head>
<body>
<article class="texa-document">
{toc}{body_html}
</article>
</body>
</html>
"#
    )
}
