//! Fenced code highlighting
//!
//! Plugged into comrak as its code fence adapter. Resolution order for a block:
//! the declared language, then first-line detection, then plain escaped text.
//! Highlighting failures never leave this module.

use crate::error::RenderError;
use comrak::adapters::SyntaxHighlighterAdapter;
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::LazyLock;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Prefix of every CSS class emitted by the highlighter.
pub const CLASS_PREFIX: &str = "hl-";

/// Fence languages consumed by the math and diagram backends, never highlighted.
pub const DEFERRED_LANGUAGES: &[&str] = &["math", "mermaid"];

const COPY_BUTTON: &str = "<button class=\"copy-code-button\" type=\"button\" aria-label=\"Copy code\" data-copy-code=\"\"><i class=\"bi bi-clipboard\"></i></button>";

/// comrak adapter producing class-based syntect markup.
#[derive(Debug, Clone)]
pub struct CodeHighlighter {
    copy_buttons: bool,
}

impl CodeHighlighter {
    pub fn new(copy_buttons: bool) -> Self {
        Self { copy_buttons }
    }

    /// Highlight `code`, falling back to escaped text. Never fails.
    pub fn highlight(&self, lang: Option<&str>, code: &str) -> String {
        let lang = lang.map(str::trim).filter(|lang| !lang.is_empty());
        if lang.is_some_and(is_deferred_language) {
            return escape_code(code);
        }

        if let Some(syntax) = lang.and_then(|lang| SYNTAXES.find_syntax_by_token(lang)) {
            match highlight_with(syntax, code) {
                Ok(html) => return html,
                Err(err) => log::debug!("declared language '{}' failed: {err}", syntax.name),
            }
        }

        if let Some(syntax) = SYNTAXES.find_syntax_by_first_line(code) {
            match highlight_with(syntax, code) {
                Ok(html) => return html,
                Err(err) => log::debug!("detected language '{}' failed: {err}", syntax.name),
            }
        }

        escape_code(code)
    }
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::new(true)
    }
}

pub fn is_deferred_language(lang: &str) -> bool {
    DEFERRED_LANGUAGES.contains(&lang)
}

fn highlight_with(syntax: &SyntaxReference, code: &str) -> Result<String, RenderError> {
    let mut generator = ClassedHTMLGenerator::new_with_class_style(
        syntax,
        &SYNTAXES,
        ClassStyle::SpacedPrefixed {
            prefix: CLASS_PREFIX,
        },
    );
    for line in LinesWithEndings::from(code) {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .map_err(|err| RenderError::Highlight(err.to_string()))?;
    }
    Ok(generator.finalize())
}

fn escape_code(code: &str) -> String {
    html_escape::encode_text(code).into_owned()
}

/// Attributes are written sorted so output does not depend on map iteration order.
fn write_opening_tag(
    output: &mut dyn Write,
    tag: &str,
    attributes: &HashMap<String, String>,
) -> io::Result<()> {
    let mut sorted: Vec<_> = attributes.iter().collect();
    sorted.sort();

    write!(output, "<{tag}")?;
    for (name, value) in sorted {
        write!(
            output,
            " {name}=\"{}\"",
            html_escape::encode_double_quoted_attribute(value)
        )?;
    }
    output.write_all(b">")
}

impl SyntaxHighlighterAdapter for CodeHighlighter {
    fn write_highlighted(
        &self,
        output: &mut dyn Write,
        lang: Option<&str>,
        code: &str,
    ) -> io::Result<()> {
        output.write_all(self.highlight(lang, code).as_bytes())
    }

    fn write_pre_tag(
        &self,
        output: &mut dyn Write,
        attributes: HashMap<String, String>,
    ) -> io::Result<()> {
        if self.copy_buttons {
            output.write_all(COPY_BUTTON.as_bytes())?;
        }
        write_opening_tag(output, "pre", &attributes)
    }

    fn write_code_tag(
        &self,
        output: &mut dyn Write,
        attributes: HashMap<String, String>,
    ) -> io::Result<()> {
        write_opening_tag(output, "code", &attributes)
    }
}
