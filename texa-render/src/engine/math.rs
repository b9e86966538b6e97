//! LaTeX math to MathML
//!
//! Used by the client environment only. Parse errors become an inline error marker
//! carrying the source and the message; they never abort the render.

use pulldown_latex::{
    config::DisplayMode, config::RenderConfig, mathml::push_mathml, Parser, Storage,
};

/// Block or inline placement of a formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathMode {
    Display,
    Inline,
}

impl MathMode {
    fn class(self) -> &'static str {
        match self {
            MathMode::Display => "math-display",
            MathMode::Inline => "math-inline",
        }
    }

    fn display_mode(self) -> DisplayMode {
        match self {
            MathMode::Display => DisplayMode::Block,
            MathMode::Inline => DisplayMode::Inline,
        }
    }
}

/// Outcome of rendering one formula
#[derive(Debug, Clone, PartialEq)]
pub enum MathOutput {
    Rendered(String),
    /// Error marker markup plus the parser message
    Failed { html: String, message: String },
}

impl MathOutput {
    pub fn html(&self) -> &str {
        match self {
            MathOutput::Rendered(html) => html,
            MathOutput::Failed { html, .. } => html,
        }
    }

    pub fn into_html(self) -> String {
        match self {
            MathOutput::Rendered(html) => html,
            MathOutput::Failed { html, .. } => html,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, MathOutput::Failed { .. })
    }
}

/// Renders formulas after expanding user macros.
#[derive(Debug, Clone, Default)]
pub struct MathRenderer {
    /// Sorted longest name first, so `\RRR` wins over `\RR`
    macros: Vec<(String, String)>,
}

impl MathRenderer {
    pub fn new(macros: &[(String, String)]) -> Self {
        let mut macros: Vec<_> = macros
            .iter()
            .filter(|(name, _)| name.starts_with('\\') && name.len() > 1)
            .cloned()
            .collect();
        macros.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        Self { macros }
    }

    /// Replace every macro invocation. A name only matches when it is not followed by
    /// another letter, as TeX control words end at the first non-letter.
    pub fn expand_macros(&self, latex: &str) -> String {
        if self.macros.is_empty() || !latex.contains('\\') {
            return latex.to_string();
        }

        let mut out = String::with_capacity(latex.len());
        let mut rest = latex;
        'scan: while let Some(pos) = rest.find('\\') {
            out.push_str(&rest[..pos]);
            rest = &rest[pos..];
            for (name, expansion) in &self.macros {
                if let Some(after) = rest.strip_prefix(name.as_str()) {
                    if !after.starts_with(|c: char| c.is_ascii_alphabetic()) {
                        out.push_str(expansion);
                        rest = after;
                        continue 'scan;
                    }
                }
            }
            // Not a macro: copy the backslash and the following char verbatim
            let mut chars = rest.chars();
            out.push('\\');
            chars.next();
            if let Some(next) = chars.next() {
                out.push(next);
            }
            rest = chars.as_str();
        }
        out.push_str(rest);
        out
    }

    pub fn render(&self, latex: &str, mode: MathMode) -> MathOutput {
        let latex = self.expand_macros(latex.trim());
        match to_mathml(&latex, mode) {
            Ok(mathml) => {
                let html = match mode {
                    MathMode::Display => {
                        format!("<div class=\"math {}\">{mathml}</div>", mode.class())
                    }
                    MathMode::Inline => {
                        format!("<span class=\"math {}\">{mathml}</span>", mode.class())
                    }
                };
                MathOutput::Rendered(html)
            }
            Err(message) => {
                log::warn!("math error in '{latex}': {message}");
                MathOutput::Failed {
                    html: error_marker(&latex, &message, mode),
                    message,
                }
            }
        }
    }
}

fn to_mathml(latex: &str, mode: MathMode) -> Result<String, String> {
    let storage = Storage::new();
    let parser = Parser::new(latex, &storage);
    let config = RenderConfig {
        display_mode: mode.display_mode(),
        ..Default::default()
    };

    let events: Vec<_> = parser.collect();
    let errors: Vec<String> = events
        .iter()
        .filter_map(|event| event.as_ref().err().map(|err| err.to_string()))
        .collect();
    if !errors.is_empty() {
        return Err(errors.join("; "));
    }

    let mut mathml = String::new();
    push_mathml(&mut mathml, events.into_iter(), config).map_err(|err| err.to_string())?;
    Ok(mathml)
}

fn error_marker(latex: &str, message: &str, mode: MathMode) -> String {
    format!(
        "<span class=\"math math-error {}\" title=\"{}\"><code>{}</code></span>",
        mode.class(),
        html_escape::encode_double_quoted_attribute(message),
        html_escape::encode_text(latex)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_renderer() -> MathRenderer {
        MathRenderer::new(&[(r"\RR".to_string(), r"\mathbb{R}".to_string())])
    }

    #[test]
    fn inline_math_renders_to_mathml() {
        let out = default_renderer().render("x^2", MathMode::Inline);
        assert!(!out.is_error());
        assert!(out.html().starts_with("<span class=\"math math-inline\">"));
        assert!(out.html().contains("<math"));
    }

    #[test]
    fn display_math_is_wrapped_in_div() {
        let out = default_renderer().render(r"\frac{a}{b}", MathMode::Display);
        assert!(out.html().starts_with("<div class=\"math math-display\">"));
        assert!(out.html().contains("<mfrac"));
    }

    #[test]
    fn invalid_latex_yields_error_marker() {
        let out = default_renderer().render(r"\frac{a", MathMode::Inline);
        assert!(out.is_error());
        assert!(out.html().contains("math-error"));
        assert!(out.html().contains(r"<code>\frac{a</code>"));
    }

    #[test]
    fn macros_expand_only_on_whole_control_words() {
        let renderer = default_renderer();
        assert_eq!(renderer.expand_macros(r"x \in \RR"), r"x \in \mathbb{R}");
        assert_eq!(renderer.expand_macros(r"\RR^n"), r"\mathbb{R}^n");
        assert_eq!(renderer.expand_macros(r"\RRx"), r"\RRx");
        assert_eq!(renderer.expand_macros(r"a \\ b"), r"a \\ b");
    }

    #[test]
    fn longer_macro_names_win() {
        let renderer = MathRenderer::new(&[
            (r"\R".to_string(), "r".to_string()),
            (r"\RR".to_string(), "rr".to_string()),
        ]);
        assert_eq!(renderer.expand_macros(r"\RR \R"), "rr r");
    }

    #[test]
    fn names_without_backslash_are_ignored() {
        let renderer = MathRenderer::new(&[("RR".to_string(), "x".to_string())]);
        assert_eq!(renderer.expand_macros("RR"), "RR");
    }
}
