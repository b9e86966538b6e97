//! Rendering options.

use crate::environment::Environment;

/// String returned by [`Renderer::render`](crate::Renderer::render) when any pass fails.
pub const FALLBACK_MESSAGE: &str = "Failed to render preview";

/// Placeholder shown by editor previews for empty documents.
pub const PREVIEW_PLACEHOLDER: &str =
    "<p class=\"text-neutral-500 select-none\">Preview will appear here</p>";

/// Options for the document renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Execution environment; decides whether math and diagrams render in place.
    pub environment: Environment,

    /// Emit a copy-to-clipboard button before each fenced code block.
    pub copy_buttons: bool,

    /// CSS `top` offset of the hidden heading anchor, so in-page navigation
    /// lands below a fixed header.
    /// Default: "-5rem"
    pub anchor_offset: String,

    /// Text returned instead of HTML when rendering fails.
    pub fallback_message: String,

    /// Math macros expanded before rendering, as (name, expansion) pairs.
    pub math_macros: Vec<(String, String)>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            environment: Environment::Server,
            copy_buttons: true,
            anchor_offset: "-5rem".to_string(),
            fallback_message: FALLBACK_MESSAGE.to_string(),
            math_macros: vec![(r"\RR".to_string(), r"\mathbb{R}".to_string())],
        }
    }
}

impl RenderOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Disables the copy buttons in front of code blocks.
    pub fn without_copy_buttons(mut self) -> Self {
        self.copy_buttons = false;
        self
    }

    pub fn with_anchor_offset(mut self, offset: impl Into<String>) -> Self {
        self.anchor_offset = offset.into();
        self
    }

    /// Registers an extra math macro, replacing any macro with the same name.
    pub fn with_macro(mut self, name: impl Into<String>, expansion: impl Into<String>) -> Self {
        let name = name.into();
        self.math_macros.retain(|(existing, _)| *existing != name);
        self.math_macros.push((name, expansion.into()));
        self
    }
}
