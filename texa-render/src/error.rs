//! Error types for rendering operations

use std::fmt;

/// Errors that can occur while rendering a document
///
/// None of these reach the editor preview: [`Renderer::render`](crate::Renderer::render)
/// logs them and returns the fallback message instead.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The Markdown engine failed to produce HTML
    Engine(String),
    /// A source or HTML pass failed
    Pass { pass: String, message: String },
    /// Syntax highlighting of a fenced block failed
    Highlight(String),
    /// A pass panicked; only produced by the top-level guard
    Panicked(String),
}

impl RenderError {
    pub fn pass(pass: impl Into<String>, message: impl Into<String>) -> Self {
        RenderError::Pass {
            pass: pass.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Engine(msg) => write!(f, "Markdown engine error: {msg}"),
            RenderError::Pass { pass, message } => write!(f, "Pass '{pass}' failed: {message}"),
            RenderError::Highlight(msg) => write!(f, "Highlighting error: {msg}"),
            RenderError::Panicked(msg) => write!(f, "Renderer panicked: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Engine(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for RenderError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        RenderError::Engine(format!("engine produced invalid UTF-8: {err}"))
    }
}
