//! Document renderer
//!
//! Owns the configured pipeline: source passes, the Markdown engine and HTML passes.
//! [`Renderer::render`] is the single guard of the pipeline. Any error or panic below
//! it is logged and replaced with the fallback message, never partial output.

use crate::engine::MarkdownEngine;
use crate::environment::Environment;
use crate::error::RenderError;
use crate::export::{standalone_document_for, ExportOptions};
use crate::options::{RenderOptions, PREVIEW_PLACEHOLDER};
use crate::outline::{self, OutlineEntry};
use crate::pass::{run_passes, Pass};
use crate::registry::FontRegistry;
use crate::{postprocess, preprocess};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Markdown plus custom tags to HTML
///
/// Immutable after construction; share one instance across threads freely.
///
/// # Examples
///
/// ```ignore
/// let renderer = Renderer::for_environment(Environment::Client);
/// let html = renderer.render(Some("# Title\n<center>hi</center>"));
/// ```
pub struct Renderer {
    options: RenderOptions,
    source_passes: Vec<Box<dyn Pass>>,
    engine: MarkdownEngine,
    html_passes: Vec<Box<dyn Pass>>,
    registry: &'static FontRegistry,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self::with_registry(options, FontRegistry::global())
    }

    /// Build a renderer whose `<font>` tags resolve against `registry`.
    pub fn with_registry(options: RenderOptions, registry: &'static FontRegistry) -> Self {
        Self {
            source_passes: preprocess::default_passes(),
            engine: MarkdownEngine::new(&options),
            html_passes: postprocess::default_passes(&options, registry),
            registry,
            options,
        }
    }

    pub fn for_environment(environment: Environment) -> Self {
        Self::new(RenderOptions::new().with_environment(environment))
    }

    pub fn environment(&self) -> Environment {
        self.options.environment
    }

    /// Render a document. Never fails.
    ///
    /// Missing or empty input renders to an empty string; any failure returns the
    /// configured fallback message.
    pub fn render(&self, source: Option<&str>) -> String {
        let source = match source {
            Some(source) if !source.is_empty() => source,
            _ => return String::new(),
        };

        let result = panic::catch_unwind(AssertUnwindSafe(|| self.try_render(source)))
            .unwrap_or_else(|payload| Err(RenderError::Panicked(panic_message(&*payload))));

        match result {
            Ok(html) => html,
            Err(err) => {
                log::error!("{err}");
                self.options.fallback_message.clone()
            }
        }
    }

    /// Like [`render`](Self::render), but empty input yields the preview placeholder.
    pub fn render_preview(&self, source: Option<&str>) -> String {
        match source {
            Some(source) if !source.is_empty() => self.render(Some(source)),
            _ => PREVIEW_PLACEHOLDER.to_string(),
        }
    }

    /// The unguarded pipeline.
    pub fn try_render(&self, source: &str) -> Result<String, RenderError> {
        let markdown = self.preprocess(source)?;
        let html = self.engine.render(&markdown)?;
        run_passes(&self.html_passes, &html)
    }

    /// Source passes only: the Markdown handed to the engine.
    pub fn preprocess(&self, source: &str) -> Result<String, RenderError> {
        run_passes(&self.source_passes, source)
    }

    /// Headings of the rendered document.
    pub fn outline(&self, source: &str) -> Result<Vec<OutlineEntry>, RenderError> {
        Ok(outline::extract(&self.try_render(source)?))
    }

    /// Render into a standalone HTML document.
    pub fn render_document(
        &self,
        source: &str,
        export: &ExportOptions,
    ) -> Result<String, RenderError> {
        let body = self.try_render(source)?;
        Ok(standalone_document_for(&body, export, self.registry))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
