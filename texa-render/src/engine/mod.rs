//! Markdown engine
//!
//! Wraps comrak with the fixed Texa configuration: raw HTML passes through, single
//! newlines are hard breaks, GFM tables and strikethrough are on. Fenced code goes
//! through [`CodeHighlighter`].
//!
//! In the client environment the parsed tree is rewritten before serialization:
//! `math` fences and dollar math become MathML, `mermaid` fences become diagram
//! containers. The server environment leaves them as code blocks for hydration.

pub mod diagram;
pub mod highlight;
pub mod math;

pub use diagram::diagram_container;
pub use highlight::CodeHighlighter;
pub use math::{MathMode, MathOutput, MathRenderer};

use crate::environment::MathDiagramRendering;
use crate::error::RenderError;
use crate::options::RenderOptions;
use comrak::nodes::{AstNode, NodeHtmlBlock, NodeValue};
use comrak::{format_html_with_plugins, parse_document, Arena, ComrakOptions, ComrakPlugins};

/// Markdown to HTML, configured once per renderer
#[derive(Debug, Clone)]
pub struct MarkdownEngine {
    rendering: MathDiagramRendering,
    highlighter: CodeHighlighter,
    math: MathRenderer,
}

impl MarkdownEngine {
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            rendering: options.environment.math_diagram_rendering(),
            highlighter: CodeHighlighter::new(options.copy_buttons),
            math: MathRenderer::new(&options.math_macros),
        }
    }

    pub fn render(&self, source: &str) -> Result<String, RenderError> {
        let arena = Arena::new();
        let options = self.comrak_options();
        let root = parse_document(&arena, source, &options);

        if self.rendering.is_enabled() {
            self.render_math_and_diagrams(root);
        }

        let mut plugins = ComrakPlugins::default();
        plugins.render.codefence_syntax_highlighter = Some(&self.highlighter);

        let mut html = Vec::new();
        format_html_with_plugins(root, &options, &mut html, &plugins)?;
        Ok(String::from_utf8(html)?)
    }

    fn comrak_options(&self) -> ComrakOptions<'static> {
        let mut options = ComrakOptions::default();
        options.extension.table = true;
        options.extension.strikethrough = true;
        options.extension.math_dollars = self.rendering.is_enabled();
        options.render.unsafe_ = true;
        options.render.hardbreaks = true;
        options
    }

    /// Replace math and diagram nodes with their rendered HTML.
    fn render_math_and_diagrams<'a>(&self, root: &'a AstNode<'a>) {
        let nodes: Vec<_> = root.descendants().collect();
        for node in nodes {
            let replacement = match &node.data.borrow().value {
                NodeValue::CodeBlock(block) => {
                    match block.info.split_whitespace().next() {
                        Some("math") => {
                            let html = self.math.render(&block.literal, MathMode::Display);
                            Some(html_block(html.into_html() + "\n"))
                        }
                        Some("mermaid") => Some(html_block(diagram_container(&block.literal))),
                        _ => None,
                    }
                }
                NodeValue::Math(math) => {
                    let mode = if math.display_math {
                        MathMode::Display
                    } else {
                        MathMode::Inline
                    };
                    Some(NodeValue::HtmlInline(
                        self.math.render(&math.literal, mode).into_html(),
                    ))
                }
                _ => None,
            };

            if let Some(value) = replacement {
                node.data.borrow_mut().value = value;
            }
        }
    }
}

impl Default for MarkdownEngine {
    fn default() -> Self {
        Self::new(&RenderOptions::default())
    }
}

fn html_block(literal: String) -> NodeValue {
    NodeValue::HtmlBlock(NodeHtmlBlock {
        block_type: 0,
        literal,
    })
}
