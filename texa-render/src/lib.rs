//! Markdown, LaTeX and custom-tag rendering for Texa documents
//!
//! This crate turns a Texa document (standard Markdown extended with custom tags) into an
//! embeddable HTML fragment. Rendering is pure: the same source and environment always give
//! the same HTML, and nothing is cached or shared between calls besides immutable statics.
//!
//! This is a pure lib. It powers the texa CLI but is shell agnostic: no printing, no env
//! vars, no files. Logging goes through the `log` facade only.
//!
//! Pipeline
//!
//! ```text
//!     source
//!       → preprocess::MediaEmbeds      bare YouTube / image lines become embeds
//!       → preprocess::TableTags        <tbl H1,H2>rows</tbl> becomes a pipe table
//!       → preprocess::FenceNormalizer  <math>/<mermaid> become fenced blocks
//!       → engine::MarkdownEngine       comrak, syntect highlighting, math/diagrams (client)
//!       → postprocess::HeadingAnchors  deep-linkable headings
//!       → postprocess::{DollarEscape, AlignmentTags, PageBreaks, IconTags, FontTags}
//!       → HTML
//! ```
//!
//! Every stage implements the [`Pass`] trait except the engine. The renderer runs them in
//! order and guards the whole chain: errors and panics are logged and replaced by the
//! fallback message (see [`Renderer::render`]).
//!
//! ```text
//!     The file structure :
//!     .
//!     ├── error.rs            # RenderError
//!     ├── pass.rs             # Pass trait and runner
//!     ├── registry.rs         # FontRegistry for <font KEY>
//!     ├── environment.rs      # Server / Client selection
//!     ├── options.rs          # RenderOptions
//!     ├── preprocess          # source passes
//!     ├── engine              # comrak, highlighting, math, diagrams
//!     ├── postprocess         # HTML passes
//!     ├── outline.rs          # headings → table of contents
//!     ├── export.rs           # stylesheet and standalone documents
//!     └── renderer.rs         # Renderer, the guarded pipeline
//! ```
//!
//! Environments
//!
//! The caller picks an [`Environment`]. `Server` leaves `math` and `mermaid` fences as code
//! blocks for client hydration; `Client` renders math to MathML in place and wraps diagrams
//! for mermaid.js. Everything else is identical, so documents without math or diagrams
//! render byte for byte the same in both.
//!
//! Custom tags
//!
//! Tags are textual. An unmatched tag is not an error, it simply leaves literal residue in
//! the output (an unclosed `<center>` still opens a centered block). All substitutions are
//! idempotent.
//!
//! Known limitation: two headings with the same text get the same slug.

pub mod engine;
pub mod environment;
pub mod error;
pub mod export;
pub mod options;
pub mod outline;
pub mod pass;
pub mod postprocess;
pub mod preprocess;
pub mod registry;
pub mod renderer;

pub use engine::{CodeHighlighter, MarkdownEngine};
pub use environment::{Environment, MathDiagramRendering};
pub use error::RenderError;
pub use export::{standalone_document, standalone_document_for, stylesheet, ExportOptions};
pub use options::{RenderOptions, FALLBACK_MESSAGE, PREVIEW_PLACEHOLDER};
pub use outline::OutlineEntry;
pub use pass::Pass;
pub use registry::{FontEntry, FontRegistry, DEFAULT_FONTS};
pub use renderer::Renderer;

/// Render `source` with default options in `environment`. Never fails.
pub fn render(source: Option<&str>, environment: Environment) -> String {
    Renderer::for_environment(environment).render(source)
}

/// Render for an editor preview: empty input yields [`PREVIEW_PLACEHOLDER`].
pub fn render_preview(source: Option<&str>, environment: Environment) -> String {
    Renderer::for_environment(environment).render_preview(source)
}
