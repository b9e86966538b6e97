//! Source passes
//!
//! Everything that must happen to the raw document text before Markdown parsing, in
//! order: bare media lines, table tags, then math/mermaid fence normalization.

pub mod media;
pub mod normalize;
pub mod table;

pub use media::{embed_line, MediaEmbeds, MediaLine};
pub use normalize::{normalize_block_tags, FenceNormalizer};
pub use table::{build_pipe_table, convert_table_tags, TableTags};

use crate::pass::Pass;

/// The source passes in pipeline order.
pub fn default_passes() -> Vec<Box<dyn Pass>> {
    vec![
        Box::new(MediaEmbeds),
        Box::new(TableTags),
        Box::new(FenceNormalizer),
    ]
}
