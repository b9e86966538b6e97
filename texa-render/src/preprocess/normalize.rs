//! Block tag normalization
//!
//! `<math>` and `<mermaid>` become fenced code blocks so the Markdown engine's own
//! fence parser hands their content to the math and diagram backends verbatim.

use crate::error::RenderError;
use crate::pass::Pass;

const FENCE_REWRITES: &[(&str, &str)] = &[
    ("<math>", "```math\n"),
    ("</math>", "\n```"),
    ("<mermaid>", "```mermaid\n"),
    ("</mermaid>", "\n```"),
];

pub fn normalize_block_tags(input: &str) -> String {
    FENCE_REWRITES
        .iter()
        .fold(input.to_string(), |text, (tag, fence)| text.replace(tag, fence))
}

/// Source pass rewriting math and mermaid tags into fences.
pub struct FenceNormalizer;

impl Pass for FenceNormalizer {
    fn name(&self) -> &str {
        "fence-normalizer"
    }

    fn description(&self) -> &str {
        "Rewrites <math> and <mermaid> blocks into fenced code blocks"
    }

    fn apply(&self, input: &str) -> Result<String, RenderError> {
        Ok(normalize_block_tags(input))
    }
}
