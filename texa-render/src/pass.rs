//! Pass trait definition
//!
//! Every stage of the pipeline that rewrites text, on either side of the Markdown
//! engine, implements [`Pass`]. The renderer runs two ordered lists of passes:
//! source passes before the engine and HTML passes after it.

use crate::error::RenderError;

/// A single text-to-text rewrite step
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Pass for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn apply(&self, input: &str) -> Result<String, RenderError> {
///         Ok(input.to_uppercase())
///     }
/// }
/// ```
pub trait Pass: Send + Sync {
    /// Short identifier used in logs and error messages (e.g. "media-embeds")
    fn name(&self) -> &str;

    /// What the pass rewrites, shown in debug logs
    fn description(&self) -> &str {
        ""
    }

    /// Rewrite `input`, returning the transformed copy
    fn apply(&self, input: &str) -> Result<String, RenderError>;
}

/// Run `passes` in order, threading the output of each into the next.
pub fn run_passes(passes: &[Box<dyn Pass>], input: &str) -> Result<String, RenderError> {
    let mut text = input.to_string();
    for pass in passes {
        match pass.description() {
            "" => log::debug!("running pass '{}'", pass.name()),
            description => log::debug!("running pass '{}': {description}", pass.name()),
        }
        text = pass.apply(&text)?;
    }
    Ok(text)
}
