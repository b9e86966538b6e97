//! Mermaid diagram containers
//!
//! There is no in-process diagram layout; in the client environment the fence body is
//! emitted inside `<pre class="mermaid">`, which mermaid.js renders on load.

pub const DIAGRAM_CLASS: &str = "mermaid";

pub fn diagram_container(source: &str) -> String {
    format!(
        "<pre class=\"{DIAGRAM_CLASS}\">{}</pre>\n",
        html_escape::encode_text(source.trim_end_matches('\n'))
    )
}
