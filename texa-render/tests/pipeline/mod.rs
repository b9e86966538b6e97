//! End-to-end pipeline tests: source in, HTML fragment out.

use proptest::prelude::*;
use texa_render::postprocess::PAGE_BREAK;
use texa_render::{Environment, MarkdownEngine, Renderer, FALLBACK_MESSAGE};

fn render(source: &str) -> String {
    Renderer::default().render(Some(source))
}

// ============================================================================
// STANDARD MARKDOWN
// ============================================================================

#[test]
fn test_plain_markdown_passes_through() {
    let source = "Some *emphasis* and **bold**.\n\n- one\n- two\n\n> quoted\n";
    let expected = MarkdownEngine::default().render(source).unwrap();
    assert_eq!(render(source), expected);
}

#[test]
fn test_raw_html_is_preserved() {
    let html = render("<section data-x=\"1\">kept</section>\n");
    assert_eq!(html, "<section data-x=\"1\">kept</section>\n");
}

#[test]
fn test_fenced_code_is_highlighted_with_copy_button() {
    let html = render("```python\nprint('hi')\n```\n");
    assert!(html.contains("copy-code-button"));
    assert!(html.contains("<code class=\"language-python\">"));
    assert!(html.contains("class=\"hl-"));
}

#[test]
fn test_unknown_fence_language_is_escaped() {
    let html = render("```klingon\na < b\n```\n");
    assert!(html.contains("a &lt; b"));
    assert!(!html.contains("hl-"));
}

// ============================================================================
// HEADINGS
// ============================================================================

#[test]
fn test_heading_gets_anchor_and_self_link() {
    let html = render("# Hello World!\n");
    assert!(html.starts_with("<div class=\"heading-container\">"));
    assert!(html.contains("<span class=\"heading-anchor\" id=\"hello-world!\""));
    assert!(html.contains("<h1><a class=\"heading-link\" href=\"#hello-world!\">Hello World!</a></h1>"));
}

#[test]
fn test_heading_slug_is_attribute_safe() {
    let html = render("## Quotes \"and\" <angles> & more\n");
    let id_start = html.find("id=\"").unwrap() + 4;
    let id_end = id_start + html[id_start..].find('"').unwrap();
    let slug = &html[id_start..id_end];
    assert!(!slug.is_empty());
    assert!(slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_.!~*'()%".contains(c)));
}

#[test]
fn test_duplicate_headings_share_slug() {
    let html = render("## Notes\n\n## Notes\n");
    assert_eq!(html.matches("id=\"notes\"").count(), 2);
}

#[test]
fn test_anchor_offset_is_configurable() {
    let options = texa_render::RenderOptions::new().with_anchor_offset("-80px");
    let html = Renderer::new(options).render(Some("# Top\n"));
    assert!(html.contains("top: -80px;"));
}

// ============================================================================
// SOURCE PASSES
// ============================================================================

#[test]
fn test_table_tag_becomes_table() {
    let html = render("<tbl A,B>\n1,2\n3,4\n</tbl>\n");
    assert!(html.contains("<table>"));
    assert!(html.contains("<th>A</th>"));
    assert!(html.contains("<th>B</th>"));
    assert!(html.contains("<td>3</td>"));
    assert_eq!(html.matches("<tr>").count(), 3);
}

#[test]
fn test_table_cells_are_processed_as_text() {
    let html = render("<tbl Icon,Name>\n<bi-star>,Star\n</tbl>\n");
    assert!(html.contains("<td><i class=\"bi bi-star\"></i></td>"));
}

#[test]
fn test_youtube_line_is_embedded() {
    let html = render("Intro\n\nhttps://www.youtube.com/watch?v=dQw4w9WgXcQ\n\nOutro\n");
    assert!(html.contains("<iframe"));
    assert!(html.contains("https://www.youtube.com/embed/dQw4w9WgXcQ"));
}

#[test]
fn test_youtube_id_with_dash_and_underscore_is_kept() {
    let html = render("https://www.youtube.com/watch?v=a-b_c123\n");
    assert!(html.contains("src=\"https://www.youtube.com/embed/a-b_c123\""));
}

#[test]
fn test_youtube_url_in_sentence_is_not_embedded() {
    let html = render("Watch https://www.youtube.com/watch?v=dQw4w9WgXcQ today\n");
    assert!(!html.contains("<iframe"));
    assert!(html.contains("watch?v=dQw4w9WgXcQ"));
}

#[test]
fn test_image_line_is_embedded() {
    let html = render("https://example.com/diagram.svg\n");
    assert!(html.contains("<img src=\"https://example.com/diagram.svg\" alt=\"\"/>"));
}

// ============================================================================
// FAILURE SEMANTICS
// ============================================================================

#[test]
fn test_empty_input_renders_empty() {
    assert_eq!(Renderer::default().render(None), "");
    assert_eq!(Renderer::default().render(Some("")), "");
}

#[test]
fn test_unclosed_tags_leave_residue() {
    let html = render("<center>unclosed\n");
    assert!(html.starts_with("<center>\nunclosed"));
    assert!(!html.contains("</center>"));
    assert_ne!(html, FALLBACK_MESSAGE);
}

#[test]
fn test_page_break_markup() {
    let html = render("before\n\n<newpage/>\n\nafter\n");
    assert!(html.contains(PAGE_BREAK));
    assert!(!html.contains("<newpage"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_render_never_fails(source in "\\PC{0,200}") {
        for environment in Environment::ALL {
            let result = Renderer::for_environment(environment).try_render(&source);
            prop_assert!(result.is_ok(), "{environment}: {:?}", result.err());
        }
    }

    #[test]
    fn test_tag_soup_never_fails(
        source in "(<center>|</center>|<tex>|</tex>|<math>|</math>|<mermaid>|</mermaid>|<tbl a,b>|</tbl>|<newpage/>|<bi-x>|<font pica>|</font>|\\$|#|x|\n| ){0,40}"
    ) {
        for environment in Environment::ALL {
            let html = Renderer::for_environment(environment).render(Some(&source));
            prop_assert_ne!(html.as_str(), FALLBACK_MESSAGE);
            prop_assert!(Renderer::for_environment(environment).try_render(&source).is_ok());
        }
    }
}
