//! Custom tag substitutions through the full renderer.

use insta::assert_snapshot;
use proptest::prelude::*;
use texa_render::postprocess::substitute_tags;
use texa_render::preprocess::convert_table_tags;
use texa_render::{FontRegistry, Renderer};

fn render(source: &str) -> String {
    Renderer::default().render(Some(source))
}

#[test]
fn test_tex_block() {
    assert_eq!(
        render("<tex>E = mc^2</tex>\n"),
        "<p><div class='tex-content'>\n E = mc^2</div></p>\n"
    );
}

#[test]
fn test_center_block() {
    assert_eq!(render("<center>hi</center>\n"), "<center>\nhi </center>\n");
}

#[test]
fn test_alignment_divs() {
    let html = render("<right>\nsigned\n</right>\n");
    assert_eq!(html, "<div style=\"text-align: right\">\nsigned\n</div>\n");
}

#[test]
fn test_font_block() {
    let html = render("<font pica>\nOld style\n</font>\n");
    assert_snapshot!(html.trim(), @r#"
    <div class="pica-font">
    Old style
    </div>
    "#);
}

#[test]
fn test_unknown_font_is_left_alone() {
    let html = render("<font comic>\nhello\n</font>\n");
    assert!(html.contains("<font comic>"));
}

#[test]
fn test_inline_icon() {
    assert_eq!(
        render("Star <bi-star-fill> rating\n"),
        "<p>Star <i class=\"bi bi-star-fill\"></i> rating</p>\n"
    );
}

#[test]
fn test_inline_page_break_variants() {
    for tag in ["<newpage/>", "<newpage />", "<NEWPAGE/>"] {
        let html = render(&format!("a {tag} b\n"));
        assert!(html.contains("code-page-break"), "{tag}");
    }
}

#[test]
fn test_table_tag_source() {
    assert_snapshot!(convert_table_tags("<tbl Name, Role>\nAda, Engineer\nGrace,Admiral\n</tbl>").trim(), @r"
    | Name | Role |
    | --- | --- |
    | Ada | Engineer |
    | Grace | Admiral |
    ");
}

#[test]
fn test_triple_dollar_is_split() {
    assert_eq!(
        substitute_tags("$$$x$", FontRegistry::global()),
        "$$ $x$"
    );
}

proptest! {
    #[test]
    fn test_tag_substitution_is_idempotent(
        html in "(<center>|</center>|<tex>|</tex>|<justify>|</justify>|<left>|</left>|<right>|</right>|<newpage/>|<newpage />|<bi-arrow-up>|<font geist>|<font nope>|</font>|text| |\n){0,30}"
    ) {
        let registry = FontRegistry::global();
        let once = substitute_tags(&html, registry);
        let twice = substitute_tags(&once, registry);
        prop_assert_eq!(once, twice);
    }
}
