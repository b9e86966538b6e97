//! Server and client environments.

use proptest::prelude::*;
use texa_render::{Environment, Renderer};

fn render(source: &str, environment: Environment) -> String {
    Renderer::for_environment(environment).render(Some(source))
}

#[test]
fn test_math_tag_renders_on_client() {
    let html = render("<math>\nx^2 + y^2\n</math>\n", Environment::Client);
    assert!(html.contains("<math"));
    assert!(html.contains("math-display"));
}

#[test]
fn test_math_tag_is_deferred_on_server() {
    let html = render("<math>\nx^2 + y^2\n</math>\n", Environment::Server);
    assert!(html.contains("language-math"));
    assert!(!html.contains("<math"));
}

#[test]
fn test_macros_expand_on_client() {
    let html = render("<math>\nx \\in \\RR\n</math>\n", Environment::Client);
    assert!(html.contains("<math"));
    assert!(!html.contains("math-error"));
}

#[test]
fn test_invalid_math_is_marked_not_fatal() {
    let html = render("Before $\\frac{a$ after\n", Environment::Client);
    assert!(html.contains("math-error"));
    assert!(html.contains("Before"));
}

#[test]
fn test_mermaid_tag() {
    let source = "<mermaid>\ngraph TD\nA-->B\n</mermaid>\n";
    let client = render(source, Environment::Client);
    assert!(client.contains("<pre class=\"mermaid\">"));
    let server = render(source, Environment::Server);
    assert!(server.contains("language-mermaid"));
}

#[test]
fn test_document_without_math_is_identical() {
    let source = "# Report\n\n<center>Title</center>\n\n<tbl A,B>\n1,2\n</tbl>\n\n```rust\nfn main() {}\n```\n\n<font roboto>\nBody <bi-star>\n</font>\n<newpage/>\n";
    assert_eq!(
        render(source, Environment::Server),
        render(source, Environment::Client)
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_environments_agree_without_math(source in "[a-zA-Z0-9 #*_\n<>/,.-]{0,120}") {
        prop_assume!(!source.contains("math") && !source.contains("mermaid"));
        prop_assert_eq!(
            render(&source, Environment::Server),
            render(&source, Environment::Client)
        );
    }
}
