//! Behaviour tests for the preview renderer

use readmegen_core::{assemble, render_preview, FormFields, PreviewRenderer};

#[test]
fn test_heading_then_list() {
    let html = render_preview("# Title\n\n- one\n- two\n");

    assert!(html.starts_with("<h1>Title</h1>"));
    assert_eq!(html.matches("<ul>").count(), 1);
    assert!(html.contains("<ul><li>one</li><li>two</li></ul>"));
    assert!(!html.contains("<ul><h1>"));
}

#[test]
fn test_render_is_deterministic() {
    let markdown = assemble(&FormFields::sample());
    assert_eq!(render_preview(&markdown), render_preview(&markdown));

    let renderer = PreviewRenderer::new();
    assert_eq!(renderer.render(&markdown), render_preview(&markdown));
}

#[test]
fn test_full_readme_preview() {
    let markdown = assemble(&FormFields {
        name: "Widget".to_string(),
        install_command: "cargo install widget".to_string(),
        features_raw: "Fast, Small".to_string(),
        ..FormFields::default()
    });

    let html = render_preview(&markdown);

    assert_eq!(
        html,
        "<h1>Widget</h1><br/><br/>\
         Short description of the project.<br/><br/>\
         <h2>Features</h2><br/><br/>\
         <ul><li>Fast</li><li>Small</li></ul><br/><br/>\
         <h2>Installation</h2><br/><br/>\
         <pre><code>cargo install widget<br/></code></pre><br/><br/>\
         <h2>License</h2><br/>\
         MIT"
    );
}

#[test]
fn test_heading_level_three() {
    assert_eq!(render_preview("### Notes"), "<h3>Notes</h3>");
}

#[test]
fn test_html_in_content_is_not_escaped() {
    let markdown = assemble(&FormFields {
        description: "<script>alert(1)</script>".to_string(),
        ..FormFields::default()
    });
    assert!(render_preview(&markdown).contains("<script>alert(1)</script>"));
}

#[test]
fn test_nested_list_markers_are_not_distinguished() {
    let html = render_preview("- top\n  - nested");
    assert_eq!(html, "<ul><li>top</li></ul><br/>  - nested");
}

#[test]
fn test_crlf_readme_renders_like_lf() {
    let html = render_preview("# Title\r\n- a\r\n- b\r\n");

    assert_eq!(html, "<h1>Title</h1><br/><ul><li>a</li><li>b</li></ul><br/>");
    assert!(!html.contains('\r'));
    assert_eq!(html, render_preview("# Title\n- a\n- b\n"));
}

#[test]
fn test_crlf_code_fence() {
    assert_eq!(
        render_preview("```bash\r\nmake\r\n```"),
        "<pre><code>make<br/></code></pre>"
    );
}
