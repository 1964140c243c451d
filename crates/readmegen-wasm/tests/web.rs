//! Browser-side tests for the JS bindings
//!
//! Run with `wasm-pack test --headless --firefox crates/readmegen-wasm`.

#![cfg(target_arch = "wasm32")]

use readmegen_wasm::{assemble_readme, sample_fields, ReadmeSession};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Shape of the form object a page script builds
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageForm {
    name: &'static str,
    install_command: &'static str,
    usage_text: &'static str,
    features_raw: &'static str,
    author: &'static str,
}

fn page_form() -> JsValue {
    serde_wasm_bindgen::to_value(&PageForm {
        name: "Widget",
        install_command: "npm install widget",
        usage_text: "widget --help",
        features_raw: "Fast, Small",
        author: "octocat",
    })
    .unwrap()
}

#[wasm_bindgen_test]
fn assemble_accepts_camel_case_object() {
    let markdown = assemble_readme(page_form()).unwrap();

    assert!(markdown.starts_with("# Widget\n"));
    assert!(markdown.contains("```bash\nnpm install widget\n```"));
    assert!(markdown.contains("## Usage\n\nwidget --help"));
    assert!(markdown.contains("- Fast\n- Small\n"));
    assert!(markdown.ends_with("[octocat](https://github.com/octocat)"));
}

#[wasm_bindgen_test]
fn assemble_rejects_non_object() {
    assert!(assemble_readme(JsValue::from_f64(3.0)).is_err());
}

#[wasm_bindgen_test]
fn session_takes_fields_from_page() {
    let mut session = ReadmeSession::new();
    session.set_fields(page_form()).unwrap();

    assert!(session.generate().starts_with("# Widget"));
    assert!(session.toggle_preview());
    assert!(session.preview_html().starts_with("<h1>Widget</h1>"));
}

#[wasm_bindgen_test]
fn sample_fields_feed_assembly() {
    let markdown = assemble_readme(sample_fields().unwrap()).unwrap();

    assert!(markdown.starts_with("# Awesome Project"));
}
