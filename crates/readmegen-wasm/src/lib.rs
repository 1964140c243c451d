//! readmegen-wasm - WebAssembly bindings for readmegen
//!
//! This crate lets a web page host the README form: it exposes assembly,
//! preview rendering and a stateful session to JavaScript. Clipboard
//! access and the download link stay on the JS side; `ReadmeSession`
//! hands them the text and file metadata to use.

use readmegen_core::{
    assemble, render_preview as render, AssemblerConfig, Download, FormFields, Session,
};
use wasm_bindgen::prelude::*;

fn from_js(fields: JsValue) -> Result<FormFields, JsValue> {
    serde_wasm_bindgen::from_value(fields).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Returns the current version of readmegen
#[wasm_bindgen]
pub fn version() -> String {
    readmegen_core::VERSION.to_string()
}

/// Assemble a README from a plain object of form values
#[wasm_bindgen(js_name = assembleReadme)]
pub fn assemble_readme(fields: JsValue) -> Result<String, JsValue> {
    Ok(assemble(&from_js(fields)?))
}

/// Render Markdown to preview HTML
#[wasm_bindgen(js_name = renderPreview)]
pub fn render_preview(markdown: &str) -> String {
    render(markdown)
}

/// The sample form values as a plain object
#[wasm_bindgen(js_name = sampleFields)]
pub fn sample_fields() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&FormFields::sample()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Page-level form state
#[wasm_bindgen]
pub struct ReadmeSession {
    inner: Session,
}

impl Default for ReadmeSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ReadmeSession {
    /// Session pre-filled with the sample project and already generated
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Session::with_sample(),
        }
    }

    /// Session with a custom profile link template, e.g.
    /// `https://gitlab.com/{author}`
    #[wasm_bindgen(js_name = withProfileTemplate)]
    pub fn with_profile_template(template: &str) -> Self {
        let mut inner = Session::with_config(AssemblerConfig {
            profile_url_template: template.to_string(),
        });
        inner.fields = FormFields::sample();
        inner.generate();
        Self { inner }
    }

    /// Replace the form values
    #[wasm_bindgen(js_name = setFields)]
    pub fn set_fields(&mut self, fields: JsValue) -> Result<(), JsValue> {
        self.inner.fields = from_js(fields)?;
        Ok(())
    }

    /// Current form values as a plain object
    pub fn fields(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.fields)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Assemble from the current fields; returns the new output text
    pub fn generate(&mut self) -> String {
        self.inner.generate().to_string()
    }

    /// Text for the output area
    pub fn output(&self) -> String {
        self.inner.output().to_string()
    }

    /// Record a hand edit of the output area
    #[wasm_bindgen(js_name = setOutput)]
    pub fn set_output(&mut self, text: &str) {
        self.inner.set_output(text);
    }

    /// Flip preview visibility; returns whether it is now shown
    #[wasm_bindgen(js_name = togglePreview)]
    pub fn toggle_preview(&mut self) -> bool {
        self.inner.toggle_preview()
    }

    /// Whether the preview is shown
    #[wasm_bindgen(js_name = previewVisible)]
    pub fn preview_visible(&self) -> bool {
        self.inner.preview().visible
    }

    /// HTML for the preview container
    #[wasm_bindgen(js_name = previewHtml)]
    pub fn preview_html(&self) -> String {
        self.inner.preview().html.clone()
    }

    /// Reset form, output and preview
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Whether copy/download have anything to work with. When this is
    /// false the page should ask the user to generate first.
    #[wasm_bindgen(js_name = hasOutput)]
    pub fn has_output(&self) -> bool {
        !self.inner.output().is_empty()
    }

    /// File name for the download link
    #[wasm_bindgen(js_name = downloadName)]
    pub fn download_name(&self) -> String {
        Download::readme(self.inner.output()).file_name
    }

    /// MIME type for the download blob
    #[wasm_bindgen(js_name = downloadMimeType)]
    pub fn download_mime_type(&self) -> String {
        Download::readme(self.inner.output()).mime_type.to_string()
    }
}
