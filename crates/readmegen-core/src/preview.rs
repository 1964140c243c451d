//! Markdown Preview Renderer
//!
//! Converts a README into approximate HTML for display. This is not a
//! Markdown parser: the input goes through a fixed chain of whole-string
//! regex rewrites, and each rule sees the output of the rules before it.
//!
//! Supported subset:
//! - fenced shell code blocks (language tag dropped)
//! - `#`, `##`, `###` headings at the start of a line
//! - `- ` list items at the start of a line, wrapped into `<ul>` runs
//! - newlines, converted to `<br/>` after blank-line runs are collapsed
//!
//! CRLF line endings are normalized to LF before the chain runs, and the
//! line-anchored rules also treat `\r\n` as a line terminator on their own.
//!
//! Inline formatting, links, images, nested lists and HTML escaping are
//! out of scope. Raw HTML in the input reaches the output untouched.
//!
//! # Example
//!
//! ```
//! use readmegen_core::render_preview;
//!
//! let html = render_preview("# Title\n\n- one\n- two\n");
//! assert_eq!(html, "<h1>Title</h1><br/><br/><ul><li>one</li><li>two</li></ul><br/>");
//! ```

use std::sync::OnceLock;

use regex::{Captures, Regex};

const LINE_BREAK: &str = "<br/>";

/// How a rule rewrites each match
#[derive(Debug, Clone, Copy)]
pub(crate) enum Rewrite {
    /// Regex replacement template (`${1}` style)
    Template(&'static str),
    /// Computed replacement
    Expand(fn(&Captures) -> String),
}

/// One step of the preview chain
#[derive(Debug, Clone)]
pub struct RewriteRule {
    name: &'static str,
    pattern: Regex,
    rewrite: Rewrite,
}

impl RewriteRule {
    /// Build a rule from a pattern known to be valid
    fn new(name: &'static str, pattern: &str, rewrite: Rewrite) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
            rewrite,
        }
    }

    /// Rule identifier
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply the rule to every match in `input`
    pub fn apply(&self, input: &str) -> String {
        match self.rewrite {
            Rewrite::Template(template) => self.pattern.replace_all(input, template).into_owned(),
            Rewrite::Expand(expand) => self
                .pattern
                .replace_all(input, |caps: &Captures| expand(caps))
                .into_owned(),
        }
    }
}

/// Fenced shell block to `<pre><code>`
pub fn code_fence_rule() -> RewriteRule {
    RewriteRule::new(
        "code-fence",
        r"(?s)```(?:bash|sh|shell)\r?\n(.*?)```",
        Rewrite::Template("<pre><code>${1}</code></pre>"),
    )
}

/// Heading levels the preview understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// `# `
    H1,
    /// `## `
    H2,
    /// `### `
    H3,
}

/// `#`-prefixed line of the given level to `<hN>`
pub fn heading_rule(level: HeadingLevel) -> RewriteRule {
    let (name, pattern, template) = match level {
        HeadingLevel::H1 => ("heading-1", r"(?mR)^# (.*)$", "<h1>${1}</h1>"),
        HeadingLevel::H2 => ("heading-2", r"(?mR)^## (.*)$", "<h2>${1}</h2>"),
        HeadingLevel::H3 => ("heading-3", r"(?mR)^### (.*)$", "<h3>${1}</h3>"),
    };
    RewriteRule::new(name, pattern, Rewrite::Template(template))
}

/// `- ` line to `<li>`
pub fn list_item_rule() -> RewriteRule {
    RewriteRule::new(
        "list-item",
        r"(?mR)^- (.*)$",
        Rewrite::Template("<li>${1}</li>"),
    )
}

/// Collapse runs of blank lines to a single blank line
pub fn blank_lines_rule() -> RewriteRule {
    RewriteRule::new("blank-lines", r"\n{2,}", Rewrite::Template("\n\n"))
}

/// Every newline to `<br/>`
pub fn line_break_rule() -> RewriteRule {
    RewriteRule::new("line-break", r"\n", Rewrite::Template(LINE_BREAK))
}

/// Wrap each run of `<li>` elements in one `<ul>`
pub fn list_wrap_rule() -> RewriteRule {
    RewriteRule::new(
        "list-wrap",
        r"(?s)(?:<li>.*?</li>(?:<br/>)?)+",
        Rewrite::Expand(wrap_list_run),
    )
}

/// Breaks between items are dropped; a break that ended the run stays
/// outside the list.
fn wrap_list_run(caps: &Captures) -> String {
    let run = &caps[0];
    let (items, trailing) = match run.strip_suffix(LINE_BREAK) {
        Some(items) => (items, LINE_BREAK),
        None => (run, ""),
    };
    format!(
        "<ul>{}</ul>{}",
        items.replace("</li><br/><li>", "</li><li>"),
        trailing
    )
}

/// Ordered rewrite chain
#[derive(Debug, Clone)]
pub struct PreviewRenderer {
    rules: Vec<RewriteRule>,
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewRenderer {
    /// The standard chain. Level 3 headings are matched before level 2 and
    /// level 1 so the shorter markers never see a longer one.
    pub fn new() -> Self {
        Self {
            rules: vec![
                code_fence_rule(),
                heading_rule(HeadingLevel::H3),
                heading_rule(HeadingLevel::H2),
                heading_rule(HeadingLevel::H1),
                list_item_rule(),
                blank_lines_rule(),
                line_break_rule(),
                list_wrap_rule(),
            ],
        }
    }

    /// Rules in application order
    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Render Markdown to preview HTML
    pub fn render(&self, markdown: &str) -> String {
        self.rules
            .iter()
            .fold(markdown.replace("\r\n", "\n"), |html, rule| rule.apply(&html))
    }
}

/// Render Markdown with the standard chain
pub fn render_preview(markdown: &str) -> String {
    static RENDERER: OnceLock<PreviewRenderer> = OnceLock::new();
    RENDERER.get_or_init(PreviewRenderer::new).render(markdown)
}

/// Wrap a preview fragment in a self-contained HTML page
pub fn standalone_page(title: &str, body_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 860px;
            margin: 0 auto;
            padding: 2rem;
        }}
        h1 {{ border-bottom: 1px solid #dee2e6; padding-bottom: 0.3rem; }}
        pre {{
            background: #f6f8fa;
            padding: 1rem;
            border-radius: 6px;
            overflow-x: auto;
        }}
    </style>
</head>
<body>
<main class="preview">{body_html}</main>
</body>
</html>
"#
    )
}
