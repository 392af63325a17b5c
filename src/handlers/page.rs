//! HTML debug page renderer.
//!
//! Renders a human-readable diagnostic page: the error, its cause chain, and
//! the data tables the middleware attached (application environment, request
//! facts). Development use only; the middleware never registers this handler
//! unless debug mode is on.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::handlers::{ErrorEvent, ErrorHandler};

/// A titled key/value table shown on the debug page.
#[derive(Debug, Clone)]
pub struct DataTable {
    pub title: String,
    pub rows: Vec<(&'static str, String)>,
}

/// Renders the HTML debug page.
pub struct PageHandler {
    editor: Option<String>,
    tables: Vec<DataTable>,
}

impl PageHandler {
    pub fn new() -> Self {
        Self {
            editor: None,
            tables: Vec::new(),
        }
    }

    /// Set the editor hint. The value is rendered as-is; no validation.
    pub fn with_editor(mut self, editor: impl Into<String>) -> Self {
        self.editor = Some(editor.into());
        self
    }

    /// Attach a data table. Tables render in attachment order.
    pub fn with_table(mut self, title: impl Into<String>, rows: Vec<(&'static str, String)>) -> Self {
        self.tables.push(DataTable {
            title: title.into(),
            rows,
        });
        self
    }

    pub fn editor(&self) -> Option<&str> {
        self.editor.as_deref()
    }

    fn render(&self, event: &ErrorEvent) -> String {
        let mut html = String::with_capacity(2048);

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("  <meta charset=\"utf-8\">\n");
        html.push_str("  <title>Application Error</title>\n");
        html.push_str("  <style>\n");
        html.push_str(PAGE_STYLES);
        html.push_str("  </style>\n</head>\n<body>\n");

        html.push_str("  <div class=\"container\">\n");
        html.push_str("    <h1>Application Error</h1>\n");
        html.push_str(&format!(
            "    <p class=\"request-id\">Request ID: {}</p>\n",
            escape(event.request_id())
        ));
        html.push_str(&format!(
            "    <div class=\"message\"><strong>Error:</strong> {}</div>\n",
            escape(&event.message())
        ));

        let chain = event.chain();
        if !chain.is_empty() {
            html.push_str("    <div class=\"chain\">\n      <h2>Caused by</h2>\n      <ul>\n");
            for cause in &chain {
                html.push_str(&format!("        <li>{}</li>\n", escape(cause)));
            }
            html.push_str("      </ul>\n    </div>\n");
        }

        for table in &self.tables {
            html.push_str(&format!(
                "    <h2>{}</h2>\n    <table>\n",
                escape(&table.title)
            ));
            for (key, value) in &table.rows {
                html.push_str(&format!(
                    "      <tr><th>{}</th><td>{}</td></tr>\n",
                    escape(key),
                    escape(value)
                ));
            }
            html.push_str("    </table>\n");
        }

        if let Some(editor) = &self.editor {
            html.push_str(&format!(
                "    <p class=\"editor\" data-editor=\"{}\">Editor: {}</p>\n",
                escape(editor),
                escape(editor)
            ));
        }

        html.push_str("  </div>\n</body>\n</html>\n");
        html
    }
}

impl Default for PageHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorHandler for PageHandler {
    fn name(&self) -> &'static str {
        "pretty_page"
    }

    fn handle(&self, event: &ErrorEvent) -> Option<Response> {
        Some((StatusCode::INTERNAL_SERVER_ERROR, Html(self.render(event))).into_response())
    }
}

/// Minimal HTML escaping for text and attribute positions.
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

const PAGE_STYLES: &str = r#"
    body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; background: #f5f5f5; color: #333; margin: 0; padding: 20px; }
    .container { max-width: 1100px; margin: 0 auto; background: white; border-radius: 6px; padding: 32px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }
    h1 { color: #c62828; margin-top: 0; border-bottom: 2px solid #c62828; padding-bottom: 8px; }
    h2 { color: #555; font-size: 1.1em; margin-top: 24px; }
    .request-id { color: #888; font-size: 0.85em; }
    .message { background: #ffebee; border-left: 4px solid #c62828; padding: 12px; margin: 16px 0; }
    .chain { background: #fff3e0; border-left: 4px solid #ef6c00; padding: 12px; margin: 16px 0; }
    table { border-collapse: collapse; width: 100%; }
    th { text-align: left; padding: 6px 12px 6px 0; color: #666; white-space: nowrap; vertical-align: top; }
    td { padding: 6px 0; font-family: monospace; word-break: break-all; }
    .editor { color: #888; font-size: 0.85em; margin-top: 24px; }
"#;
