//! Request fact capture.
//!
//! # Responsibilities
//! - Snapshot routing-relevant request facts (method, URI parts, charsets)
//! - Resolve the caller address from connection info
//! - Detect AJAX requests via the X-Requested-With header
//!
//! # Design Decisions
//! - Absent facts are stored as the literal placeholder `<none>` rather than
//!   omitted, so diagnostic tables always have a stable shape
//! - Capture happens once per request, before `next` runs; the snapshot is
//!   immutable afterwards

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header, Request},
};
use uuid::Uuid;

/// Placeholder stored for request facts that are absent.
pub const NONE_PLACEHOLDER: &str = "<none>";

/// Read-only snapshot of an inbound request.
#[derive(Debug, Clone)]
pub struct RequestFacts {
    pub request_id: String,
    pub method: String,
    pub scheme: String,
    pub host: String,
    pub port: String,
    pub path: String,
    pub query: String,
    pub url: String,
    pub accept_charset: String,
    pub content_charset: String,
    pub remote_addr: String,
    pub application: String,
    pub script_name: String,
}

impl RequestFacts {
    /// Capture facts from a request. `application` is the configured
    /// application name shown in the environment table.
    pub fn capture(req: &Request<Body>, application: &str) -> Self {
        let uri = req.uri();

        let host = uri
            .host()
            .map(str::to_string)
            .or_else(|| header_value(req, header::HOST));
        let scheme = uri.scheme_str().map(str::to_string);

        // Absolute form; assumes http when the scheme is not on the wire
        // (the common case behind a server-side URI).
        let url = match (&scheme, &host) {
            (_, None) => uri.to_string(),
            (Some(_), Some(_)) => uri.to_string(),
            (None, Some(host)) => format!("http://{}{}", host, uri),
        };

        let request_id = header_value(req, header::HeaderName::from_static("x-request-id"))
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Self {
            request_id,
            method: req.method().to_string(),
            scheme: or_none(scheme),
            host: or_none(host),
            port: or_none(uri.port_u16().map(|p| p.to_string())),
            path: uri.path().to_string(),
            query: or_none(uri.query().map(str::to_string)),
            url,
            accept_charset: or_none(header_value(req, header::ACCEPT_CHARSET)),
            content_charset: or_none(content_charset(req)),
            remote_addr: or_none(
                req.extensions()
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|info| info.0.to_string()),
            ),
            application: or_none(Some(application.to_string()).filter(|a| !a.is_empty())),
            script_name: or_none(script_name()),
        }
    }

    /// Facts for an error reported outside any request scope.
    pub fn unknown() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            method: NONE_PLACEHOLDER.to_string(),
            scheme: NONE_PLACEHOLDER.to_string(),
            host: NONE_PLACEHOLDER.to_string(),
            port: NONE_PLACEHOLDER.to_string(),
            path: NONE_PLACEHOLDER.to_string(),
            query: NONE_PLACEHOLDER.to_string(),
            url: NONE_PLACEHOLDER.to_string(),
            accept_charset: NONE_PLACEHOLDER.to_string(),
            content_charset: NONE_PLACEHOLDER.to_string(),
            remote_addr: NONE_PLACEHOLDER.to_string(),
            application: NONE_PLACEHOLDER.to_string(),
            script_name: NONE_PLACEHOLDER.to_string(),
        }
    }

    /// Application/runtime facts for the debug page.
    pub fn environment_table(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Application", self.application.clone()),
            ("Script Name", self.script_name.clone()),
            ("Request Path", self.path.clone()),
        ]
    }

    /// Request facts for the debug page.
    pub fn request_table(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Accept Charset", self.accept_charset.clone()),
            ("Content Charset", self.content_charset.clone()),
            ("Path", self.path.clone()),
            ("Query String", self.query.clone()),
            ("HTTP Method", self.method.clone()),
            ("URL", self.url.clone()),
            ("Remote Addr", self.remote_addr.clone()),
            ("Scheme", self.scheme.clone()),
            ("Port", self.port.clone()),
            ("Host", self.host.clone()),
        ]
    }
}

/// True when the client flagged the request as an in-page script call.
pub fn is_ajax(req: &Request<Body>) -> bool {
    req.headers()
        .get("x-requested-with")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
        .unwrap_or(false)
}

fn or_none(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NONE_PLACEHOLDER.to_string(),
    }
}

fn header_value(req: &Request<Body>, name: header::HeaderName) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Charset parameter of the Content-Type header, if any.
fn content_charset(req: &Request<Body>) -> Option<String> {
    let content_type = req.headers().get(header::CONTENT_TYPE)?.to_str().ok()?;
    let charset = content_type
        .split(';')
        .map(str::trim)
        .find_map(|param| param.strip_prefix("charset="))?;
    Some(charset.trim_matches('"').to_string())
}

fn script_name() -> Option<String> {
    std::env::current_exe()
        .ok()?
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
}
