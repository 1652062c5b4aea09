//! Response formatting: JSON or XML, selected per request.
//!
//! Every resource endpoint accepts a `format` query parameter. The default
//! (and the fallback for unknown values) is JSON; `format=xml` wraps the
//! payload in a `<response>` root element with list items serialized as
//! repeated `<item>` elements and every value as a plain text node.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, Uri, header, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::convert::Infallible;

/// Representation selector, extracted from the `format` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    fn from_query(query: &str) -> Self {
        for pair in query.split('&') {
            let mut parts = pair.splitn(2, '=');
            if parts.next() == Some("format") {
                let value = parts.next().unwrap_or("");
                if value.eq_ignore_ascii_case("xml") {
                    return Self::Xml;
                }
                return Self::Json;
            }
        }
        Self::Json
    }

    /// Reads the selector from a request URI. Used by extractors that need
    /// the format before their own rejection can fire.
    pub fn from_uri(uri: &Uri) -> Self {
        uri.query().map(Self::from_query).unwrap_or_default()
    }

    /// Builds the outbound response for `payload` with the given status,
    /// setting the matching content-type. Pure apart from allocation.
    pub fn render(self, status: StatusCode, payload: Value) -> Response {
        match self {
            Self::Json => (status, Json(payload)).into_response(),
            Self::Xml => (
                status,
                [(header::CONTENT_TYPE, "application/xml")],
                to_xml(&payload),
            )
                .into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for ResponseFormat
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_uri(&parts.uri))
    }
}

/// Serializes a JSON value as XML under a `<response>` root element.
fn to_xml(payload: &Value) -> String {
    let mut out = String::from(r#"<?xml version="1.0" encoding="UTF-8" ?>"#);
    write_element(&mut out, "response", payload);
    out
}

fn write_element(out: &mut String, name: &str, value: &Value) {
    out.push('<');
    out.push_str(name);
    out.push('>');
    write_value(out, value);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, item) in map {
                write_element(out, key, item);
            }
        }
        Value::Array(items) => {
            for item in items {
                write_element(out, "item", item);
            }
        }
        Value::Null => {}
        Value::String(s) => escape_into(out, s),
        other => out.push_str(&other.to_string()),
    }
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
