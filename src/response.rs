//! Response abstraction views write into.
//!
//! A view only needs an appendable body. Status, headers and content type
//! belong to the caller and are never touched by rendering.

use indexmap::IndexMap;
use std::io::Write;

/// An outgoing HTTP response with an appendable body stream.
pub trait HttpResponse {
    type Body: Write;

    /// The body stream. Writes append after any bytes already present.
    fn body_mut(&mut self) -> &mut Self::Body;
}

/// In-memory response with a byte buffer body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferedResponse {
    status: u16,
    headers: IndexMap<String, String>,
    body: Vec<u8>,
}

impl Default for BufferedResponse {
    fn default() -> Self {
        Self { status: 200, headers: IndexMap::new(), body: Vec::new() }
    }
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Header lookup is case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn body_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

impl HttpResponse for BufferedResponse {
    type Body = Vec<u8>;

    fn body_mut(&mut self) -> &mut Self::Body {
        &mut self.body
    }
}
