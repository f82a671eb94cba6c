//! Transport-independent response value.
//!
//! Handlers build these; only the binary's accept loop converts them into
//! `tiny_http` responses. Keeping the type plain makes every route testable
//! without a socket.

use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
    /// Extra headers beyond Content-Type (Location, Set-Cookie).
    pub headers: Vec<(&'static str, String)>,
}

impl ApiResponse {
    /// JSON response from an already-serialized body.
    pub fn json(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: "application/json",
            body,
            headers: Vec::new(),
        }
    }

    /// JSON error body `{"error": message}`.
    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, json!({ "error": message }).to_string())
    }

    /// HTML page response.
    pub fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body,
            headers: Vec::new(),
        }
    }

    /// 303 redirect. Used by the logout handler, which must navigate the
    /// client regardless of anything else that happened in the request.
    pub fn see_other(location: &str) -> Self {
        Self {
            status: 303,
            content_type: "text/plain",
            body: String::new(),
            headers: vec![("Location", location.to_string())],
        }
    }

    pub fn with_header(mut self, name: &'static str, value: String) -> Self {
        self.headers.push((name, value));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_builds_json_body() {
        let response = ApiResponse::error(400, "missing query parameter: user");
        assert_eq!(response.status, 400);
        assert_eq!(response.body, r#"{"error":"missing query parameter: user"}"#);
    }

    #[test]
    fn see_other_carries_location() {
        let response = ApiResponse::see_other("/login");
        assert_eq!(response.status, 303);
        assert_eq!(response.headers, vec![("Location", "/login".to_string())]);
        assert!(response.body.is_empty());
    }
}
