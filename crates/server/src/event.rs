//! Request and response envelopes of the handler.
//!
//! An [`ApiEvent`] describes one HTTP request the way a function gateway delivers it:
//! method, query parameters, headers and a raw body string. The handler answers with
//! an [`ApiResponse`] carrying the status, headers and a JSON body string.

use std::collections::{BTreeMap, HashMap};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use common::types::ErrorBody;

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const MAX_AGE: &str = "Access-Control-Max-Age";
pub const CONTENT_TYPE: &str = "Content-Type";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEvent {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

impl ApiEvent {
    /// Upper-cased method, `GET` when absent.
    pub fn method(&self) -> String {
        self.http_method.as_deref().unwrap_or("GET").to_ascii_uppercase()
    }

    /// The `path` query parameter that selects the operation; empty when absent.
    pub fn path(&self) -> &str {
        self.query_string_parameters
            .as_ref()
            .and_then(|q| q.get("path"))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()?
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Decode the JSON body. A missing or blank body reads as `{}`.
    pub fn json_body<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        match self.body.as_deref() {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str(raw),
            _ => serde_json::from_str("{}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl ApiResponse {
    fn with_headers(status_code: u16, headers: &[(&str, &str)], body: String) -> Self {
        Self {
            status_code,
            headers: headers.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            body,
            is_base64_encoded: false,
        }
    }

    /// Successful JSON reply.
    pub fn json<T: Serialize>(status_code: u16, value: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(value)?;
        Ok(Self::with_headers(
            status_code,
            &[(CONTENT_TYPE, "application/json"), (ALLOW_ORIGIN, "*")],
            body,
        ))
    }

    /// CORS preflight answer.
    pub fn preflight() -> Self {
        Self::with_headers(
            200,
            &[
                (ALLOW_ORIGIN, "*"),
                (ALLOW_METHODS, "GET, POST, PUT, OPTIONS"),
                (ALLOW_HEADERS, "Content-Type, X-Admin-Auth"),
                (MAX_AGE, "86400"),
            ],
            String::new(),
        )
    }

    pub fn error(status_code: u16, message: &str) -> Self {
        let body = serde_json::to_string(&ErrorBody { error: message }).unwrap_or_default();
        Self::with_headers(status_code, &[(ALLOW_ORIGIN, "*")], body)
    }

    pub fn not_found() -> Self {
        Self::error(404, "Not found")
    }

    pub fn unauthorized() -> Self {
        Self::error(403, "Unauthorized")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
