use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    error::{FieldNotFound, UnexpectedBody},
    massage::massage,
};

/// HTTP status Adyen answers with when the request was processed
pub const HTTP_OK: u16 = 200;

/// Result code of an approved payment
pub const RESULT_CODE_AUTHORISED: &str = "Authorised";

/// Normalized response of one Adyen API call
///
/// Holds the HTTP status and the massaged body. Top-level fields are read by
/// their normalized name through [`Response::field`], e.g. `psp_reference`,
/// `refusal_reason` or `details`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    status: u16,
    data: Map<String, Value>,
}

impl Response {
    /// Create a response from an already normalized map
    pub fn new(status: u16, data: Map<String, Value>) -> Self {
        Self { status, data }
    }

    /// Massage a raw response body and wrap it
    ///
    /// An empty body (`null`) becomes an empty map. Any other body that is not
    /// a JSON object is rejected.
    pub fn parse(status: u16, body: Value) -> Result<Self, UnexpectedBody> {
        match massage(body) {
            Value::Object(data) => Ok(Self::new(status, data)),
            Value::Null => Ok(Self::new(status, Map::new())),
            other => Err(UnexpectedBody {
                status,
                kind: json_kind(&other),
            }),
        }
    }

    /// HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Whether the request was processed (status is exactly 200)
    pub fn is_success(&self) -> bool {
        self.status == HTTP_OK
    }

    /// Whether the request was processed and the payment was authorised
    pub fn is_approved(&self) -> bool {
        self.is_success()
            && self.data.get("result_code").and_then(Value::as_str)
                == Some(RESULT_CODE_AUTHORISED)
    }

    /// Alias of [`Response::is_approved`]
    pub fn is_authorised(&self) -> bool {
        self.is_approved()
    }

    /// Alias of [`Response::is_approved`]
    pub fn is_authorized(&self) -> bool {
        self.is_approved()
    }

    /// Check if a normalized top-level field is present
    pub fn has_field(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    /// Get a normalized top-level field
    pub fn field(&self, name: &str) -> Result<&Value, FieldNotFound> {
        self.data.get(name).ok_or_else(|| FieldNotFound {
            name: name.to_string(),
        })
    }

    /// The whole normalized body
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn into_data(self) -> Map<String, Value> {
        self.data
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
