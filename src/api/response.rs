//! Response envelope of the HR API.
//!
//! Every endpoint wraps its payload in the same envelope. The status `code`
//! arrives as a string from some deployments and as a number from others,
//! so both are accepted and held as text.

use serde::{Deserialize, Deserializer, Serialize};

/// Envelope code reported by a successful call.
pub const SUCCESS_CODE: &str = "200";

/// Generic HR API response.
///
/// # Example
///
/// ```
/// use statement_engine::api::ApiResponse;
///
/// let body = r#"{ "code": 200, "success": true, "data": [1, 2, 3] }"#;
/// let response: ApiResponse<Vec<u32>> = serde_json::from_str(body).unwrap();
///
/// assert!(response.is_ok_code());
/// assert_eq!(response.data, Some(vec![1, 2, 3]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Status code, `"200"` on success.
    #[serde(deserialize_with = "code_as_string")]
    pub code: String,
    /// Success flag as reported by the server.
    #[serde(default)]
    pub success: bool,
    /// Optional human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Optional message category.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// The payload. Missing or `null` on some failures.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Builds a successful envelope around `data`.
    pub fn ok(data: T) -> Self {
        Self {
            code: SUCCESS_CODE.to_string(),
            success: true,
            message: None,
            r#type: None,
            data: Some(data),
        }
    }

    /// Returns true when the envelope code is `200`.
    pub fn is_ok_code(&self) -> bool {
        self.code.trim() == SUCCESS_CODE
    }
}

fn code_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Int(i64),
    }

    Ok(match Code::deserialize(deserializer)? {
        Code::Text(text) => text,
        Code::Int(value) => value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_accepts_string() {
        let response: ApiResponse<Vec<u8>> =
            serde_json::from_str(r#"{"code":"200","success":true,"data":[]}"#).unwrap();
        assert_eq!(response.code, "200");
        assert!(response.is_ok_code());
    }

    #[test]
    fn test_code_accepts_number() {
        let response: ApiResponse<Vec<u8>> =
            serde_json::from_str(r#"{"code":500,"success":false,"message":"boom","data":null}"#)
                .unwrap();
        assert_eq!(response.code, "500");
        assert!(!response.is_ok_code());
        assert_eq!(response.message.as_deref(), Some("boom"));
        assert_eq!(response.data, None);
    }

    #[test]
    fn test_type_field_is_renamed() {
        let response: ApiResponse<()> =
            serde_json::from_str(r#"{"code":"200","success":true,"type":"info"}"#).unwrap();
        assert_eq!(response.r#type.as_deref(), Some("info"));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "info");
    }

    #[test]
    fn test_ok_constructor() {
        let response = ApiResponse::ok(vec![1]);
        assert!(response.success);
        assert!(response.is_ok_code());
    }
}
