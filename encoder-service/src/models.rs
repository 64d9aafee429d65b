// Request and response bodies for the /encode endpoint
use serde::{Deserialize, Serialize};

/// Body of a `POST /encode` request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EncodeRequest {
    pub data: String,
}

/// Body of a successful `POST /encode` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodeResponse {
    pub encoded: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_requires_data() {
        assert!(serde_json::from_str::<EncodeRequest>("{}").is_err());
        assert!(serde_json::from_str::<EncodeRequest>(r#"{"data": 5}"#).is_err());
        assert!(serde_json::from_str::<EncodeRequest>(r#"{"data": null}"#).is_err());
    }

    #[test]
    fn test_request_accepts_empty_and_extra_fields() {
        let req: EncodeRequest = serde_json::from_str(r#"{"data": "", "other": 1}"#).unwrap();
        assert_eq!(req.data, "");
    }

    #[test]
    fn test_response_shape() {
        let body = serde_json::to_value(EncodeResponse {
            encoded: "aGVsbG8=".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "encoded": "aGVsbG8=" }));
    }
}
