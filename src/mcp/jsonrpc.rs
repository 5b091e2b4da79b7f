use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonRpcId {
    Number(i64),
    String(String),
    Null,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: JsonRpcId,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    pub fn new(id: JsonRpcId, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            method: method.into(),
            params,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcNotification {
    pub jsonrpc: String,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcNotification {
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.into(),
            params,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: JsonRpcId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn ok(id: JsonRpcId, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn err(id: JsonRpcId, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// One frame off the wire. Variant order matters for untagged matching:
/// requests carry both `id` and `method`, notifications only `method`,
/// responses only `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonRpcMessage {
    Request(JsonRpcRequest),
    Notification(JsonRpcNotification),
    Response(JsonRpcResponse),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_frame_parses_as_request() {
        let frame = r#"{"jsonrpc":"2.0","id":1,"method":"tools/list","params":{}}"#;
        let msg: JsonRpcMessage = serde_json::from_str(frame).expect("parse");
        match msg {
            JsonRpcMessage::Request(req) => {
                assert_eq!(req.id, JsonRpcId::Number(1));
                assert_eq!(req.method, "tools/list");
            }
            other => panic!("expected request, got {:?}", other),
        }
    }

    #[test]
    fn notification_frame_parses_as_notification() {
        let frame = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        let msg: JsonRpcMessage = serde_json::from_str(frame).expect("parse");
        assert!(matches!(msg, JsonRpcMessage::Notification(_)));
    }

    #[test]
    fn response_frame_parses_as_response() {
        let frame = r#"{"jsonrpc":"2.0","id":"abc","result":{"ok":true}}"#;
        let msg: JsonRpcMessage = serde_json::from_str(frame).expect("parse");
        match msg {
            JsonRpcMessage::Response(resp) => {
                assert_eq!(resp.id, JsonRpcId::String("abc".to_string()));
                assert!(resp.error.is_none());
            }
            other => panic!("expected response, got {:?}", other),
        }
    }

    #[test]
    fn error_response_omits_result_key() {
        let resp = JsonRpcResponse::err(
            JsonRpcId::Number(7),
            JsonRpcError {
                code: -32601,
                message: "method not found".to_string(),
                data: None,
            },
        );
        let v = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(
            v,
            json!({"jsonrpc":"2.0","id":7,"error":{"code":-32601,"message":"method not found"}})
        );
    }
}
