use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One AnkiConnect invocation: action name, pinned API version, and the
/// operation-specific parameter object. `params` is left off the wire when the
/// action takes none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: String,
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl ActionRequest {
    pub fn new(action: impl Into<String>, version: u32, params: Option<Value>) -> Self {
        Self {
            action: action.into(),
            version,
            params,
        }
    }
}

/// The AnkiConnect reply envelope. `error == None` signals success even when
/// `result` is null, false, or empty. Both fields are always serialized; this
/// crate relays the envelope without enforcing anything about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse<T = Value> {
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}
