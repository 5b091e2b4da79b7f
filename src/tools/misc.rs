use serde_json::json;

use super::registry::{no_params, pick, ToolDef};

const ANKI_CONNECT_VERSION: u32 = 6;

pub(crate) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "version",
            description: "Get the AnkiConnect API version",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {},
                    "additionalProperties": false
                })
            },
            action: "version",
            version: ANKI_CONNECT_VERSION,
            build_params: no_params,
        },
        ToolDef {
            name: "upgrade",
            description: "Upgrade AnkiConnect (if available)",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {},
                    "additionalProperties": false
                })
            },
            action: "upgrade",
            version: ANKI_CONNECT_VERSION,
            build_params: no_params,
        },
        ToolDef {
            name: "get_tags",
            description: "Get all tags from Anki",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {},
                    "additionalProperties": false
                })
            },
            action: "getTags",
            version: ANKI_CONNECT_VERSION,
            build_params: no_params,
        },
        ToolDef {
            name: "multi",
            description: "Execute multiple AnkiConnect actions in a single request",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "actions": {
                            "type": "array",
                            "description": "Array of AnkiConnect requests to execute",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "action": { "type": "string" },
                                    "version": { "type": "number" },
                                    "params": { "type": "object" }
                                },
                                "required": ["action", "version"],
                                "additionalProperties": false
                            }
                        }
                    },
                    "required": ["actions"],
                    "additionalProperties": false
                })
            },
            action: "multi",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["actions"]),
        },
    ]
}
