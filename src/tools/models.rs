use serde_json::json;

use super::registry::{no_params, pick, ToolDef};

const ANKI_CONNECT_VERSION: u32 = 6;

pub(crate) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "model_names",
            description: "Get the complete list of model names for the current user",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {},
                    "additionalProperties": false
                })
            },
            action: "modelNames",
            version: ANKI_CONNECT_VERSION,
            build_params: no_params,
        },
        ToolDef {
            name: "model_names_and_ids",
            description: "Get the complete list of model names and their corresponding IDs",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {},
                    "additionalProperties": false
                })
            },
            action: "modelNamesAndIds",
            version: ANKI_CONNECT_VERSION,
            build_params: no_params,
        },
        ToolDef {
            name: "model_field_names",
            description: "Get the list of field names for the provided model",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "modelName": {
                            "type": "string",
                            "description": "Name of the model to get field names for"
                        }
                    },
                    "required": ["modelName"],
                    "additionalProperties": false
                })
            },
            action: "modelFieldNames",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["modelName"]),
        },
        ToolDef {
            name: "model_fields_on_templates",
            description: "Get the fields on the question and answer side of each card template for a model",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "modelName": {
                            "type": "string",
                            "description": "Name of the model to get template fields for"
                        }
                    },
                    "required": ["modelName"],
                    "additionalProperties": false
                })
            },
            action: "modelFieldsOnTemplates",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["modelName"]),
        },
    ]
}
