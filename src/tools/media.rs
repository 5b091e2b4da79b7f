use serde_json::json;

use super::registry::{pick, ToolDef};

const ANKI_CONNECT_VERSION: u32 = 6;

pub(crate) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "store_media_file",
            description: "Store a base64-encoded file in the media folder (prefix the filename with an underscore to keep files not referenced by any card)",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "filename": {
                            "type": "string",
                            "description": "Name of the file to store"
                        },
                        "data": {
                            "type": "string",
                            "description": "Base64-encoded file contents"
                        }
                    },
                    "required": ["filename", "data"],
                    "additionalProperties": false
                })
            },
            action: "storeMediaFile",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["filename", "data"]),
        },
        ToolDef {
            name: "retrieve_media_file",
            description: "Retrieve the base64-encoded contents of a media file (false if it does not exist)",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "filename": {
                            "type": "string",
                            "description": "Name of the file to retrieve"
                        }
                    },
                    "required": ["filename"],
                    "additionalProperties": false
                })
            },
            action: "retrieveMediaFile",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["filename"]),
        },
        ToolDef {
            name: "delete_media_file",
            description: "Delete a file from the media folder",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "filename": {
                            "type": "string",
                            "description": "Name of the file to delete"
                        }
                    },
                    "required": ["filename"],
                    "additionalProperties": false
                })
            },
            action: "deleteMediaFile",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["filename"]),
        },
    ]
}
