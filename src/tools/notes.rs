use serde_json::{json, Value};

use super::registry::{pick, ToolDef};

const ANKI_CONNECT_VERSION: u32 = 6;

fn audio_schema() -> Value {
    json!({
        "type": "object",
        "description": "Optional audio attachment",
        "properties": {
            "url": { "type": "string" },
            "filename": { "type": "string" },
            "skipHash": { "type": "string" },
            "fields": { "type": "string" }
        },
        "required": ["url", "filename", "fields"],
        "additionalProperties": false
    })
}

fn note_item_schema(with_audio: bool) -> Value {
    let mut properties = json!({
        "deckName": {
            "type": "string",
            "description": "Name of the deck to add the note to"
        },
        "modelName": {
            "type": "string",
            "description": "Name of the note model/type"
        },
        "fields": {
            "type": "object",
            "additionalProperties": { "type": "string" },
            "description": "Object with field names as keys and field values as strings"
        },
        "tags": {
            "type": "array",
            "items": { "type": "string" },
            "description": "Array of tags to add to the note"
        }
    });
    if with_audio {
        properties["audio"] = audio_schema();
    }
    json!({
        "type": "object",
        "properties": properties,
        "required": ["deckName", "modelName", "fields"],
        "additionalProperties": false
    })
}

// The convenience shortcut: a plain front/back card in the Default deck,
// tagged "ai", duplicates suppressed. Everything except the two texts is
// pinned.
fn build_create_flashcard(arguments: &Value) -> Option<Value> {
    let front = arguments.get("front").cloned().unwrap_or_default();
    let back = arguments.get("back").cloned().unwrap_or_default();
    Some(json!({
        "note": {
            "deckName": "Default",
            "modelName": "Basic",
            "fields": {
                "Front": front,
                "Back": back
            },
            "tags": ["ai"],
            "options": {
                "allowDuplicate": false
            }
        }
    }))
}

// addNote wants the arguments nested one level down, under "note".
fn build_add_note(arguments: &Value) -> Option<Value> {
    pick(arguments, &["deckName", "modelName", "fields", "tags", "audio"])
        .map(|note| json!({ "note": note }))
}

// Same nesting for updateNoteFields.
fn build_update_note_fields(arguments: &Value) -> Option<Value> {
    pick(arguments, &["id", "fields"]).map(|note| json!({ "note": note }))
}

pub(crate) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "create_flashcard",
            description: "Create a simple front/back flashcard in the Default deck",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "front": {
                            "type": "string",
                            "description": "Front (question) text of the card"
                        },
                        "back": {
                            "type": "string",
                            "description": "Back (answer) text of the card"
                        }
                    },
                    "required": ["front", "back"],
                    "additionalProperties": false
                })
            },
            action: "addNote",
            version: ANKI_CONNECT_VERSION,
            build_params: build_create_flashcard,
        },
        ToolDef {
            name: "add_note",
            description: "Create a note in the given deck using the given model",
            input_schema: || note_item_schema(true),
            action: "addNote",
            version: ANKI_CONNECT_VERSION,
            build_params: build_add_note,
        },
        ToolDef {
            name: "add_notes",
            description: "Create multiple notes in a single call",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "notes": {
                            "type": "array",
                            "items": note_item_schema(true),
                            "description": "Array of note objects to create"
                        }
                    },
                    "required": ["notes"],
                    "additionalProperties": false
                })
            },
            action: "addNotes",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["notes"]),
        },
        ToolDef {
            name: "can_add_notes",
            description: "Check whether each of the given candidate notes could be created",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "notes": {
                            "type": "array",
                            "items": note_item_schema(false),
                            "description": "Array of note objects to check"
                        }
                    },
                    "required": ["notes"],
                    "additionalProperties": false
                })
            },
            action: "canAddNotes",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["notes"]),
        },
        ToolDef {
            name: "update_note_fields",
            description: "Modify the fields of an existing note",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "id": {
                            "type": "number",
                            "description": "ID of the note to update"
                        },
                        "fields": {
                            "type": "object",
                            "additionalProperties": { "type": "string" },
                            "description": "Object with field names as keys and new field values as strings"
                        }
                    },
                    "required": ["id", "fields"],
                    "additionalProperties": false
                })
            },
            action: "updateNoteFields",
            version: ANKI_CONNECT_VERSION,
            build_params: build_update_note_fields,
        },
        ToolDef {
            name: "add_tags",
            description: "Add tags to notes by note ID",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "notes": {
                            "type": "array",
                            "items": { "type": "number" },
                            "description": "Array of note IDs to add tags to"
                        },
                        "tags": {
                            "type": "string",
                            "description": "Space-separated string of tags to add"
                        }
                    },
                    "required": ["notes", "tags"],
                    "additionalProperties": false
                })
            },
            action: "addTags",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["notes", "tags"]),
        },
        ToolDef {
            name: "remove_tags",
            description: "Remove tags from notes by note ID",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "notes": {
                            "type": "array",
                            "items": { "type": "number" },
                            "description": "Array of note IDs to remove tags from"
                        },
                        "tags": {
                            "type": "string",
                            "description": "Space-separated string of tags to remove"
                        }
                    },
                    "required": ["notes", "tags"],
                    "additionalProperties": false
                })
            },
            action: "removeTags",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["notes", "tags"]),
        },
        ToolDef {
            name: "find_notes",
            description: "Find note IDs for a search query (same syntax as the Anki browser)",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Search query string (same syntax as Anki browser)"
                        }
                    },
                    "required": ["query"],
                    "additionalProperties": false
                })
            },
            action: "findNotes",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["query"]),
        },
        ToolDef {
            name: "notes_info",
            description: "Get fields, tags, model and cards for each of the given notes",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "notes": {
                            "type": "array",
                            "items": { "type": "number" },
                            "description": "Array of note IDs to get information for"
                        }
                    },
                    "required": ["notes"],
                    "additionalProperties": false
                })
            },
            action: "notesInfo",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["notes"]),
        },
    ]
}
