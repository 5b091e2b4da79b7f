use serde_json::{json, Value};

use super::registry::{pick, ToolDef};

const ANKI_CONNECT_VERSION: u32 = 6;

fn cards_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "cards": {
                "type": "array",
                "items": { "type": "number" },
                "description": description
            }
        },
        "required": ["cards"],
        "additionalProperties": false
    })
}

pub(crate) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "suspend",
            description: "Suspend cards by card ID",
            input_schema: || cards_schema("Array of card IDs to suspend"),
            action: "suspend",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["cards"]),
        },
        ToolDef {
            name: "unsuspend",
            description: "Unsuspend cards by card ID",
            input_schema: || cards_schema("Array of card IDs to unsuspend"),
            action: "unsuspend",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["cards"]),
        },
        ToolDef {
            name: "are_suspended",
            description: "Check whether each of the given cards is suspended",
            input_schema: || cards_schema("Array of card IDs to check if suspended"),
            action: "areSuspended",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["cards"]),
        },
        ToolDef {
            name: "are_due",
            description: "Check whether each of the given cards is due",
            input_schema: || cards_schema("Array of card IDs to check if due"),
            action: "areDue",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["cards"]),
        },
        ToolDef {
            name: "get_intervals",
            description: "Get review intervals for the given cards (negative values are seconds, positive are days)",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "cards": {
                            "type": "array",
                            "items": { "type": "number" },
                            "description": "Array of card IDs to get intervals for"
                        },
                        "complete": {
                            "type": "boolean",
                            "description": "If true, returns all intervals; if false, returns only the most recent interval"
                        }
                    },
                    "required": ["cards"],
                    "additionalProperties": false
                })
            },
            action: "getIntervals",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["cards", "complete"]),
        },
        ToolDef {
            name: "find_cards",
            description: "Find card IDs for a search query (same syntax as the Anki browser)",
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
            action: "findCards",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["query"]),
        },
        ToolDef {
            name: "cards_to_notes",
            description: "Get the note IDs behind the given card IDs (each note listed once)",
            input_schema: || cards_schema("Array of card IDs to convert to note IDs"),
            action: "cardsToNotes",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["cards"]),
        },
        ToolDef {
            name: "cards_info",
            description: "Get fields, sides, deck, ease and interval for each of the given cards",
            input_schema: || cards_schema("Array of card IDs to get detailed information for"),
            action: "cardsInfo",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["cards"]),
        },
    ]
}
