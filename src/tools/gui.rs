use serde_json::json;

use super::registry::{no_params, pick, ToolDef};

const ANKI_CONNECT_VERSION: u32 = 6;

fn empty_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {},
        "additionalProperties": false
    })
}

pub(crate) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "gui_current_card",
            description: "Get information about the card currently shown in the review window",
            input_schema: empty_schema,
            action: "guiCurrentCard",
            version: ANKI_CONNECT_VERSION,
            build_params: no_params,
        },
        ToolDef {
            name: "gui_start_card_timer",
            description: "Start the card timer for the current card",
            input_schema: empty_schema,
            action: "guiStartCardTimer",
            version: ANKI_CONNECT_VERSION,
            build_params: no_params,
        },
        ToolDef {
            name: "gui_show_question",
            description: "Show the question side of the current card",
            input_schema: empty_schema,
            action: "guiShowQuestion",
            version: ANKI_CONNECT_VERSION,
            build_params: no_params,
        },
        ToolDef {
            name: "gui_show_answer",
            description: "Show the answer side of the current card",
            input_schema: empty_schema,
            action: "guiShowAnswer",
            version: ANKI_CONNECT_VERSION,
            build_params: no_params,
        },
        ToolDef {
            name: "gui_answer_card",
            description: "Answer the current card",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "ease": {
                            "type": "number",
                            "minimum": 1,
                            "maximum": 4,
                            "description": "Answer ease: 1=Again, 2=Hard, 3=Good, 4=Easy"
                        }
                    },
                    "required": ["ease"],
                    "additionalProperties": false
                })
            },
            action: "guiAnswerCard",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["ease"]),
        },
        ToolDef {
            name: "gui_deck_overview",
            description: "Open the deck overview screen for a deck",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "Name of the deck to open"
                        }
                    },
                    "required": ["name"],
                    "additionalProperties": false
                })
            },
            action: "guiDeckOverview",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["name"]),
        },
        ToolDef {
            name: "gui_deck_browser",
            description: "Open the deck browser screen",
            input_schema: empty_schema,
            action: "guiDeckBrowser",
            version: ANKI_CONNECT_VERSION,
            build_params: no_params,
        },
        ToolDef {
            name: "gui_deck_review",
            description: "Start reviewing a deck",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "Name of the deck to review"
                        }
                    },
                    "required": ["name"],
                    "additionalProperties": false
                })
            },
            action: "guiDeckReview",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["name"]),
        },
        ToolDef {
            name: "gui_browse",
            description: "Open the card browser with a search query",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Search query for browsing cards"
                        }
                    },
                    "required": ["query"],
                    "additionalProperties": false
                })
            },
            action: "guiBrowse",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["query"]),
        },
        ToolDef {
            name: "gui_add_cards",
            description: "Open the add cards dialog",
            input_schema: empty_schema,
            action: "guiAddCards",
            version: ANKI_CONNECT_VERSION,
            build_params: no_params,
        },
        ToolDef {
            name: "gui_exit_anki",
            description: "Exit the Anki application",
            input_schema: empty_schema,
            action: "guiExitAnki",
            version: ANKI_CONNECT_VERSION,
            build_params: no_params,
        },
    ]
}
