use serde_json::{json, Map, Value};

use super::registry::{no_params, pick, ToolDef};

const ANKI_CONNECT_VERSION: u32 = 6;

// AnkiConnect treats a missing cardsToo as "move cards to the default deck",
// and the upstream API's documented default is false; send it explicitly.
fn build_delete_decks(arguments: &Value) -> Option<Value> {
    let mut params = Map::new();
    if let Some(decks) = arguments.get("decks") {
        params.insert("decks".to_string(), decks.clone());
    }
    params.insert(
        "cardsToo".to_string(),
        arguments.get("cardsToo").cloned().unwrap_or(Value::Bool(false)),
    );
    Some(Value::Object(params))
}

pub(crate) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "deck_names",
            description: "Get the complete list of deck names for the current user",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {},
                    "additionalProperties": false
                })
            },
            action: "deckNames",
            version: ANKI_CONNECT_VERSION,
            build_params: no_params,
        },
        ToolDef {
            name: "deck_names_and_ids",
            description: "Get the complete list of deck names and their respective IDs",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {},
                    "additionalProperties": false
                })
            },
            action: "deckNamesAndIds",
            version: ANKI_CONNECT_VERSION,
            build_params: no_params,
        },
        ToolDef {
            name: "get_decks",
            description: "Get the deck each of the given cards belongs to",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "cards": {
                            "type": "array",
                            "items": { "type": "number" },
                            "description": "Array of card IDs to get deck information for"
                        }
                    },
                    "required": ["cards"],
                    "additionalProperties": false
                })
            },
            action: "getDecks",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["cards"]),
        },
        ToolDef {
            name: "change_deck",
            description: "Move cards to a different deck, creating it if it doesn't exist yet",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "cards": {
                            "type": "array",
                            "items": { "type": "number" },
                            "description": "Array of card IDs to move"
                        },
                        "deck": {
                            "type": "string",
                            "description": "Name of the target deck"
                        }
                    },
                    "required": ["cards", "deck"],
                    "additionalProperties": false
                })
            },
            action: "changeDeck",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["cards", "deck"]),
        },
        ToolDef {
            name: "delete_decks",
            description: "Delete decks with the given names",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "decks": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Array of deck names to delete"
                        },
                        "cardsToo": {
                            "type": "boolean",
                            "description": "If true, cards within deleted decks are deleted too; otherwise they move to the default deck"
                        }
                    },
                    "required": ["decks"],
                    "additionalProperties": false
                })
            },
            action: "deleteDecks",
            version: ANKI_CONNECT_VERSION,
            build_params: build_delete_decks,
        },
        ToolDef {
            name: "get_deck_config",
            description: "Get the configuration group object for the given deck",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "deck": {
                            "type": "string",
                            "description": "Name of the deck to get configuration for"
                        }
                    },
                    "required": ["deck"],
                    "additionalProperties": false
                })
            },
            action: "getDeckConfig",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["deck"]),
        },
        ToolDef {
            name: "save_deck_config",
            description: "Save a deck configuration group",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "config": {
                            "type": "object",
                            "description": "Deck configuration object to save",
                            "properties": {
                                "lapse": {
                                    "type": "object",
                                    "properties": {
                                        "leechFails": { "type": "number" },
                                        "delays": { "type": "array", "items": { "type": "number" } },
                                        "minInt": { "type": "number" },
                                        "leechAction": { "type": "number" },
                                        "mult": { "type": "number" }
                                    },
                                    "required": ["leechFails", "delays", "minInt", "leechAction", "mult"]
                                },
                                "dyn": { "type": "boolean" },
                                "autoplay": { "type": "boolean" },
                                "mod": { "type": "number" },
                                "id": { "type": "number" },
                                "maxTaken": { "type": "number" },
                                "new": {
                                    "type": "object",
                                    "properties": {
                                        "bury": { "type": "boolean" },
                                        "order": { "type": "number" },
                                        "initialFactor": { "type": "number" },
                                        "perDay": { "type": "number" },
                                        "delays": { "type": "array", "items": { "type": "number" } },
                                        "separate": { "type": "boolean" },
                                        "ints": { "type": "array", "items": { "type": "number" } }
                                    },
                                    "required": ["bury", "order", "initialFactor", "perDay", "delays", "separate", "ints"]
                                },
                                "name": { "type": "string" },
                                "rev": {
                                    "type": "object",
                                    "properties": {
                                        "bury": { "type": "boolean" },
                                        "ivlFct": { "type": "number" },
                                        "ease4": { "type": "number" },
                                        "maxIvl": { "type": "number" },
                                        "perDay": { "type": "number" },
                                        "minSpace": { "type": "number" },
                                        "fuzz": { "type": "number" }
                                    },
                                    "required": ["bury", "ivlFct", "ease4", "maxIvl", "perDay", "minSpace", "fuzz"]
                                },
                                "timer": { "type": "number" },
                                "replayq": { "type": "boolean" },
                                "usn": { "type": "number" }
                            },
                            "required": [
                                "lapse", "dyn", "autoplay", "mod", "id", "maxTaken",
                                "new", "name", "rev", "timer", "replayq", "usn"
                            ]
                        }
                    },
                    "required": ["config"],
                    "additionalProperties": false
                })
            },
            action: "saveDeckConfig",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["config"]),
        },
        ToolDef {
            name: "set_deck_config_id",
            description: "Change the configuration group for the given decks",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "decks": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Array of deck names to change configuration for"
                        },
                        "configId": {
                            "type": "number",
                            "description": "Configuration group ID to assign"
                        }
                    },
                    "required": ["decks", "configId"],
                    "additionalProperties": false
                })
            },
            action: "setDeckConfigId",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["decks", "configId"]),
        },
        ToolDef {
            name: "clone_deck_config_id",
            description: "Create a new configuration group, cloning from an existing one",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "Name for the new configuration group"
                        },
                        "cloneFrom": {
                            "type": "number",
                            "description": "ID of the configuration group to clone from (defaults to the default group)"
                        }
                    },
                    "required": ["name"],
                    "additionalProperties": false
                })
            },
            action: "cloneDeckConfigId",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["name", "cloneFrom"]),
        },
        ToolDef {
            name: "remove_deck_config_id",
            description: "Remove the configuration group with the given ID",
            input_schema: || {
                json!({
                    "type": "object",
                    "properties": {
                        "configId": {
                            "type": "number",
                            "description": "ID of the configuration group to remove"
                        }
                    },
                    "required": ["configId"],
                    "additionalProperties": false
                })
            },
            action: "removeDeckConfigId",
            version: ANKI_CONNECT_VERSION,
            build_params: |arguments| pick(arguments, &["configId"]),
        },
    ]
}
