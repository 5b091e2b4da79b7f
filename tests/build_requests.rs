use anki_mcp::error::AnkiMcpError;
use anki_mcp::tools::ToolRegistry;
use serde_json::json;

#[test]
fn version_pins_action_and_version_with_no_params() {
    let registry = ToolRegistry::new();
    let request = registry.build_request("version", &json!({})).unwrap();

    assert_eq!(request.action, "version");
    assert_eq!(request.version, 6);
    assert!(request.params.is_none());

    // No params key on the wire at all.
    let wire = serde_json::to_value(&request).unwrap();
    assert_eq!(wire, json!({"action": "version", "version": 6}));
}

#[test]
fn find_cards_maps_query_field_for_field() {
    let registry = ToolRegistry::new();
    let request = registry
        .build_request("find_cards", &json!({"query": "deck:Default"}))
        .unwrap();

    assert_eq!(request.action, "findCards");
    assert_eq!(request.version, 6);
    assert_eq!(request.params, Some(json!({"query": "deck:Default"})));
}

#[test]
fn change_deck_carries_cards_and_deck() {
    let registry = ToolRegistry::new();
    let request = registry
        .build_request(
            "change_deck",
            &json!({"cards": [1502098034045i64, 1502098034048i64], "deck": "Japanese"}),
        )
        .unwrap();

    assert_eq!(request.action, "changeDeck");
    assert_eq!(
        request.params,
        Some(json!({"cards": [1502098034045i64, 1502098034048i64], "deck": "Japanese"}))
    );
}

#[test]
fn update_note_fields_nests_arguments_under_note() {
    let registry = ToolRegistry::new();
    let request = registry
        .build_request("update_note_fields", &json!({"id": 5, "fields": {"Front": "x"}}))
        .unwrap();

    assert_eq!(request.action, "updateNoteFields");
    assert_eq!(request.version, 6);
    assert_eq!(
        request.params,
        Some(json!({"note": {"id": 5, "fields": {"Front": "x"}}}))
    );
}

#[test]
fn create_flashcard_hard_codes_the_note_shape() {
    let registry = ToolRegistry::new();
    let request = registry
        .build_request("create_flashcard", &json!({"front": "Q", "back": "A"}))
        .unwrap();

    assert_eq!(request.action, "addNote");
    assert_eq!(request.version, 6);
    assert_eq!(
        request.params,
        Some(json!({
            "note": {
                "deckName": "Default",
                "modelName": "Basic",
                "fields": { "Front": "Q", "Back": "A" },
                "tags": ["ai"],
                "options": { "allowDuplicate": false }
            }
        }))
    );
}

#[test]
fn add_note_nests_under_note_and_drops_absent_optionals() {
    let registry = ToolRegistry::new();
    let request = registry
        .build_request(
            "add_note",
            &json!({
                "deckName": "Default",
                "modelName": "Basic",
                "fields": { "Front": "front content", "Back": "back content" }
            }),
        )
        .unwrap();

    assert_eq!(request.action, "addNote");
    assert_eq!(
        request.params,
        Some(json!({
            "note": {
                "deckName": "Default",
                "modelName": "Basic",
                "fields": { "Front": "front content", "Back": "back content" }
            }
        }))
    );
}

#[test]
fn get_intervals_omits_complete_when_absent() {
    let registry = ToolRegistry::new();

    let request = registry
        .build_request("get_intervals", &json!({"cards": [1502098034045i64]}))
        .unwrap();
    assert_eq!(request.params, Some(json!({"cards": [1502098034045i64]})));

    let request = registry
        .build_request(
            "get_intervals",
            &json!({"cards": [1502098034045i64], "complete": true}),
        )
        .unwrap();
    assert_eq!(
        request.params,
        Some(json!({"cards": [1502098034045i64], "complete": true}))
    );
}

#[test]
fn clone_deck_config_id_omits_clone_from_when_absent() {
    let registry = ToolRegistry::new();

    let request = registry
        .build_request("clone_deck_config_id", &json!({"name": "Copy"}))
        .unwrap();
    assert_eq!(request.action, "cloneDeckConfigId");
    assert_eq!(request.params, Some(json!({"name": "Copy"})));

    let request = registry
        .build_request("clone_deck_config_id", &json!({"name": "Copy", "cloneFrom": 1}))
        .unwrap();
    assert_eq!(request.params, Some(json!({"name": "Copy", "cloneFrom": 1})));
}

#[test]
fn delete_decks_defaults_cards_too_to_false() {
    let registry = ToolRegistry::new();

    let request = registry
        .build_request("delete_decks", &json!({"decks": ["Japanese"]}))
        .unwrap();
    assert_eq!(request.action, "deleteDecks");
    assert_eq!(
        request.params,
        Some(json!({"decks": ["Japanese"], "cardsToo": false}))
    );

    let request = registry
        .build_request("delete_decks", &json!({"decks": ["Japanese"], "cardsToo": true}))
        .unwrap();
    assert_eq!(
        request.params,
        Some(json!({"decks": ["Japanese"], "cardsToo": true}))
    );
}

#[test]
fn multi_wraps_sub_actions_in_one_request() {
    let registry = ToolRegistry::new();
    let actions = json!([
        {"action": "version", "version": 6},
        {"action": "deckNames", "version": 6}
    ]);
    let request = registry
        .build_request("multi", &json!({"actions": actions}))
        .unwrap();

    assert_eq!(request.action, "multi");
    assert_eq!(request.version, 6);
    assert_eq!(request.params, Some(json!({"actions": actions})));
}

#[test]
fn wrong_argument_type_is_rejected() {
    let registry = ToolRegistry::new();
    let result = registry.build_request("suspend", &json!({"cards": ["not-a-number"]}));

    match result {
        Err(AnkiMcpError::InvalidArguments { tool, .. }) => assert_eq!(tool, "suspend"),
        other => panic!("expected InvalidArguments, got {:?}", other),
    }
}

#[test]
fn missing_required_argument_is_rejected() {
    let registry = ToolRegistry::new();
    let result = registry.build_request("find_cards", &json!({}));
    assert!(matches!(result, Err(AnkiMcpError::InvalidArguments { .. })));
}

#[test]
fn ease_outside_range_is_rejected() {
    let registry = ToolRegistry::new();
    let result = registry.build_request("gui_answer_card", &json!({"ease": 5}));
    assert!(matches!(result, Err(AnkiMcpError::InvalidArguments { .. })));

    let request = registry
        .build_request("gui_answer_card", &json!({"ease": 3}))
        .unwrap();
    assert_eq!(request.action, "guiAnswerCard");
    assert_eq!(request.params, Some(json!({"ease": 3})));
}

#[test]
fn unknown_tool_is_rejected() {
    let registry = ToolRegistry::new();
    let result = registry.build_request("no_such_tool", &json!({}));
    assert!(matches!(result, Err(AnkiMcpError::UnknownTool(_))));
}

#[test]
fn registry_exposes_the_full_surface() {
    let registry = ToolRegistry::new();
    assert_eq!(registry.len(), 49);

    for name in [
        "version",
        "multi",
        "gui_answer_card",
        "deck_names",
        "save_deck_config",
        "model_fields_on_templates",
        "create_flashcard",
        "add_notes",
        "are_due",
        "store_media_file",
    ] {
        assert!(registry.get(name).is_some(), "missing tool: {}", name);
    }
}
