use std::sync::{Arc, Mutex};

use anki_mcp::anki::{ActionRequest, ActionResponse, AnkiTransport};
use anki_mcp::error::{AnkiMcpError, Result};
use anki_mcp::mcp::server::ToolHandler;
use anki_mcp::mcp::types::{CallToolParams, ContentBlock};
use anki_mcp::tools::{AnkiToolHandler, ToolRegistry};
use async_trait::async_trait;
use serde_json::{json, Value};

/// Records every outbound action request and answers with a canned reply.
struct RecordingTransport {
    requests: Mutex<Vec<ActionRequest>>,
    reply: ActionResponse,
}

impl RecordingTransport {
    fn new(reply: ActionResponse) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply,
        })
    }

    fn recorded(&self) -> Vec<ActionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnkiTransport for RecordingTransport {
    async fn invoke(&self, request: &ActionRequest) -> Result<ActionResponse> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.reply.clone())
    }
}

/// Fails every call the way a refused connection would.
struct FailingTransport;

#[async_trait]
impl AnkiTransport for FailingTransport {
    async fn invoke(&self, _request: &ActionRequest) -> Result<ActionResponse> {
        Err(AnkiMcpError::Other("connection refused".to_string()))
    }
}

fn call(name: &str, arguments: Value) -> CallToolParams {
    CallToolParams {
        name: name.to_string(),
        arguments: Some(arguments),
    }
}

fn text_of(result: &anki_mcp::mcp::types::CallToolResult) -> &str {
    match &result.content[..] {
        [ContentBlock::Text { text }] => text,
        other => panic!("expected one text block, got {:?}", other),
    }
}

#[tokio::test]
async fn validation_failure_sends_nothing_over_the_wire() {
    let transport = RecordingTransport::new(ActionResponse {
        result: None,
        error: None,
    });
    let handler = AnkiToolHandler::new(ToolRegistry::new(), transport.clone());

    let result = handler
        .call_tool(call("suspend", json!({"cards": "not-an-array"})))
        .await;

    assert!(matches!(result, Err(AnkiMcpError::InvalidArguments { .. })));
    assert!(transport.recorded().is_empty());
}

#[tokio::test]
async fn unknown_tool_sends_nothing_over_the_wire() {
    let transport = RecordingTransport::new(ActionResponse {
        result: None,
        error: None,
    });
    let handler = AnkiToolHandler::new(ToolRegistry::new(), transport.clone());

    let result = handler.call_tool(call("no_such_tool", json!({}))).await;

    assert!(matches!(result, Err(AnkiMcpError::UnknownTool(_))));
    assert!(transport.recorded().is_empty());
}

#[tokio::test]
async fn multi_produces_exactly_one_outbound_request() {
    let transport = RecordingTransport::new(ActionResponse {
        result: Some(json!([{"result": 6, "error": null}, {"result": ["Default"], "error": null}])),
        error: None,
    });
    let handler = AnkiToolHandler::new(ToolRegistry::new(), transport.clone());

    handler
        .call_tool(call(
            "multi",
            json!({"actions": [
                {"action": "version", "version": 6},
                {"action": "deckNames", "version": 6}
            ]}),
        ))
        .await
        .unwrap();

    let recorded = transport.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].action, "multi");
    assert_eq!(recorded[0].version, 6);
    assert_eq!(
        recorded[0].params,
        Some(json!({"actions": [
            {"action": "version", "version": 6},
            {"action": "deckNames", "version": 6}
        ]}))
    );
}

#[tokio::test]
async fn remote_reported_error_relays_as_successful_output() {
    let transport = RecordingTransport::new(ActionResponse {
        result: Some(json!(false)),
        error: Some("deck was not found".to_string()),
    });
    let handler = AnkiToolHandler::new(ToolRegistry::new(), transport.clone());

    let result = handler
        .call_tool(call("change_deck", json!({"cards": [1], "deck": "Nope"})))
        .await
        .unwrap();

    assert!(result.is_error.is_none());
    assert_eq!(
        text_of(&result),
        r#"{"result":false,"error":"deck was not found"}"#
    );
}

#[tokio::test]
async fn relayed_reply_is_reproduced_verbatim() {
    let transport = RecordingTransport::new(ActionResponse {
        result: Some(json!([1, 2, 3])),
        error: None,
    });
    let handler = AnkiToolHandler::new(ToolRegistry::new(), transport.clone());

    let result = handler
        .call_tool(call("find_cards", json!({"query": "deck:Default"})))
        .await
        .unwrap();

    assert_eq!(text_of(&result), r#"{"result":[1,2,3],"error":null}"#);
}

#[tokio::test]
async fn transport_failure_propagates_as_an_error() {
    let handler = AnkiToolHandler::new(ToolRegistry::new(), Arc::new(FailingTransport));

    let result = handler
        .call_tool(call("version", json!({})))
        .await;

    match result {
        Err(e) => assert!(e.to_string().contains("connection refused")),
        Ok(reply) => panic!("expected an error, got {:?}", reply),
    }
}

#[tokio::test]
async fn list_tools_reports_every_descriptor_with_its_schema() {
    let transport = RecordingTransport::new(ActionResponse {
        result: None,
        error: None,
    });
    let handler = AnkiToolHandler::new(ToolRegistry::new(), transport);

    let listing = handler.list_tools();
    assert_eq!(listing.tools.len(), 49);

    let add_note = listing
        .tools
        .iter()
        .find(|t| t.name == "add_note")
        .expect("add_note listed");
    assert_eq!(add_note.input_schema["type"], "object");
    assert!(add_note.input_schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .any(|v| v == "deckName"));
}
