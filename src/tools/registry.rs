use std::collections::HashMap;

use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

use crate::anki::types::ActionRequest;
use crate::error::{AnkiMcpError, Result};

use super::{cards, decks, gui, media, misc, models, notes};

/// One exposed tool: the declared argument schema plus the fixed remote
/// action it maps onto. `build_params` copies validated arguments into the
/// exact parameter shape AnkiConnect expects; field names and nesting are the
/// remote API's contract, not a local choice.
pub struct ToolDef {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: fn() -> Value,
    pub action: &'static str,
    pub version: u32,
    pub build_params: fn(&Value) -> Option<Value>,
}

pub struct ToolRegistry {
    tools: HashMap<&'static str, ToolDef>,
    // tools/list keeps registration order; the map alone would shuffle it.
    order: Vec<&'static str>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            tools: HashMap::new(),
            order: Vec::new(),
        };

        for def in misc::tools()
            .into_iter()
            .chain(gui::tools())
            .chain(decks::tools())
            .chain(models::tools())
            .chain(notes::tools())
            .chain(cards::tools())
            .chain(media::tools())
        {
            registry.insert(def);
        }

        registry
    }

    fn insert(&mut self, def: ToolDef) {
        self.order.push(def.name);
        self.tools.insert(def.name, def);
    }

    pub fn get(&self, name: &str) -> Option<&ToolDef> {
        self.tools.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolDef> {
        self.order.iter().filter_map(|name| self.tools.get(name))
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Validate arguments against the tool's declared schema. Rejection
    /// happens here, before any request is built or sent.
    pub fn validate_arguments(&self, def: &ToolDef, arguments: &Value) -> Result<()> {
        let schema = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&(def.input_schema)())
            .map_err(|e| {
                AnkiMcpError::Other(format!("Invalid schema for tool '{}': {}", def.name, e))
            })?;

        if let Err(errors) = schema.validate(arguments) {
            let error_messages: Vec<String> = errors
                .map(|e| format!("{}: {}", e.instance_path, e))
                .collect();
            return Err(AnkiMcpError::InvalidArguments {
                tool: def.name.to_string(),
                message: error_messages.join("; "),
            });
        }

        Ok(())
    }

    /// Validate and map one tool invocation onto its action request. This is
    /// the whole translation: fixed action name, fixed version, params built
    /// by the tool's own mapping function.
    pub fn build_request(&self, name: &str, arguments: &Value) -> Result<ActionRequest> {
        let def = self
            .get(name)
            .ok_or_else(|| AnkiMcpError::UnknownTool(name.to_string()))?;

        self.validate_arguments(def, arguments)?;

        Ok(ActionRequest {
            action: def.action.to_string(),
            version: def.version,
            params: (def.build_params)(arguments),
        })
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy the listed argument fields into a params object, 1:1 by name,
/// skipping fields the caller omitted.
pub(crate) fn pick(arguments: &Value, keys: &[&str]) -> Option<Value> {
    let mut params = serde_json::Map::new();
    for key in keys {
        if let Some(value) = arguments.get(*key) {
            params.insert((*key).to_string(), value.clone());
        }
    }
    Some(Value::Object(params))
}

pub(crate) fn no_params(_arguments: &Value) -> Option<Value> {
    None
}
