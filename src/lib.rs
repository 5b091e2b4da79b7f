//! Stdio MCP server exposing the AnkiConnect HTTP API as schema-validated
//! tools. Every tool is a thin 1:1 wrapper: validate arguments, build one
//! action request, perform one HTTP round trip, relay the raw reply.

pub mod anki;
pub mod config;
pub mod error;
pub mod mcp;
pub mod tools;
