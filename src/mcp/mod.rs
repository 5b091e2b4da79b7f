pub mod jsonrpc;
pub mod server;
pub mod types;

pub use server::{McpConnection, McpServerConfig, ToolHandler};
