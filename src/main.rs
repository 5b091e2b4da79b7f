use std::process;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use anki_mcp::anki::AnkiClient;
use anki_mcp::config::Config;
use anki_mcp::mcp::jsonrpc::{JsonRpcError, JsonRpcId, JsonRpcMessage, JsonRpcResponse};
use anki_mcp::mcp::{McpConnection, McpServerConfig};
use anki_mcp::tools::{AnkiToolHandler, ToolRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    let client = match AnkiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if config.verbose {
        eprintln!("[anki-mcp] forwarding to {}", client.endpoint());
    }

    let handler = AnkiToolHandler::new(ToolRegistry::new(), Arc::new(client));
    let server_config = McpServerConfig::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    let mut connection = McpConnection::new(server_config, Arc::new(handler));

    run(&mut connection, config.verbose)
        .await
        .context("stdio server loop failed")
}

/// Newline-delimited JSON-RPC over stdin/stdout. Diagnostics go to stderr;
/// stdout carries only protocol frames.
async fn run(connection: &mut McpConnection, verbose: bool) -> std::io::Result<()> {
    let stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(stdin).lines();

    if verbose {
        eprintln!("[anki-mcp] stdio server started");
    }

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<JsonRpcMessage>(line) {
            Ok(message) => connection.handle_message(message).await,
            Err(e) => Some(JsonRpcResponse::err(
                JsonRpcId::Null,
                JsonRpcError {
                    code: -32700,
                    message: format!("parse error: {}", e),
                    data: None,
                },
            )),
        };

        if let Some(response) = reply {
            let mut frame = serde_json::to_vec(&response)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            frame.push(b'\n');
            stdout.write_all(&frame).await?;
            stdout.flush().await?;
        }
    }

    if verbose {
        eprintln!("[anki-mcp] stdio server stopped");
    }

    Ok(())
}
