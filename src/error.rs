use std::fmt;

#[derive(Debug)]
pub enum AnkiMcpError {
    InvalidArguments { tool: String, message: String },
    UnknownTool(String),
    NetworkError(reqwest::Error),
    JsonError(serde_json::Error),
    IoError(std::io::Error),
    Other(String),
}

impl fmt::Display for AnkiMcpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnkiMcpError::InvalidArguments { tool, message } => {
                write!(f, "Tool '{}' argument validation failed: {}", tool, message)
            }
            AnkiMcpError::UnknownTool(name) => write!(f, "Tool '{}' not found", name),
            AnkiMcpError::NetworkError(e) => write!(f, "Network error: {}", e),
            AnkiMcpError::JsonError(e) => write!(f, "JSON error: {}", e),
            AnkiMcpError::IoError(e) => write!(f, "IO error: {}", e),
            AnkiMcpError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AnkiMcpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnkiMcpError::NetworkError(e) => Some(e),
            AnkiMcpError::JsonError(e) => Some(e),
            AnkiMcpError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AnkiMcpError {
    fn from(err: reqwest::Error) -> Self {
        AnkiMcpError::NetworkError(err)
    }
}

impl From<serde_json::Error> for AnkiMcpError {
    fn from(err: serde_json::Error) -> Self {
        AnkiMcpError::JsonError(err)
    }
}

impl From<std::io::Error> for AnkiMcpError {
    fn from(err: std::io::Error) -> Self {
        AnkiMcpError::IoError(err)
    }
}

impl From<String> for AnkiMcpError {
    fn from(msg: String) -> Self {
        AnkiMcpError::Other(msg)
    }
}

impl From<&str> for AnkiMcpError {
    fn from(msg: &str) -> Self {
        AnkiMcpError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnkiMcpError>;
