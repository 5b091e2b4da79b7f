pub mod client;
pub mod types;

pub use client::{AnkiClient, AnkiTransport};
pub use types::{ActionRequest, ActionResponse};
