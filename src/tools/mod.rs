mod cards;
mod decks;
mod gui;
mod handler;
mod media;
mod misc;
mod models;
mod notes;
mod registry;

pub use handler::AnkiToolHandler;
pub use registry::{ToolDef, ToolRegistry};
