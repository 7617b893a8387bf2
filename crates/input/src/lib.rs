//! Key mapping for the interactive menu.

pub mod map;

pub use map::{handle_key_event, should_quit};
pub use pieceflow_types as types;
