//! Piece-flow trainer (workspace facade crate).
//!
//! This package keeps the `tui_pieceflow::{core,input,term,types}` public
//! API stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use pieceflow_core as core;
pub use pieceflow_input as input;
pub use pieceflow_term as term;
pub use pieceflow_types as types;
