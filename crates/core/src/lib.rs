//! Core piece-flow logic - pure, deterministic, and testable.
//!
//! This crate contains the containers, the generator and the session rules.
//! It has zero dependencies on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical sessions
//! - **Testable**: Unit tests for every container invariant
//! - **Portable**: Can run headless or behind any front end
//!
//! # Module Structure
//!
//! - [`queue`]: fixed-capacity FIFO ring buffer for the next-piece queue
//! - [`stack`]: fixed-capacity LIFO buffer for the reserve
//! - [`factory`]: piece generation with injected kind selection
//! - [`rng`]: small deterministic LCG driving the default kind source
//! - [`session`]: the controller orchestrating all transfers

pub mod factory;
pub mod queue;
pub mod rng;
pub mod session;
pub mod stack;

pub use pieceflow_types as types;

// Re-export commonly used types for convenience
pub use factory::{KindSource, PieceFactory, ScriptedKinds, UniformKinds};
pub use queue::BoundedQueue;
pub use rng::SimpleRng;
pub use session::{FlowEvent, NextQueue, ReserveStack, Session};
pub use stack::BoundedStack;
