//! Core types shared across the application.
//! This module contains pure data types with no I/O dependencies.

use thiserror::Error;

/// Container capacities.
pub const QUEUE_CAPACITY: usize = 5;
pub const STACK_CAPACITY: usize = 3;

/// Number of pieces exchanged by a multi-swap (fixed, matches stack capacity).
pub const SWAP_RUN_LEN: usize = 3;

/// Unique, strictly increasing piece identifier.
pub type PieceId = u32;

/// Piece kinds available to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// All kinds, in generation-table order.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Display letter for the kind.
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

/// A single game piece. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: PieceId,
}

impl Piece {
    pub fn new(kind: PieceKind, id: PieceId) -> Self {
        Self { kind, id }
    }
}

/// User-visible session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Play,
    Reserve,
    UseReserved,
    SwapTop,
    SwapRun,
}

impl SessionAction {
    /// Convert to string (for status lines and tests).
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionAction::Play => "play",
            SessionAction::Reserve => "reserve",
            SessionAction::UseReserved => "useReserved",
            SessionAction::SwapTop => "swapTop",
            SessionAction::SwapRun => "swapRun",
        }
    }
}

/// Failure taxonomy for session operations.
///
/// All failures are local and non-fatal; the interactive loop prints the
/// message and continues without retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("next queue is empty")]
    QueueEmpty,
    #[error("next queue is full")]
    QueueFull,
    #[error("reserve stack is empty")]
    StackEmpty,
    #[error("reserve stack is full")]
    StackFull,
    #[error("cannot swap while the queue or the stack is empty")]
    SwapBlocked,
    #[error("swap needs at least {needed} pieces in both the queue and the stack")]
    InsufficientPieces { needed: usize },
}
