//! Piece generation with fresh, strictly increasing ids.
//!
//! Kind selection is an injected capability: the default draws uniformly
//! from the four kinds via [`SimpleRng`], while scripted sources replay a
//! fixed sequence for deterministic sessions.

use pieceflow_types::{Piece, PieceId, PieceKind};

use crate::rng::SimpleRng;

/// Source of piece kinds for the factory.
pub trait KindSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniform choice over the four kinds.
#[derive(Debug, Clone)]
pub struct UniformKinds {
    rng: SimpleRng,
}

impl UniformKinds {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl KindSource for UniformKinds {
    fn next_kind(&mut self) -> PieceKind {
        let index = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[index]
    }
}

/// Replays a fixed sequence of kinds, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedKinds {
    kinds: Vec<PieceKind>,
    cursor: usize,
}

impl ScriptedKinds {
    /// The sequence must not be empty.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "scripted kind sequence must not be empty");
        Self { kinds, cursor: 0 }
    }
}

impl KindSource for ScriptedKinds {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.cursor % self.kinds.len()];
        self.cursor += 1;
        kind
    }
}

/// Generates pieces from a kind source plus a monotonic id counter.
///
/// The counter starts at 0, advances by exactly one per generation and is
/// never reset within a session, so ids are unique and strictly increasing.
#[derive(Debug, Clone)]
pub struct PieceFactory<S> {
    source: S,
    next_id: PieceId,
}

impl PieceFactory<UniformKinds> {
    pub fn from_seed(seed: u32) -> Self {
        Self::new(UniformKinds::new(seed))
    }
}

impl<S: KindSource> PieceFactory<S> {
    pub fn new(source: S) -> Self {
        Self { source, next_id: 0 }
    }

    /// Id the next generated piece will carry.
    pub fn peek_next_id(&self) -> PieceId {
        self.next_id
    }

    /// Produce a new piece with a fresh id.
    pub fn generate(&mut self) -> Piece {
        let id = self.next_id;
        self.next_id += 1;
        Piece::new(self.source.next_kind(), id)
    }
}
