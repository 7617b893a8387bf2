//! Session controller over the next queue and the reserve stack.
//!
//! The session is the only writer of the two containers and the id counter.
//! Every operation is total: it either returns a [`FlowEvent`] describing
//! the mutation or a [`FlowError`] leaving both containers untouched.

use std::mem;

use pieceflow_types::{
    FlowError, Piece, SessionAction, QUEUE_CAPACITY, STACK_CAPACITY, SWAP_RUN_LEN,
};

use crate::factory::{KindSource, PieceFactory, UniformKinds};
use crate::queue::BoundedQueue;
use crate::stack::BoundedStack;

pub type NextQueue = BoundedQueue<Piece, QUEUE_CAPACITY>;
pub type ReserveStack = BoundedStack<Piece, STACK_CAPACITY>;

/// Successful operation outcome, reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    Played(Piece),
    Reserved(Piece),
    Used(Piece),
    SwappedTop,
    SwappedRun(usize),
}

#[derive(Debug, Clone)]
pub struct Session<S = UniformKinds> {
    queue: NextQueue,
    stack: ReserveStack,
    factory: PieceFactory<S>,
}

impl Session<UniformKinds> {
    /// New session with a uniform kind source. Same seed, same game.
    pub fn new(seed: u32) -> Self {
        Self::with_source(UniformKinds::new(seed))
    }
}

impl<S: KindSource> Session<S> {
    /// New session over an arbitrary kind source. The queue starts filled
    /// to capacity with freshly generated pieces.
    pub fn with_source(source: S) -> Self {
        let mut session = Self {
            queue: NextQueue::new(),
            stack: ReserveStack::new(),
            factory: PieceFactory::new(source),
        };
        while !session.queue.is_full() {
            session.replenish();
        }
        session
    }

    pub fn queue(&self) -> &NextQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    /// Dispatch a user-selected operation.
    pub fn apply(&mut self, action: SessionAction) -> Result<FlowEvent, FlowError> {
        match action {
            SessionAction::Play => self.play(),
            SessionAction::Reserve => self.reserve(),
            SessionAction::UseReserved => self.use_reserved(),
            SessionAction::SwapTop => self.swap_top(),
            SessionAction::SwapRun => self.swap_run(),
        }
    }

    /// Consume the queue head, then top the queue back up.
    pub fn play(&mut self) -> Result<FlowEvent, FlowError> {
        let piece = self.queue.dequeue().ok_or(FlowError::QueueEmpty)?;
        self.replenish();
        Ok(FlowEvent::Played(piece))
    }

    /// Move the queue head onto the reserve stack, then top the queue up.
    /// Fails without touching either container when the queue is empty or
    /// the stack is full.
    pub fn reserve(&mut self) -> Result<FlowEvent, FlowError> {
        if self.queue.is_empty() {
            return Err(FlowError::QueueEmpty);
        }
        if self.stack.is_full() {
            return Err(FlowError::StackFull);
        }
        let piece = self.queue.dequeue().ok_or(FlowError::QueueEmpty)?;
        self.stack.push(piece).map_err(|_| FlowError::StackFull)?;
        self.replenish();
        Ok(FlowEvent::Reserved(piece))
    }

    /// Consume the top of the reserve stack. The stack is not refilled.
    pub fn use_reserved(&mut self) -> Result<FlowEvent, FlowError> {
        let piece = self.stack.pop().ok_or(FlowError::StackEmpty)?;
        Ok(FlowEvent::Used(piece))
    }

    /// Exchange the queue head with the stack top in place. No counts or
    /// ids change.
    pub fn swap_top(&mut self) -> Result<FlowEvent, FlowError> {
        let (Some(front), Some(top)) = (self.queue.get_mut(0), self.stack.get_mut_from_top(0))
        else {
            return Err(FlowError::SwapBlocked);
        };
        mem::swap(front, top);
        Ok(FlowEvent::SwappedTop)
    }

    /// Pairwise exchange of the first [`SWAP_RUN_LEN`] queue pieces with the
    /// top [`SWAP_RUN_LEN`] reserved pieces: head+i swaps with the i-th piece
    /// below the stack top. All pairs swap or none do.
    pub fn swap_run(&mut self) -> Result<FlowEvent, FlowError> {
        if self.queue.len() < SWAP_RUN_LEN || self.stack.len() < SWAP_RUN_LEN {
            return Err(FlowError::InsufficientPieces {
                needed: SWAP_RUN_LEN,
            });
        }

        // The length guard above makes every pairing below resolve.
        for i in 0..SWAP_RUN_LEN {
            if let (Some(from_queue), Some(from_stack)) =
                (self.queue.get_mut(i), self.stack.get_mut_from_top(i))
            {
                mem::swap(from_queue, from_stack);
            }
        }
        Ok(FlowEvent::SwappedRun(SWAP_RUN_LEN))
    }

    /// Generate one piece and append it at the queue tail, if there is room.
    fn replenish(&mut self) {
        if self.queue.is_full() {
            return;
        }
        let piece = self.factory.generate();
        let _ = self.queue.enqueue(piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::ScriptedKinds;
    use pieceflow_types::PieceKind;

    fn scripted_session() -> Session<ScriptedKinds> {
        Session::with_source(ScriptedKinds::new(PieceKind::ALL))
    }

    fn queue_ids<S: KindSource>(session: &Session<S>) -> Vec<u32> {
        session.queue().iter().map(|p| p.id).collect()
    }

    fn stack_ids<S: KindSource>(session: &Session<S>) -> Vec<u32> {
        session.stack().iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_session_starts_with_full_queue() {
        let session = scripted_session();
        assert!(session.queue().is_full());
        assert!(session.stack().is_empty());
        assert_eq!(queue_ids(&session), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_play_consumes_head_and_replenishes() {
        let mut session = scripted_session();

        let event = session.play().unwrap();
        let FlowEvent::Played(piece) = event else {
            panic!("expected Played, got {event:?}");
        };
        assert_eq!(piece.id, 0);
        assert!(session.queue().is_full());
        assert_eq!(queue_ids(&session), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reserve_moves_head_to_stack_top() {
        let mut session = scripted_session();

        assert_eq!(session.reserve().unwrap(), FlowEvent::Reserved(Piece::new(PieceKind::I, 0)));
        assert_eq!(session.reserve().unwrap(), FlowEvent::Reserved(Piece::new(PieceKind::O, 1)));

        assert_eq!(stack_ids(&session), vec![1, 0]);
        assert!(session.queue().is_full());
        assert_eq!(queue_ids(&session), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_reserve_fails_when_stack_full() {
        let mut session = scripted_session();
        for _ in 0..3 {
            session.reserve().unwrap();
        }

        let before_queue = queue_ids(&session);
        let before_stack = stack_ids(&session);

        assert_eq!(session.reserve(), Err(FlowError::StackFull));
        assert_eq!(queue_ids(&session), before_queue);
        assert_eq!(stack_ids(&session), before_stack);
    }

    #[test]
    fn test_use_reserved_pops_without_refill() {
        let mut session = scripted_session();
        session.reserve().unwrap();

        let event = session.use_reserved().unwrap();
        assert_eq!(event, FlowEvent::Used(Piece::new(PieceKind::I, 0)));
        assert!(session.stack().is_empty());

        // Repeated failures leave state untouched.
        assert_eq!(session.use_reserved(), Err(FlowError::StackEmpty));
        assert_eq!(session.use_reserved(), Err(FlowError::StackEmpty));
        assert!(session.stack().is_empty());
        assert!(session.queue().is_full());
    }

    #[test]
    fn test_swap_top_blocked_on_empty_stack() {
        let mut session = scripted_session();
        assert_eq!(session.swap_top(), Err(FlowError::SwapBlocked));
    }

    #[test]
    fn test_swap_top_exchanges_in_place() {
        let mut session = scripted_session();
        session.reserve().unwrap();

        let front_before = *session.queue().peek_front().unwrap();
        let top_before = *session.stack().peek_top().unwrap();

        session.swap_top().unwrap();

        assert_eq!(*session.queue().peek_front().unwrap(), top_before);
        assert_eq!(*session.stack().peek_top().unwrap(), front_before);
        assert_eq!(session.queue().len(), 5);
        assert_eq!(session.stack().len(), 1);
    }

    #[test]
    fn test_swap_run_requires_enough_on_both_sides() {
        let mut session = scripted_session();
        session.reserve().unwrap();
        session.reserve().unwrap();

        let before_queue = queue_ids(&session);
        let before_stack = stack_ids(&session);

        assert_eq!(
            session.swap_run(),
            Err(FlowError::InsufficientPieces { needed: 3 })
        );
        assert_eq!(queue_ids(&session), before_queue);
        assert_eq!(stack_ids(&session), before_stack);
    }

    #[test]
    fn test_swap_run_pairs_head_with_top() {
        let mut session = scripted_session();
        for _ in 0..3 {
            session.reserve().unwrap();
        }
        // Queue: 3 4 5 6 7 (head -> tail), stack: 2 1 0 (top -> base).
        assert_eq!(queue_ids(&session), vec![3, 4, 5, 6, 7]);
        assert_eq!(stack_ids(&session), vec![2, 1, 0]);

        assert_eq!(session.swap_run().unwrap(), FlowEvent::SwappedRun(3));

        assert_eq!(queue_ids(&session), vec![2, 1, 0, 6, 7]);
        assert_eq!(stack_ids(&session), vec![3, 4, 5]);
    }
}
