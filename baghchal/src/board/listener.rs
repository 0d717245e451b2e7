//! Notifications raised by the [`Board`][crate::board::Board] as its state changes.

use std::{cell::RefCell, rc::Rc};

use log::info;

use crate::board::Piece;

/// Receives board events. Callbacks run synchronously on the caller's thread before the
/// mutating call returns, and carry only the kind of piece involved.
///
/// Every method defaults to doing nothing, so implementors only override the events they
/// care about.
pub trait Listener {
    /// A piece stepped to a neighboring cell.
    fn after_step(&mut self, _piece: Piece) {}

    /// A piece jumped over and captured another.
    fn after_jump(&mut self, _piece: Piece) {}

    /// A piece was lifted off the board.
    fn after_picked(&mut self, _piece: Piece) {}

    /// The board was cleared.
    fn after_reset(&mut self) {}
}

/// Listener that ignores every event. Used by boards that were not given a listener and by
/// snapshots.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoListener;

impl Listener for NoListener {}

/// Listener that reports every event to the `log` facade.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogListener;

impl Listener for LogListener {
    fn after_step(&mut self, piece: Piece) {
        info!("{} stepped", piece);
    }

    fn after_jump(&mut self, piece: Piece) {
        info!("{} jumped", piece);
    }

    fn after_picked(&mut self, piece: Piece) {
        info!("{} picked up", piece);
    }

    fn after_reset(&mut self) {
        info!("board reset");
    }
}

/// A recorded board event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Event {
    Step(Piece),
    Jump(Piece),
    Picked(Piece),
    Reset,
}

/// Listener that records events into a shared buffer. Clones share the same buffer, so one
/// clone can be handed to the board while another is kept to read the events back.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Rc<RefCell<Vec<Event>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Remove and return the events recorded so far.
    pub fn drain(&self) -> Vec<Event> {
        self.events.borrow_mut().drain(..).collect()
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl Listener for EventLog {
    fn after_step(&mut self, piece: Piece) {
        self.push(Event::Step(piece));
    }

    fn after_jump(&mut self, piece: Piece) {
        self.push(Event::Jump(piece));
    }

    fn after_picked(&mut self, piece: Piece) {
        self.push(Event::Picked(piece));
    }

    fn after_reset(&mut self) {
        self.push(Event::Reset);
    }
}
