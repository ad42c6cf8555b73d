use log::trace;

use blockfall_core::{GameSnapshot, GameState, PieceSource, SimpleRng, Transition};
use blockfall_types::Intent;

/// Handle returned by [`Controller::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&GameSnapshot, Transition)>;

/// Explicit state container: one game, many read-only observers.
///
/// Intents go through [`Controller::dispatch`] one at a time. After each one
/// every subscriber is called, in subscription order, with the snapshot taken
/// after the transition and the transition itself.
pub struct Controller<S = SimpleRng> {
    state: GameState<S>,
    snapshot: GameSnapshot,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl Controller<SimpleRng> {
    pub fn new(seed: u32) -> Self {
        Self::with_state(GameState::new(seed))
    }
}

impl<S: PieceSource> Controller<S> {
    pub fn with_state(state: GameState<S>) -> Self {
        let snapshot = state.snapshot();
        Self {
            state,
            snapshot,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &GameState<S> {
        &self.state
    }

    /// Snapshot taken after the most recent transition
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Apply `intent`, refresh the snapshot, and notify subscribers
    pub fn dispatch(&mut self, intent: Intent) -> Transition {
        let transition = self.state.apply(intent);
        if transition.changed_state() {
            self.state.snapshot_into(&mut self.snapshot);
        }

        trace!(
            "{} -> {:?}, notifying {} subscriber(s)",
            intent.as_str(),
            transition,
            self.subscribers.len()
        );
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.snapshot, transition);
        }
        transition
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&GameSnapshot, Transition) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Take and clear the last lock event from the owned state
    pub fn take_last_event(&mut self) -> Option<blockfall_core::LockEvent> {
        self.state.take_last_event()
    }
}
