//! Event System
//!
//! The simulation reports what happened during a frame as events. The front
//! end drains them after `update` (for logging); no gameplay depends on them.

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Something noteworthy that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A basket started dropping toward `target_y`
    BasketSpawned { x: f32, target_y: f32 },
    /// The descending basket reached its depth and became clickable
    BasketLanded { x: f32, y: f32 },
    /// Player opened a basket; a tier-0 food appeared at (x, y)
    BasketOpened { x: f32, y: f32 },
    /// Player picked up a food item
    FoodPicked { tier: usize },
    /// Two foods merged into one of `tier`
    FoodMerged { tier: usize },
    /// A merge produced a tier never seen before this game
    NewTierReached { tier: usize },
}
