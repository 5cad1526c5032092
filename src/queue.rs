//! Chronological event queue.
//!
//! Provides [`EventQueue`], a fixed-capacity list of pending light transitions
//! kept sorted by due time. It is neither a FIFO nor a LIFO: every event is
//! inserted at its chronological position, so the earliest event is always at
//! the front and peeking is a single index.

use crate::time::TimeInstant;
use crate::types::{LightId, QueueError};
use heapless::Vec;

/// A pending transition of one light at an absolute instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScheduledEvent<I> {
    /// The light to advance.
    pub light: LightId,

    /// When the light should advance.
    pub due: I,
}

impl<I> ScheduledEvent<I> {
    /// Creates a new scheduled event.
    #[inline]
    pub fn new(light: LightId, due: I) -> Self {
        Self { light, due }
    }
}

/// Capacity-bounded queue of scheduled events ordered by due time.
///
/// Insertion is a linear scan from the front. The queue is sized to the number
/// of lights, which keeps the scan short and the code easy to audit on a
/// constrained target.
///
/// Among events with equal due times the one inserted first stays ahead.
///
/// The storage always reserves `CAP` slots, but a queue can be limited to
/// fewer with [`with_capacity`](Self::with_capacity).
///
/// # Type Parameters
/// * `I` - Time instant type
/// * `CAP` - Maximum number of pending events
#[derive(Debug, Clone)]
pub struct EventQueue<I: TimeInstant, const CAP: usize> {
    events: Vec<ScheduledEvent<I>, CAP>,
    limit: usize,
}

impl<I: TimeInstant, const CAP: usize> EventQueue<I, CAP> {
    /// Creates an empty queue holding up to `CAP` events.
    pub const fn new() -> Self {
        Self::with_capacity(CAP)
    }

    /// Creates an empty queue holding up to `capacity` events.
    ///
    /// `capacity` is capped at `CAP`.
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::new(),
            limit: if capacity < CAP { capacity } else { CAP },
        }
    }

    /// Inserts an event at its chronological position.
    ///
    /// The event lands immediately before the first pending event that is due
    /// strictly later, behind any events due at the same instant.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if the queue is full. The queue is left
    /// unchanged.
    pub fn insert(&mut self, light: LightId, due: I) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::CapacityExceeded);
        }

        let position = self
            .events
            .iter()
            .position(|event| due < event.due)
            .unwrap_or(self.events.len());

        self.events
            .insert(position, ScheduledEvent::new(light, due))
            .map_err(|_| QueueError::CapacityExceeded)
    }

    /// Returns the earliest pending event without removing it.
    ///
    /// # Errors
    /// Returns `EmptyQueue` if nothing is pending.
    pub fn peek(&self) -> Result<&ScheduledEvent<I>, QueueError> {
        self.events.first().ok_or(QueueError::EmptyQueue)
    }

    /// Removes and returns the earliest pending event.
    ///
    /// # Errors
    /// Returns `EmptyQueue` if nothing is pending.
    pub fn pop(&mut self) -> Result<ScheduledEvent<I>, QueueError> {
        if self.events.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        Ok(self.events.remove(0))
    }

    /// Returns the number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no events are pending.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns true if another insert would fail.
    pub fn is_full(&self) -> bool {
        self.events.len() >= self.limit
    }

    /// Maximum number of pending events.
    pub const fn capacity(&self) -> usize {
        self.limit
    }

    /// Returns true if an event for the given light is pending.
    pub fn contains(&self, light: LightId) -> bool {
        self.events.iter().any(|event| event.light == light)
    }

    /// Pending events in due order, earliest first.
    pub fn iter(&self) -> core::slice::Iter<'_, ScheduledEvent<I>> {
        self.events.iter()
    }

    /// Pending events in due order as a slice.
    pub fn as_slice(&self) -> &[ScheduledEvent<I>] {
        &self.events
    }
}

impl<I: TimeInstant, const CAP: usize> Default for EventQueue<I, CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, I: TimeInstant, const CAP: usize> IntoIterator for &'a EventQueue<I, CAP> {
    type Item = &'a ScheduledEvent<I>;
    type IntoIter = core::slice::Iter<'a, ScheduledEvent<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::TimeDuration;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    struct TestDuration(u64);

    impl TimeDuration for TestDuration {
        fn as_millis(&self) -> u64 {
            self.0
        }

        fn from_millis(millis: u64) -> Self {
            TestDuration(millis)
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    struct TestInstant(u64);

    impl TimeInstant for TestInstant {
        type Duration = TestDuration;

        fn checked_add(self, duration: Self::Duration) -> Option<Self> {
            self.0.checked_add(duration.0).map(TestInstant)
        }
    }

    #[test]
    fn new_queue_is_empty() {
        let queue = EventQueue::<TestInstant, 4>::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 4);
        assert_eq!(queue.peek(), Err(QueueError::EmptyQueue));
    }

    #[test]
    fn insert_into_empty_queue_becomes_front() {
        let mut queue = EventQueue::<TestInstant, 4>::new();
        queue.insert(LightId(2), TestInstant(50)).unwrap();

        let front = queue.peek().unwrap();
        assert_eq!(front.light, LightId(2));
        assert_eq!(front.due, TestInstant(50));
    }

    #[test]
    fn later_event_goes_to_back() {
        let mut queue = EventQueue::<TestInstant, 4>::new();
        queue.insert(LightId(0), TestInstant(10)).unwrap();
        queue.insert(LightId(1), TestInstant(20)).unwrap();

        let lights: heapless::Vec<LightId, 4> = queue.iter().map(|e| e.light).collect();
        assert_eq!(lights.as_slice(), &[LightId(0), LightId(1)]);
    }

    #[test]
    fn full_queue_rejects_insert() {
        let mut queue = EventQueue::<TestInstant, 2>::new();
        queue.insert(LightId(0), TestInstant(10)).unwrap();
        queue.insert(LightId(1), TestInstant(20)).unwrap();
        assert!(queue.is_full());

        assert_eq!(
            queue.insert(LightId(2), TestInstant(5)),
            Err(QueueError::CapacityExceeded)
        );
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek().unwrap().light, LightId(0));
    }

    #[test]
    fn limited_queue_rejects_insert_below_storage_size() {
        let mut queue = EventQueue::<TestInstant, 4>::with_capacity(2);
        assert_eq!(queue.capacity(), 2);
        queue.insert(LightId(0), TestInstant(10)).unwrap();
        queue.insert(LightId(1), TestInstant(20)).unwrap();
        assert!(queue.is_full());

        assert_eq!(
            queue.insert(LightId(2), TestInstant(30)),
            Err(QueueError::CapacityExceeded)
        );
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn capacity_is_capped_at_storage_size() {
        let queue = EventQueue::<TestInstant, 4>::with_capacity(9);
        assert_eq!(queue.capacity(), 4);
    }
}
