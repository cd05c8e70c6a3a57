use std::collections::VecDeque;

use crate::config::DropPolicy;
use crate::error::PushOutcome;

/// A single buffered `(timestamp, payload)` pair. Destroyed either by being
/// emitted in a [`SyncGroup`](crate::SyncGroup) or by being dropped under an
/// overflow/advance policy.
pub(crate) struct BufferedMessage<T> {
    pub(crate) timestamp: u64,
    pub(crate) payload: T,
}

/// Bounded, time-ordered buffer backing one topic.
///
/// Invariants maintained for the lifetime of the buffer:
/// - `len() <= capacity`
/// - timestamps are non-decreasing front to back
///
/// Backed by a pre-sized [`VecDeque`] rather than the const-generic ring
/// buffer a lock-free SPSC channel would use, because `capacity` is a
/// runtime [`Config`](crate::Config) value here, not a compile-time constant
/// — there is exactly one writer and one reader (both the owning
/// [`Synchronizer`](crate::Synchronizer)), so none of the atomic
/// producer/consumer cursor machinery a cross-thread channel needs applies.
pub(crate) struct StreamBuffer<T> {
    topic: String,
    capacity: usize,
    drop_policy: DropPolicy,
    messages: VecDeque<BufferedMessage<T>>,
}

impl<T> StreamBuffer<T> {
    pub(crate) fn new(topic: String, capacity: usize, drop_policy: DropPolicy) -> Self {
        StreamBuffer {
            topic,
            capacity,
            drop_policy,
            messages: VecDeque::with_capacity(capacity),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.messages.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub(crate) fn front_timestamp(&self) -> Option<u64> {
        self.messages.front().map(|m| m.timestamp)
    }

    /// Removes and returns the oldest buffered message, if any.
    pub(crate) fn pop_front(&mut self) -> Option<BufferedMessage<T>> {
        self.messages.pop_front()
    }

    /// Pushes a new message, applying the capacity/overflow/ordering
    /// contract in one step.
    ///
    /// Stable sorted insertion (tie-broken by arrival order) is applied
    /// unconditionally, not just on the "late arrival" path: an in-order
    /// push is simply the case where the sorted insertion point happens to
    /// be the back of the buffer, so there is no separate fast path to keep
    /// in sync with the general one.
    pub(crate) fn push(&mut self, timestamp: u64, payload: T) -> PushOutcome {
        if self.messages.len() >= self.capacity {
            match self.drop_policy {
                DropPolicy::RejectNew => {
                    tracing::debug!(
                        topic = %self.topic,
                        rejected_timestamp = timestamp,
                        "push rejected: buffer full under RejectNew"
                    );
                    return PushOutcome::Rejected;
                }
                DropPolicy::DropOldest => {
                    if let Some(evicted) = self.messages.pop_front() {
                        tracing::debug!(
                            topic = %self.topic,
                            evicted_timestamp = evicted.timestamp,
                            "evicted oldest message to admit new push under DropOldest"
                        );
                    }
                }
            }
        }

        let insert_at = self.messages.partition_point(|m| m.timestamp <= timestamp);
        self.messages.insert(insert_at, BufferedMessage { timestamp, payload });
        PushOutcome::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(capacity: usize, policy: DropPolicy) -> StreamBuffer<i32> {
        StreamBuffer::new("t".to_string(), capacity, policy)
    }

    #[test]
    fn push_appends_in_order() {
        let mut b = buf(4, DropPolicy::RejectNew);
        assert_eq!(b.push(1, 10), PushOutcome::Accepted);
        assert_eq!(b.push(2, 20), PushOutcome::Accepted);
        assert_eq!(b.front_timestamp(), Some(1));
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn reject_new_keeps_existing_data() {
        let mut b = buf(2, DropPolicy::RejectNew);
        assert_eq!(b.push(1, 10), PushOutcome::Accepted);
        assert_eq!(b.push(2, 20), PushOutcome::Accepted);
        assert_eq!(b.push(3, 30), PushOutcome::Rejected);
        assert_eq!(b.len(), 2);
        assert_eq!(b.pop_front().unwrap().timestamp, 1);
        assert_eq!(b.pop_front().unwrap().timestamp, 2);
    }

    #[test]
    fn drop_oldest_always_accepts() {
        let mut b = buf(2, DropPolicy::DropOldest);
        assert_eq!(b.push(1, 10), PushOutcome::Accepted);
        assert_eq!(b.push(2, 20), PushOutcome::Accepted);
        assert_eq!(b.push(3, 30), PushOutcome::Accepted);
        assert_eq!(b.len(), 2);
        assert_eq!(b.pop_front().unwrap().timestamp, 2);
        assert_eq!(b.pop_front().unwrap().timestamp, 3);
    }

    #[test]
    fn late_arrival_is_inserted_sorted() {
        let mut b = buf(4, DropPolicy::RejectNew);
        b.push(10, 1);
        b.push(20, 2);
        b.push(15, 3); // late, but still fits before 20
        let ts: Vec<u64> = std::iter::from_fn(|| b.pop_front().map(|m| m.timestamp)).collect();
        assert_eq!(ts, vec![10, 15, 20]);
    }

    #[test]
    fn equal_timestamps_preserve_arrival_order() {
        let mut b = buf(4, DropPolicy::RejectNew);
        b.push(5, 1);
        b.push(5, 2);
        let first = b.pop_front().unwrap();
        let second = b.pop_front().unwrap();
        assert_eq!((first.timestamp, first.payload), (5, 1));
        assert_eq!((second.timestamp, second.payload), (5, 2));
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut b = buf(3, DropPolicy::DropOldest);
        for i in 0..10u64 {
            b.push(i, i as i32);
            assert!(b.len() <= 3);
        }
    }
}
