use crate::buffer::StreamBuffer;
use crate::config::{Config, WindowSize};
use crate::error::{Error, PushOutcome};
use crate::group::SyncGroup;
use crate::matcher;
use crate::registry::TopicRegistry;

/// The composite synchronizer: a fixed [`TopicRegistry`], one bounded
/// [`StreamBuffer`] per topic, and the matching window from [`Config`].
///
/// A passive data structure — it owns no thread, performs no I/O, and never
/// inspects `T`. Concurrent external use must be serialized by the caller.
pub struct Synchronizer<T> {
    registry: TopicRegistry,
    buffers: Vec<StreamBuffer<T>>,
    window: WindowSize,
}

impl<T> Synchronizer<T> {
    /// Creates a synchronizer for the given topics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the topic list is empty, any
    /// name is empty or duplicated, or `config.buffer_size < 2`.
    pub fn new(
        topics: impl IntoIterator<Item = impl Into<String>>,
        config: Config,
    ) -> Result<Self, Error> {
        if config.buffer_size < 2 {
            return Err(Error::InvalidArgument(format!(
                "buffer_size must be >= 2, got {}",
                config.buffer_size
            )));
        }

        let names: Vec<String> = topics.into_iter().map(Into::into).collect();
        let registry = TopicRegistry::new(names)?;
        let buffers = registry
            .names()
            .iter()
            .map(|name| StreamBuffer::new(name.clone(), config.buffer_size, config.drop_policy))
            .collect();

        Ok(Synchronizer {
            registry,
            buffers,
            window: config.window,
        })
    }

    /// Pushes a message onto `topic`'s buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTopic`] if `topic` was not registered at
    /// construction.
    pub fn push(&mut self, topic: &str, timestamp_ns: u64, payload: T) -> Result<PushOutcome, Error> {
        let idx = self
            .registry
            .index_of(topic)
            .ok_or_else(|| Error::UnknownTopic(topic.to_string()))?;
        Ok(self.buffers[idx].push(timestamp_ns, payload))
    }

    /// Looks at the current head of every stream and either emits a
    /// synchronized group or performs a single advance step.
    ///
    /// Never fails: absence of a group is `None`, not an error.
    pub fn poll(&mut self) -> Option<SyncGroup<T>> {
        matcher::poll(&mut self.buffers, self.registry.names(), self.window)
    }

    /// Repeatedly polls, yielding every group reachable from the current
    /// state. Internal non-emitting advances are transparent to the
    /// caller — only emitted groups and the eventual exhaustion (some
    /// stream going empty) are observable here, matching the "maximal
    /// prefix of emittable groups" drain semantics.
    pub fn drain_ready(&mut self) -> DrainReady<'_, T> {
        DrainReady { sync: self }
    }

    /// `true` iff every stream has at least 2 buffered messages — a hint
    /// that at least one advance plus one emission is possible without
    /// further input.
    pub fn is_ready(&self) -> bool {
        self.buffers.iter().all(|b| b.len() >= 2)
    }

    /// `true` iff any stream has zero buffered messages (not "all empty" —
    /// a single starved stream is enough to make emission impossible).
    pub fn is_empty(&self) -> bool {
        self.buffers.iter().any(StreamBuffer::is_empty)
    }

    /// Buffer occupancy for one topic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTopic`] if `topic` was not registered.
    pub fn buffer_len(&self, topic: &str) -> Result<usize, Error> {
        let idx = self
            .registry
            .index_of(topic)
            .ok_or_else(|| Error::UnknownTopic(topic.to_string()))?;
        Ok(self.buffers[idx].len())
    }

    pub fn topic_count(&self) -> usize {
        self.registry.len()
    }

    pub fn topics(&self) -> &[String] {
        self.registry.names()
    }
}

/// Iterator returned by [`Synchronizer::drain_ready`].
pub struct DrainReady<'a, T> {
    sync: &'a mut Synchronizer<T>,
}

impl<T> Iterator for DrainReady<'_, T> {
    type Item = SyncGroup<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.sync.poll() {
                Some(group) => return Some(group),
                None if self.sync.is_empty() => return None,
                None => continue, // an advance happened; more progress may still be possible
            }
        }
    }
}
