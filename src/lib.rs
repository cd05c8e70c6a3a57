//! Multi-stream timestamp synchronizer.
//!
//! Given N named input streams ("topics") each producing timestamped
//! messages at independent, possibly jittery rates, a [`Synchronizer`]
//! emits tuples — one message per topic — whose timestamps all fall within
//! a configurable time window. This is the alignment step a sensor-fusion
//! pipeline needs before it can reason jointly about, say, a camera frame
//! and a lidar scan.
//!
//! ## How It Works
//!
//! Each topic gets its own bounded, time-ordered buffer. [`poll`](Synchronizer::poll)
//! looks only at the *head* of every buffer (the oldest unconsumed message
//! per topic):
//!
//! ```text
//! topic "a":  [ 10 | 14 | 19 | ... ]
//!               ^ head
//! topic "b":  [ 11 | 15 | 22 | ... ]
//!               ^ head
//! ```
//!
//! - If every head timestamp fits within `window_size` of every other head
//!   timestamp, all heads are popped and returned as one [`SyncGroup`].
//! - Otherwise the *oldest* head across all topics is dropped — it can never
//!   pair with anything newer within the window — and the caller tries
//!   `poll` again.
//!
//! Each non-matching `poll` strictly shrinks the total buffered message
//! count by one, so draining in a loop always terminates.
//!
//! ## Overflow
//!
//! When a topic's buffer is full, [`DropPolicy`] decides what happens to a
//! new push: [`DropPolicy::RejectNew`] keeps existing data and turns away
//! the incoming message (suited to offline replay, where nothing should be
//! silently lost); [`DropPolicy::DropOldest`] evicts the oldest buffered
//! message to make room (suited to realtime sensors, where freshness beats
//! completeness).
//!
//! ## Example
//!
//! ```
//! use windowsync::{Config, DropPolicy, Synchronizer, WindowSize};
//! use std::time::Duration;
//!
//! let config = Config {
//!     window: WindowSize::Bounded(Duration::from_millis(100)),
//!     buffer_size: 16,
//!     drop_policy: DropPolicy::RejectNew,
//! };
//! let mut sync = Synchronizer::new(["camera", "lidar"], config).unwrap();
//!
//! sync.push("camera", 1_000_000_000, "frame-0").unwrap();
//! sync.push("lidar", 1_000_000_000, "scan-0").unwrap();
//!
//! let group = sync.poll().unwrap();
//! assert_eq!(group.get("camera"), Some(&"frame-0"));
//! assert_eq!(group.get("lidar"), Some(&"scan-0"));
//! ```
//!
//! ## Non-goals
//!
//! The core is a passive data structure. It does not own a thread or event
//! loop, does not perform I/O, does not interpret payloads (they are opaque
//! to it), does not manage wall clocks, and provides no cross-process
//! coordination. Concurrent external use must be serialized by the caller —
//! wrap a `Synchronizer` in a mutex or own it from a single actor, the same
//! way you would any other plain, non-thread-safe collection.

mod buffer;
mod config;
mod error;
mod group;
mod matcher;
mod registry;
mod synchronizer;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use config::{Config, ConfigBuilder, DropPolicy, WindowSize};
pub use error::{Error, PushOutcome};
pub use group::SyncGroup;
pub use synchronizer::{DrainReady, Synchronizer};
