use std::time::Duration;

/// The matching window for [`Synchronizer::poll`](crate::Synchronizer::poll).
///
/// A group is emitted when the spread between the oldest and newest
/// candidate timestamp is `<= window`. [`WindowSize::Infinite`] makes the
/// spread test vacuous: any set of heads matches regardless of spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSize {
    Bounded(Duration),
    Infinite,
}

impl WindowSize {
    /// `0` means infinite, matching the host-config convention of treating
    /// an unset/zero window as "no constraint".
    pub(crate) fn from_millis(ms: u64) -> Self {
        if ms == 0 {
            WindowSize::Infinite
        } else {
            WindowSize::Bounded(Duration::from_millis(ms))
        }
    }

    pub(crate) fn permits(&self, spread_ns: u64) -> bool {
        match self {
            WindowSize::Infinite => true,
            WindowSize::Bounded(d) => spread_ns <= d.as_nanos() as u64,
        }
    }
}

/// Overflow policy applied by [`StreamBuffer::push`](crate::buffer::StreamBuffer::push)
/// when a topic's buffer is already at capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPolicy {
    /// Reject the incoming message, keep the buffer's current contents.
    /// Preserves existing data — suited to offline/bag replay.
    RejectNew,
    /// Drop the oldest buffered message, accept the incoming one.
    /// Favors freshness — suited to realtime sensors.
    DropOldest,
}

/// Construction-time configuration for a [`Synchronizer`](crate::Synchronizer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub window: WindowSize,
    pub buffer_size: usize,
    pub drop_policy: DropPolicy,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window: WindowSize::from_millis(50),
            buffer_size: 64,
            drop_policy: DropPolicy::RejectNew,
        }
    }
}

/// Builder for [`Config`].
///
/// The builder itself never fails — every setter just records a value.
/// Validation (`buffer_size >= 2`, and so on) happens once, eagerly, in
/// [`Synchronizer::new`](crate::Synchronizer::new), since a `Config` is
/// only ever meaningful paired with a topic list.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    window: WindowSize,
    buffer_size: usize,
    drop_policy: DropPolicy,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        let Config {
            window,
            buffer_size,
            drop_policy,
        } = Config::default();
        ConfigBuilder {
            window,
            buffer_size,
            drop_policy,
        }
    }
}

impl ConfigBuilder {
    /// Sets a bounded window in milliseconds. `0` is treated as infinite,
    /// matching the host-facing convention (see [`WindowSize::from_millis`]).
    pub fn window_ms(mut self, ms: u64) -> Self {
        self.window = WindowSize::from_millis(ms);
        self
    }

    pub fn window_infinite(mut self) -> Self {
        self.window = WindowSize::Infinite;
        self
    }

    pub fn buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    pub fn drop_policy(mut self, policy: DropPolicy) -> Self {
        self.drop_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        Config {
            window: self.window,
            buffer_size: self.buffer_size,
            drop_policy: self.drop_policy,
        }
    }
}
