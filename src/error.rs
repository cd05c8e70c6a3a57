/// Errors raised by [`Synchronizer::new`](crate::Synchronizer::new),
/// [`Synchronizer::push`](crate::Synchronizer::push), and
/// [`Synchronizer::buffer_len`](crate::Synchronizer::buffer_len).
///
/// `poll` never raises: absence of a synchronized group is represented by
/// `None`, not an error arm. A full buffer under
/// [`DropPolicy::RejectNew`](crate::DropPolicy::RejectNew) is likewise not
/// an error — see [`PushOutcome`].
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown topic: {0}")]
    UnknownTopic(String),
}

/// The outcome of a successful (non-erroring) [`push`](crate::Synchronizer::push)
/// call.
///
/// Distinct from [`Error`]: a rejected push under
/// [`DropPolicy::RejectNew`](crate::DropPolicy::RejectNew) is a routine,
/// expected outcome — how a telemetry layer computes a rejection rate — not
/// a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Accepted,
    Rejected,
}

impl PushOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, PushOutcome::Accepted)
    }
}
