use crate::buffer::StreamBuffer;
use crate::config::WindowSize;
use crate::group::SyncGroup;

/// The matching rule: look only at the current front of every
/// stream. Either every head fits within the window and all of them are
/// emitted as one group, or the single oldest head is discarded because it
/// can never pair with anything newer within the window.
///
/// At most one emission or one discard happens per call; there is no
/// internal loop — the caller (`Synchronizer::poll`) decides whether to
/// call again.
pub(crate) fn poll<T>(
    buffers: &mut [StreamBuffer<T>],
    names: &[String],
    window: WindowSize,
) -> Option<SyncGroup<T>> {
    if buffers.iter().any(StreamBuffer::is_empty) {
        return None;
    }

    let heads: Vec<u64> = buffers
        .iter()
        .map(|b| b.front_timestamp().expect("checked non-empty above"))
        .collect();

    let t_min = *heads.iter().min().expect("buffers is non-empty");
    let t_max = *heads.iter().max().expect("buffers is non-empty");
    // `position` returns the first (lowest-index) match, giving the
    // documented tie-break for argmin.
    let i_min = heads.iter().position(|&ts| ts == t_min).expect("t_min came from heads");
    let spread = t_max - t_min;

    if window.permits(spread) {
        let mut entries = Vec::with_capacity(buffers.len());
        for (i, buffer) in buffers.iter_mut().enumerate() {
            let msg = buffer.pop_front().expect("checked non-empty above");
            entries.push((names[i].clone(), msg.timestamp, msg.payload));
        }
        tracing::trace!(
            representative_timestamp_ns = t_min,
            topic_count = names.len(),
            "emitted synchronized group"
        );
        Some(SyncGroup::new(entries))
    } else {
        let discarded = buffers[i_min].pop_front().expect("checked non-empty above");
        tracing::trace!(
            topic = %names[i_min],
            discarded_timestamp = discarded.timestamp,
            spread_ns = spread,
            "advanced: discarded oldest head outside window"
        );
        None
    }
}
