//! Generic host-integration adapter: a synchronous loop that feeds a
//! `Synchronizer` from per-topic message streams and forwards each matched
//! group downstream. Not part of the crate's public API — illustrates the
//! shape a host subscription layer would take around `Synchronizer`.
//!
//! Mirrors `conflux_py`'s `synchronizer.py` wrapper (there, a
//! `ROS2Synchronizer` subscribes to ROS2 topics and calls `push`/`drain` on
//! every message and timer tick); this demo keeps the same push-then-drain
//! shape but drops the ROS2-specific subscription machinery in favor of
//! plain in-memory channels, since the core itself is transport-agnostic.

use std::collections::VecDeque;

use windowsync::{Config, Synchronizer};

/// Stand-in for a topic's incoming message feed. A real host would have
/// one of these per ROS2/MQTT/shared-memory subscription.
struct TopicFeed {
    name: &'static str,
    messages: VecDeque<(u64, String)>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut feeds = vec![
        TopicFeed {
            name: "camera",
            messages: VecDeque::from([
                (1_000, "frame#0".to_string()),
                (2_010, "frame#1".to_string()),
                (3_005, "frame#2".to_string()),
            ]),
        },
        TopicFeed {
            name: "lidar",
            messages: VecDeque::from([
                (1_020, "scan#0".to_string()),
                (2_000, "scan#1".to_string()),
                (2_995, "scan#2".to_string()),
            ]),
        },
    ];

    let config = Config::builder().window_ms(50).buffer_size(16).build();
    let topics: Vec<&'static str> = feeds.iter().map(|f| f.name).collect();
    let mut sync = Synchronizer::new(topics, config).expect("valid topic list and config");

    // Host drive loop: pull one message from each feed per tick, push it
    // in, then drain whatever groups are now reachable.
    loop {
        let mut any_pushed = false;
        for feed in feeds.iter_mut() {
            if let Some((timestamp_ns, payload)) = feed.messages.pop_front() {
                sync.push(feed.name, timestamp_ns, payload)
                    .expect("feed name is a registered topic");
                any_pushed = true;
            }
        }

        for group in sync.drain_ready() {
            println!(
                "matched group @ {}ns: {:?}",
                group.representative_timestamp_ns(),
                group.iter().map(|(t, ts, p)| format!("{t}={p}@{ts}")).collect::<Vec<_>>()
            );
        }

        if !any_pushed {
            break;
        }
    }
}
