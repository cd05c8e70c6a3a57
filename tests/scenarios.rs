//! Integration tests implementing the named scenarios: a clean in-window
//! match, a skewed stream requiring an advance before matching, the two
//! overflow policies, multi-way ties, and an infinite window.

use windowsync::{Config, ConfigBuilder, DropPolicy, Error, PushOutcome, Synchronizer};

fn cfg() -> ConfigBuilder {
    Config::builder()
}

/// Scenario A: two streams, in-window heads, two consecutive matches.
#[test]
fn scenario_a_clean_match() {
    let config = cfg().window_ms(50).buffer_size(8).build();
    let mut sync = Synchronizer::new(["cam", "lidar"], config).unwrap();

    sync.push("cam", 1_000, "c0").unwrap();
    sync.push("lidar", 1_010, "l0").unwrap();
    sync.push("cam", 2_000, "c1").unwrap();
    sync.push("lidar", 2_030, "l1").unwrap();

    let g1 = sync.poll().expect("first pair is within window");
    assert_eq!(g1.representative_timestamp_ns(), 1_000);
    assert_eq!(g1.get("cam"), Some(&"c0"));
    assert_eq!(g1.get("lidar"), Some(&"l0"));

    let g2 = sync.poll().expect("second pair is within window");
    assert_eq!(g2.representative_timestamp_ns(), 2_000);

    assert!(sync.poll().is_none());
}

/// Scenario B: one stream runs ahead; the matcher must discard its stale
/// head before the true match becomes visible.
#[test]
fn scenario_b_skew_requires_advance() {
    let config = cfg().window_ms(20).buffer_size(8).build();
    let mut sync = Synchronizer::new(["cam", "lidar"], config).unwrap();

    sync.push("cam", 0, "stale").unwrap();
    sync.push("lidar", 1_000, "fresh").unwrap();
    sync.push("cam", 995, "caught_up").unwrap();

    // First poll only advances (discards "stale"), it does not emit.
    assert!(sync.poll().is_none());
    assert_eq!(sync.buffer_len("cam").unwrap(), 1);

    let group = sync.poll().expect("second poll should now match");
    assert_eq!(group.get("cam"), Some(&"caught_up"));
    assert_eq!(group.get("lidar"), Some(&"fresh"));
}

/// Scenario C: `RejectNew` keeps existing buffered data when full.
#[test]
fn scenario_c_reject_new_overflow() {
    let config = cfg().buffer_size(2).drop_policy(DropPolicy::RejectNew).build();
    let mut sync = Synchronizer::new(["imu"], config).unwrap();

    assert_eq!(sync.push("imu", 1, "m1").unwrap(), PushOutcome::Accepted);
    assert_eq!(sync.push("imu", 2, "m2").unwrap(), PushOutcome::Accepted);
    assert_eq!(sync.push("imu", 3, "m3").unwrap(), PushOutcome::Rejected);
    assert_eq!(sync.buffer_len("imu").unwrap(), 2);
}

/// Scenario D: `DropOldest` always admits the newest push, evicting the
/// front to make room.
#[test]
fn scenario_d_drop_oldest_overflow() {
    let config = cfg().buffer_size(2).drop_policy(DropPolicy::DropOldest).build();
    let mut sync = Synchronizer::new(["imu"], config).unwrap();

    assert_eq!(sync.push("imu", 1, "m1").unwrap(), PushOutcome::Accepted);
    assert_eq!(sync.push("imu", 2, "m2").unwrap(), PushOutcome::Accepted);
    assert_eq!(sync.push("imu", 3, "m3").unwrap(), PushOutcome::Accepted);
    assert_eq!(sync.buffer_len("imu").unwrap(), 2);
}

/// Scenario E: three streams with a tie on the minimum head timestamp —
/// the lowest-index topic among the tied streams is the one discarded.
#[test]
fn scenario_e_tie_break_among_three_streams() {
    let config = cfg().window_ms(1).buffer_size(8).build();
    let mut sync = Synchronizer::new(["a", "b", "c"], config).unwrap();

    sync.push("a", 5, "a0").unwrap();
    sync.push("b", 5, "b0").unwrap();
    sync.push("c", 1_000_000, "c0").unwrap();

    assert!(sync.poll().is_none());
    assert_eq!(sync.buffer_len("a").unwrap(), 0);
    assert_eq!(sync.buffer_len("b").unwrap(), 1);
    assert_eq!(sync.buffer_len("c").unwrap(), 1);
}

/// Scenario F: an infinite window matches regardless of spread, as long as
/// every stream has a head.
#[test]
fn scenario_f_infinite_window_always_matches() {
    let config = Config::builder().window_infinite().buffer_size(4).build();
    let mut sync = Synchronizer::new(["a", "b"], config).unwrap();

    sync.push("a", 0, "a0").unwrap();
    sync.push("b", 1_000_000_000_000, "b0").unwrap();

    let group = sync.poll().expect("infinite window always permits a match");
    assert_eq!(group.representative_timestamp_ns(), 0);
}

/// Boundary (10): a single-topic synchronizer degenerates to pass-through —
/// every push is immediately its own matched group.
#[test]
fn boundary_single_topic_is_pass_through() {
    let config = cfg().window_ms(50).buffer_size(4).build();
    let mut sync = Synchronizer::new(["solo"], config).unwrap();

    sync.push("solo", 10, "x").unwrap();
    let group = sync.poll().unwrap();
    assert_eq!(group.get("solo"), Some(&"x"));
    assert_eq!(group.len(), 1);
}

/// Boundary (11): pushing to an unregistered topic is an error, and the
/// synchronizer's state is unaffected.
#[test]
fn boundary_unknown_topic_push_is_rejected() {
    let config = cfg().build();
    let mut sync = Synchronizer::new(["a"], config).unwrap();
    let err = sync.push("b", 0, "x").unwrap_err();
    assert!(matches!(err, Error::UnknownTopic(_)));
}

/// Boundary (12): construction rejects a degenerate `buffer_size`.
#[test]
fn boundary_buffer_size_below_two_is_rejected() {
    let config = cfg().buffer_size(1).build();
    let err = Synchronizer::<()>::new(["a"], config).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}
