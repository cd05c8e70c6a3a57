//! C ABI boundary: an opaque `Synchronizer<*mut c_void>` behind a raw
//! handle, callback-driven polling, and integer result codes in place of
//! `Result`/`Option`.
//!
//! Mirrors the `ConfluxConfig`/`ConfluxResult`/`POLL_CALLBACK` contract the
//! project's Python ctypes bindings (`_ffi.py`) speak to a shared library.
//! Payload identity crossing the boundary is a bare `*mut c_void` the core
//! never dereferences — ownership of whatever it points to stays with the
//! host.

use std::ffi::{c_char, c_void, CStr};
use std::sync::Once;

use crate::config::{Config, DropPolicy, WindowSize};
use crate::error::Error;
use crate::synchronizer::Synchronizer;

static INIT_TRACING_SUBSCRIBER_NOTICE: Once = Once::new();

/// Host-facing configuration, mirroring `ConfluxConfig` field-for-field.
#[repr(C)]
pub struct WindowsyncConfig {
    /// `0` means an unbounded window, matching [`WindowSize::from_millis`].
    pub window_size_ms: u64,
    pub buffer_size: usize,
    /// `0` = [`DropPolicy::RejectNew`], `1` = [`DropPolicy::DropOldest`].
    pub drop_policy: i32,
}

/// Integer result code returned in place of `Result`/`Option` across the
/// boundary. Mirrors `ConfluxResult`.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowsyncResult {
    Ok = 0,
    InvalidArgument = 1,
    BufferFull = 2,
    UnknownTopic = 3,
    NullPointer = 4,
    InternalError = 5,
}

/// Invoked once per emitted message when a group is found by
/// [`windowsync_poll`]. `payload` is returned exactly as it was passed to
/// [`windowsync_push`]; the core never reads through it.
pub type WindowsyncPollCallback =
    extern "C" fn(topic: *const c_char, timestamp_ns: i64, payload: *mut c_void, ctx: *mut c_void);

fn drop_policy_from_wire(code: i32) -> Result<DropPolicy, WindowsyncResult> {
    match code {
        0 => Ok(DropPolicy::RejectNew),
        1 => Ok(DropPolicy::DropOldest),
        _ => Err(WindowsyncResult::InvalidArgument),
    }
}

unsafe fn config_from_wire(config: *const WindowsyncConfig) -> Result<Config, WindowsyncResult> {
    if config.is_null() {
        return Err(WindowsyncResult::NullPointer);
    }
    let config = &*config;
    let drop_policy = drop_policy_from_wire(config.drop_policy)?;
    Ok(Config {
        window: WindowSize::from_millis(config.window_size_ms),
        buffer_size: config.buffer_size,
        drop_policy,
    })
}

unsafe fn topics_from_wire(
    topics: *const *const c_char,
    topic_count: usize,
) -> Result<Vec<String>, WindowsyncResult> {
    if topics.is_null() {
        return Err(WindowsyncResult::NullPointer);
    }
    let mut names = Vec::with_capacity(topic_count);
    for i in 0..topic_count {
        let ptr = *topics.add(i);
        if ptr.is_null() {
            return Err(WindowsyncResult::NullPointer);
        }
        let name = CStr::from_ptr(ptr)
            .to_str()
            .map_err(|_| WindowsyncResult::InvalidArgument)?
            .to_owned();
        names.push(name);
    }
    Ok(names)
}

fn error_to_wire(err: Error) -> WindowsyncResult {
    match err {
        Error::InvalidArgument(_) => WindowsyncResult::InvalidArgument,
        Error::UnknownTopic(_) => WindowsyncResult::UnknownTopic,
    }
}

/// Emits a one-time `tracing` notice reminding the host that the `ffi`
/// feature carries no subscriber of its own — the library side of the
/// "library emits, binary installs" convention applies here too.
fn note_no_subscriber_installed() {
    INIT_TRACING_SUBSCRIBER_NOTICE.call_once(|| {
        tracing::debug!("windowsync ffi boundary active; host is responsible for installing a tracing subscriber");
    });
}

/// Creates a synchronizer and returns an opaque handle, or a null pointer
/// on failure (invalid config, bad topic list, or a negative timestamp
/// convention violation is not possible here — validation is against
/// `config`/`topics` only).
///
/// # Safety
///
/// `config` must point to a valid, initialized `WindowsyncConfig`.
/// `topics` must point to `topic_count` valid, non-null, NUL-terminated
/// UTF-8 C strings for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn windowsync_synchronizer_new(
    config: *const WindowsyncConfig,
    topics: *const *const c_char,
    topic_count: usize,
) -> *mut c_void {
    note_no_subscriber_installed();

    let config = match config_from_wire(config) {
        Ok(c) => c,
        Err(_) => return std::ptr::null_mut(),
    };
    let names = match topics_from_wire(topics, topic_count) {
        Ok(n) => n,
        Err(_) => return std::ptr::null_mut(),
    };

    match Synchronizer::<*mut c_void>::new(names, config) {
        Ok(sync) => Box::into_raw(Box::new(sync)) as *mut c_void,
        Err(_) => std::ptr::null_mut(),
    }
}

/// Destroys a synchronizer created by [`windowsync_synchronizer_new`].
/// Every payload still buffered at the time of the call is dropped as a
/// bare `*mut c_void` — the host, not this crate, owns whatever it points
/// to and remains responsible for freeing it.
///
/// # Safety
///
/// `handle` must be a pointer previously returned by
/// [`windowsync_synchronizer_new`] and not yet freed. Passing null is a
/// no-op.
#[no_mangle]
pub unsafe extern "C" fn windowsync_synchronizer_free(handle: *mut c_void) {
    if handle.is_null() {
        return;
    }
    drop(Box::from_raw(handle as *mut Synchronizer<*mut c_void>));
}

unsafe fn handle_ref<'a>(handle: *mut c_void) -> Option<&'a mut Synchronizer<*mut c_void>> {
    (handle as *mut Synchronizer<*mut c_void>).as_mut()
}

/// Pushes one message. `timestamp_ns` is signed at this boundary (the host
/// may hand in a raw wall-clock reading); a negative value is rejected as
/// `InvalidArgument` here rather than silently truncating.
///
/// # Safety
///
/// `handle` must be a live pointer from [`windowsync_synchronizer_new`].
/// `topic` must be a valid, NUL-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn windowsync_push(
    handle: *mut c_void,
    topic: *const c_char,
    timestamp_ns: i64,
    payload: *mut c_void,
) -> WindowsyncResult {
    let sync = match handle_ref(handle) {
        Some(s) => s,
        None => return WindowsyncResult::NullPointer,
    };
    if topic.is_null() {
        return WindowsyncResult::NullPointer;
    }
    let topic = match CStr::from_ptr(topic).to_str() {
        Ok(t) => t,
        Err(_) => return WindowsyncResult::InvalidArgument,
    };
    if timestamp_ns < 0 {
        return WindowsyncResult::InvalidArgument;
    }

    match sync.push(topic, timestamp_ns as u64, payload) {
        Ok(crate::error::PushOutcome::Accepted) => WindowsyncResult::Ok,
        Ok(crate::error::PushOutcome::Rejected) => WindowsyncResult::BufferFull,
        Err(err) => error_to_wire(err),
    }
}

/// Polls once, invoking `callback` once per topic in the emitted group (if
/// any). Returns `1` if a group was emitted, `0` otherwise. `ctx` is
/// forwarded to every callback invocation unchanged.
///
/// # Safety
///
/// `handle` must be a live pointer from [`windowsync_synchronizer_new`].
/// `callback` must be a valid function pointer safe to call from this
/// thread.
#[no_mangle]
pub unsafe extern "C" fn windowsync_poll(
    handle: *mut c_void,
    callback: WindowsyncPollCallback,
    ctx: *mut c_void,
) -> i32 {
    let sync = match handle_ref(handle) {
        Some(s) => s,
        None => return 0,
    };

    match sync.poll() {
        Some(group) => {
            for (topic, timestamp_ns, payload) in group {
                let c_topic = match std::ffi::CString::new(topic) {
                    Ok(s) => s,
                    Err(_) => continue,
                };
                callback(c_topic.as_ptr(), timestamp_ns as i64, payload, ctx);
            }
            1
        }
        None => 0,
    }
}

/// # Safety
///
/// `handle` must be a live pointer from [`windowsync_synchronizer_new`].
#[no_mangle]
pub unsafe extern "C" fn windowsync_is_ready(handle: *mut c_void) -> bool {
    match handle_ref(handle) {
        Some(sync) => sync.is_ready(),
        None => false,
    }
}

/// # Safety
///
/// `handle` must be a live pointer from [`windowsync_synchronizer_new`].
#[no_mangle]
pub unsafe extern "C" fn windowsync_is_empty(handle: *mut c_void) -> bool {
    match handle_ref(handle) {
        Some(sync) => sync.is_empty(),
        None => true,
    }
}

/// Returns the buffer occupancy for `topic`, or `usize::MAX` if `handle` is
/// null or `topic` is unknown/malformed.
///
/// # Safety
///
/// `handle` must be a live pointer from [`windowsync_synchronizer_new`].
/// `topic` must be a valid, NUL-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn windowsync_buffer_len(handle: *mut c_void, topic: *const c_char) -> usize {
    let sync = match handle_ref(handle) {
        Some(s) => s,
        None => return usize::MAX,
    };
    if topic.is_null() {
        return usize::MAX;
    }
    let topic = match CStr::from_ptr(topic).to_str() {
        Ok(t) => t,
        Err(_) => return usize::MAX,
    };
    sync.buffer_len(topic).unwrap_or(usize::MAX)
}

/// # Safety
///
/// `handle` must be a live pointer from [`windowsync_synchronizer_new`].
#[no_mangle]
pub unsafe extern "C" fn windowsync_topic_count(handle: *mut c_void) -> usize {
    match handle_ref(handle) {
        Some(sync) => sync.topic_count(),
        None => 0,
    }
}
