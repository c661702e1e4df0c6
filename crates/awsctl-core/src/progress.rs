//! Progress reporting for long-running waits
//!
//! Polling loops like [`crate::dynamodb::wait_for_table_active`] accept an
//! optional callback so callers can drive a spinner or log lines without the
//! core crate knowing anything about terminals.

/// Events emitted while polling a resource towards a target state
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// The wait started for the named resource
    Started { resource: String },
    /// One poll completed; `status` is the last observed state
    Polling { resource: String, status: String },
    /// The resource reached the target state
    Completed { resource: String },
    /// The wait gave up before the target state was reached
    TimedOut { resource: String },
}

/// Callback invoked with each [`ProgressEvent`]
pub type ProgressCallback = Box<dyn Fn(ProgressEvent) + Send + Sync>;

/// Invoke the callback if one was supplied
pub(crate) fn emit(callback: &Option<ProgressCallback>, event: ProgressEvent) {
    if let Some(cb) = callback {
        cb(event);
    }
}
