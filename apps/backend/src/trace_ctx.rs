//! Task-local trace id for the request being served.
//!
//! `RequestTrace` scopes every request future with its id so error bodies
//! can echo it without threading it through handlers.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

pub const UNKNOWN_TRACE_ID: &str = "unknown";

/// The current request's trace id, or `"unknown"` outside a request.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNKNOWN_TRACE_ID.to_string())
}

/// Run `future` with `trace_id` as the current trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
