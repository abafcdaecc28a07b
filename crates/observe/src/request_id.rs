//! This module supplies the tools to associate 1 identifier with a task.
//! That identifier is accessible globally just for that task and ties
//! together all logs emitted while serving a single request.
//! Instead of dragging the identifier through every function call we use
//! task local storage that is globally visible but individual to each task.
//! The storage gets populated once by the [`with_request_id`] middleware
//! before the request reaches its handler.
use {
    axum::{extract::Request, middleware::Next, response::Response},
    std::{
        future::Future,
        sync::atomic::{AtomicUsize, Ordering},
    },
    tracing::Instrument,
};

tokio::task_local! {
    pub static REQUEST_ID: String;
}

/// Header clients can use to correlate their requests with our logs.
pub const HEADER: &str = "X-Request-ID";

/// Tries to read the `request_id` from this task's storage.
/// Returns `None` if task local storage was not initialized or is empty.
pub fn get_task_local_storage() -> Option<String> {
    REQUEST_ID.try_with(Clone::clone).ok()
}

/// Sets the tasks's local id to the passed in value for the given scope.
pub async fn set_task_local_storage<F, R>(id: String, scope: F) -> R
where
    F: Future<Output = R>,
{
    REQUEST_ID.scope(id, scope).await
}

/// Axum middleware that initializes task local storage with a request id
/// before handing the request to the next service.
/// The id gets taken from the request's `X-Request-ID` header or, if that is
/// missing, from a process wide request counter.
pub async fn with_request_id(request: Request, next: Next) -> Response {
    static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

    let id = match request.headers().get(HEADER) {
        Some(header) => String::from_utf8_lossy(header.as_bytes()).to_string(),
        None => NEXT_ID.fetch_add(1, Ordering::SeqCst).to_string(),
    };
    let span = tracing::info_span!("request", id = %id);
    set_task_local_storage(id, next.run(request))
        .instrument(span)
        .await
}
