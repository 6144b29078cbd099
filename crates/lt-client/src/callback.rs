//! Completion-callback adapter.
//!
//! Every operation is an `async fn` returning [`Result`]; awaiting it is the
//! awaitable convention. This module drives the same future on the tokio
//! runtime and hands its outcome to a callback instead.

use std::future::Future;

use tokio::task::JoinHandle;

use crate::error::Result;

/// Spawn `future` and call `completion` exactly once with its outcome.
///
/// Must be called from within a tokio runtime. The returned handle can be
/// awaited to know when the callback has run; dropping it does not cancel
/// the request.
///
/// # Example
///
/// ```rust,ignore
/// let handle = spawn_with_callback(client.clone().dispatch_owned(spec), |result| match result {
///     Ok(body) => println!("{body}"),
///     Err(err) => eprintln!("{err}"),
/// });
/// handle.await?;
/// ```
pub fn spawn_with_callback<F, T, C>(future: F, completion: C) -> JoinHandle<()>
where
    F: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
    C: FnOnce(Result<T>) + Send + 'static,
{
    tokio::spawn(async move {
        let result = future.await;
        completion(result);
    })
}
