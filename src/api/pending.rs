//! Handle to a call that is already running on the executor

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::task::JoinHandle;

use super::error::{ApiError, TransportError};

/// A call scheduled with [`PokeApi::spawn`](super::PokeApi::spawn).
///
/// The request starts as soon as the call is spawned, whether or not the
/// handle is awaited. Dropping the handle detaches the call; [`abort`]
/// cancels it, and awaiting an aborted call yields
/// [`TransportError::Canceled`].
///
/// [`abort`]: PendingCall::abort
#[derive(Debug)]
pub struct PendingCall<O> {
    handle: JoinHandle<Result<O, ApiError>>,
}

impl<O> PendingCall<O> {
    pub(crate) fn new(handle: JoinHandle<Result<O, ApiError>>) -> Self {
        Self { handle }
    }

    /// Cancel the call. Other pending calls are unaffected.
    pub fn abort(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl<O> Future for PendingCall<O> {
    type Output = Result<O, ApiError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.handle).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(err)) if err.is_cancelled() => {
                tracing::debug!("pending call canceled");
                Poll::Ready(Err(ApiError::Transport(TransportError::Canceled)))
            }
            Poll::Ready(Err(err)) => std::panic::resume_unwind(err.into_panic()),
        }
    }
}
