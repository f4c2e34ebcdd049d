//! Per-request cancellation and deadline handling.

use std::future::Future;
use std::time::Duration;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;

use crate::error::AppError;

/// Cancellation signal plus optional deadline carried through every
/// upstream operation.
///
/// Cloning shares the same token. Use [`RequestContext::child`] to derive a
/// context that is cancelled together with its parent but can also be
/// cancelled on its own.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Returns a copy that expires `timeout` from now. An earlier existing
    /// deadline is kept.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    /// Child context: cancelled when the parent is, same deadline.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Drives `future` until it completes, the context is cancelled or the
    /// deadline passes, whichever comes first.
    pub async fn run<F>(&self, future: F) -> Result<F::Output, AppError>
    where
        F: Future,
    {
        if self.token.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        if let Some(deadline) = self.deadline
            && Instant::now() >= deadline
        {
            return Err(AppError::DeadlineExceeded);
        }

        let deadline = async {
            match self.deadline {
                Some(deadline) => sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(AppError::Cancelled),
            _ = deadline => Err(AppError::DeadlineExceeded),
            output = future => Ok(output),
        }
    }

    /// Cancellable sleep.
    pub async fn sleep(&self, duration: Duration) -> Result<(), AppError> {
        self.run(tokio::time::sleep(duration)).await
    }
}
