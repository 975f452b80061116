//! Trailing-edge debouncing on the tokio timer.
//!
//! A [`Debouncer`] owns exactly one pending timer. Each [`call`](Debouncer::call)
//! aborts that timer and arms a fresh one for the full delay, so a burst of
//! calls reaches the target once, with the arguments of the last call.
//!
//! ```rust,ignore
//! let mut search = Debouncer::new(Duration::from_millis(300), |query: String| {
//!     println!("searching for {query}");
//! });
//! search.call("n".into());
//! search.call("na".into());
//! search.call("nats".into()); // only this one is searched, 300ms from now
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

type Target<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Collapses rapid calls into a single delayed invocation of a target.
///
/// The target runs on a spawned tokio task; there is no way to await it.
/// Dropping the debouncer leaves an already scheduled invocation in place.
pub struct Debouncer<A> {
    target: Target<A>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new<F>(delay: Duration, target: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            target: Arc::new(target),
            delay,
            pending: None,
        }
    }

    /// Schedule the target with `args`, replacing any pending invocation.
    ///
    /// Outside a tokio runtime there is no timer to arm: the pending
    /// invocation is still cancelled, and this call is dropped with a
    /// warning.
    pub fn call(&mut self, args: A) {
        if let Some(prev) = self.pending.take() {
            prev.abort();
            trace!("debounce: rescheduled");
        }

        let Ok(runtime) = Handle::try_current() else {
            warn!("debounce: no tokio runtime, call dropped");
            return;
        };
        let target = Arc::clone(&self.target);
        let delay = self.delay;
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            target(args);
        }));
    }

    /// Whether an invocation is scheduled and hasn't run yet.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Closure form of [`Debouncer`]: returns a function that debounces `target`.
pub fn debounce<A, F>(target: F, delay: Duration) -> impl FnMut(A)
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    let mut debouncer = Debouncer::new(delay, target);
    move |args| debouncer.call(args)
}
