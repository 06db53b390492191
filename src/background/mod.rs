//! Deferred execution on a worker pool with delivery back to the caller.
//!
//! [`background`] runs a generator on the worker pool (see [`runtime`]) and
//! queues its result on the *foreground queue* of the thread that scheduled
//! it. The completion runs on that thread, exactly once, the next time the
//! thread drains its queue with [`run_pending`], [`run_next`] or
//! [`run_until_idle`].
//!
//! Because completions never leave their thread they may capture `Rc`s,
//! `RefCell`s and the crate's callables. The generator, which does leave the
//! thread, must be `Send`.
//!
//! A generator that panics is reported to its completion as
//! [`FunctionalError::Background`]. Jobs cannot be cancelled, have no timeout
//! and are never retried.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use functional::background::{background, run_until_idle};
//! use functional::value::Value;
//!
//! let received = Rc::new(RefCell::new(None));
//! let slot = Rc::clone(&received);
//! background(|| Ok(Value::from(6 * 7)), move |result| {
//!     *slot.borrow_mut() = Some(result);
//! });
//!
//! assert_eq!(run_until_idle(), 1);
//! assert_eq!(*received.borrow(), Some(Ok(Value::from(42))));
//! ```

pub mod runtime;

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::error::{FunctionalError, Result};
use crate::value::Value;

/// A generator result tagged with the job that produced it.
type Delivery = (u64, Result<Value>);

/// A completion waiting on the foreground queue.
type Completion = Box<dyn FnOnce(Result<Value>)>;

/// The per-thread mailbox on which background results arrive.
struct Foreground {
    sender: UnboundedSender<Delivery>,
    receiver: UnboundedReceiver<Delivery>,
    completions: HashMap<u64, Completion>,
    next_job: u64,
}

impl Foreground {
    fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver,
            completions: HashMap::new(),
            next_job: 0,
        }
    }
}

thread_local! {
    static FOREGROUND: RefCell<Foreground> = RefCell::new(Foreground::new());
}

/// Runs `generator` on the worker pool and schedules `completion` on the
/// calling thread's foreground queue.
///
/// Returns immediately. The completion receives the generator's result, or
/// [`FunctionalError::Background`] if the generator panicked.
pub fn background<G, C>(generator: G, completion: C)
where
    G: FnOnce() -> Result<Value> + Send + 'static,
    C: FnOnce(Result<Value>) + 'static,
{
    let (job, sender) = FOREGROUND.with(|foreground| {
        let mut foreground = foreground.borrow_mut();
        let job = foreground.next_job;
        foreground.next_job += 1;
        foreground.completions.insert(job, Box::new(completion));
        (job, foreground.sender.clone())
    });
    tracing::debug!(job, "scheduling background job");

    runtime::handle().spawn_blocking(move || {
        let result = panic::catch_unwind(AssertUnwindSafe(generator)).unwrap_or_else(|payload| {
            let message = panic_message(payload.as_ref());
            tracing::warn!(job, %message, "background generator panicked");
            Err(FunctionalError::Background(message))
        });
        // The scheduling thread may have exited; its completion is gone too.
        if sender.send((job, result)).is_err() {
            tracing::debug!(job, "foreground queue closed before delivery");
        }
    });
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "background generator panicked".to_string())
}

/// Returns the number of jobs scheduled from this thread whose completions
/// have not run yet.
#[must_use]
pub fn pending() -> usize {
    FOREGROUND.with(|foreground| foreground.borrow().completions.len())
}

/// Runs the completions of every job that has already finished, without
/// waiting. Returns how many ran.
pub fn run_pending() -> usize {
    let mut delivered = 0;
    while let Some(delivery) =
        FOREGROUND.with(|foreground| foreground.borrow_mut().receiver.try_recv().ok())
    {
        deliver(delivery);
        delivered += 1;
    }
    delivered
}

/// Waits for the next job scheduled from this thread to finish and runs its
/// completion.
///
/// Returns `false` without blocking when no job is outstanding.
///
/// # Panics
///
/// Panics if called from within an asynchronous execution context, since it
/// blocks the current thread.
pub fn run_next() -> bool {
    if pending() == 0 {
        return false;
    }
    let delivery =
        FOREGROUND.with(|foreground| foreground.borrow_mut().receiver.blocking_recv());
    delivery.is_some_and(|delivery| {
        deliver(delivery);
        true
    })
}

/// Runs completions until no job scheduled from this thread is outstanding,
/// including jobs scheduled by the completions themselves. Returns how many
/// ran.
///
/// # Panics
///
/// Panics if called from within an asynchronous execution context.
pub fn run_until_idle() -> usize {
    let mut delivered = 0;
    while run_next() {
        delivered += 1;
    }
    delivered
}

fn deliver((job, result): Delivery) {
    // Released before the call so the completion can schedule more work.
    let completion =
        FOREGROUND.with(|foreground| foreground.borrow_mut().completions.remove(&job));
    match completion {
        Some(completion) => {
            tracing::debug!(job, success = result.is_ok(), "delivering background result");
            completion(result);
        }
        None => tracing::debug!(job, "no completion registered for background job"),
    }
}
