//! The worker pool behind [`super::background`].
//!
//! When the caller is already inside a tokio runtime its handle is used, so
//! background work shares the caller's pool. Otherwise work goes to a lazily
//! built multi-thread runtime with one worker per CPU, created on first use
//! and never dropped.

use std::cell::RefCell;
use std::sync::LazyLock;

use tokio::runtime::{Builder, Handle, Runtime};

// =============================================================================
// Global Runtime
// =============================================================================

static GLOBAL_RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    let workers = num_cpus::get();
    tracing::debug!(workers, "starting background runtime");
    Builder::new_multi_thread()
        .worker_threads(workers)
        .thread_name("functional-worker")
        .build()
        .expect("Failed to create global tokio runtime")
});

/// Returns the lazily built global runtime.
#[inline]
#[must_use]
pub fn global() -> &'static Runtime {
    &GLOBAL_RUNTIME
}

// =============================================================================
// Handle Caching
// =============================================================================

thread_local! {
    static CACHED_HANDLE: RefCell<Option<Handle>> = const { RefCell::new(None) };
}

/// Returns the current runtime's handle, or the global runtime's handle when
/// the caller is outside any runtime.
#[must_use]
pub fn handle() -> Handle {
    if let Ok(current) = Handle::try_current() {
        return current;
    }
    CACHED_HANDLE.with(|cached| {
        cached
            .borrow_mut()
            .get_or_insert_with(|| global().handle().clone())
            .clone()
    })
}
