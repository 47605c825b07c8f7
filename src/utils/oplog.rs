//! Operation logging wrapper for commands that mutate the entry list.

use tracing::info;

/// Emit an `operation invoked` event, then run `f` and hand back its result.
pub fn logged<T>(operation: &str, user: &str, f: impl FnOnce() -> T) -> T {
    info!(operation, user, "operation invoked");
    f()
}
