//! Process-wide shutdown state.
//!
//! Set once by the Ctrl+C handler or the input reader, read by threads that
//! cannot be reached through the coordinator channel.

use std::sync::atomic::{AtomicBool, Ordering};

/// Shutdown has been requested
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Mark shutdown as requested
pub fn request_shutdown() {
    SHUTDOWN.store(true, Ordering::SeqCst);
}

/// Check if shutdown has been requested
///
/// Uses Relaxed ordering - worst case a reader handles one more line.
pub fn is_shutdown() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown() {
        request_shutdown();
        assert!(is_shutdown());
        SHUTDOWN.store(false, Ordering::SeqCst);
    }
}
