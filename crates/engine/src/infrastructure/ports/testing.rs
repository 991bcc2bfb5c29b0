//! Testability port for injecting randomness.

// =============================================================================
// Testability Ports
// =============================================================================

/// Source of uniformly distributed integers.
///
/// Every die the engine rolls goes through this port, so a seeded or
/// scripted implementation replays a session exactly.
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform integer in `[min, max]`, inclusive.
    fn gen_range(&self, min: i32, max: i32) -> i32;
}
