//! Frame-pacing abstraction for platform-agnostic timing.

/// Trait for abstracting the per-frame delay.
///
/// The driver blocks on this between frames; there is no other throttling.
/// Implement it with your platform's sleep or busy-wait mechanism.
pub trait DelaySource {
    /// Blocks for the given number of milliseconds.
    fn delay_ms(&self, millis: u64);
}

/// Thread-sleep delay source for hosted platforms.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

#[cfg(feature = "std")]
impl DelaySource for StdDelay {
    fn delay_ms(&self, millis: u64) {
        std::thread::sleep(std::time::Duration::from_millis(millis));
    }
}
