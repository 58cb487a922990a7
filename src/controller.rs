//! Light controller abstraction.

use crate::rig::FixtureAddress;
use palette::Srgb;

/// Trait for abstracting the light rig session.
///
/// Implement this for your device transport (serial, network, simulator) to
/// allow the driver to push colors to it. Establishing the session is the
/// implementation's concern; the driver takes an already connected handle.
///
/// Failures are reported through the associated `Error` type. The driver does
/// not retry or recover: the first error aborts the animation loop and
/// surfaces to the caller.
pub trait LightController {
    /// Transport failure type.
    type Error;

    /// Stages a color for one fixture.
    ///
    /// Whether the color is buffered until [`strobe`](Self::strobe) or
    /// applied immediately is the implementation's concern.
    fn set_rgb(&mut self, address: FixtureAddress, color: Srgb<u8>) -> Result<(), Self::Error>;

    /// Commits all staged fixture colors so they become visible in unison.
    fn strobe(&mut self) -> Result<(), Self::Error>;

    /// Releases the session.
    ///
    /// Consumes the handle, so the session cannot be used after closing.
    fn close(self) -> Result<(), Self::Error>;
}
