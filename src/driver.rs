//! Rainbow animation driver with frame pacing and shutdown control.
//!
//! Provides [`RainbowDriver`] which renders a cycling [`Gradient`] across all
//! fixtures of the rig, one frame at a time, latching each frame with the
//! controller's strobe commit.

use crate::controller::LightController;
use crate::gradient::{Gradient, RAINBOW};
use crate::rig::FixtureAddress;
use crate::time::DelaySource;

/// Tuning constants for the animation loop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverConfig {
    /// Delay between frames, in milliseconds.
    pub frame_delay_ms: u64,

    /// Amount the phase decreases every frame.
    pub phase_step: f64,

    /// Phase value the driver starts from.
    ///
    /// Large enough that the phase stays positive for roughly a decade of
    /// continuous operation at the default step and frame rate.
    pub initial_phase: f64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: 5,
            phase_step: 0.01,
            initial_phase: 1e9,
        }
    }
}

/// Drives the rig through a continuously cycling rainbow gradient.
///
/// Each frame decrements the animation phase, evaluates the gradient once per
/// fixture (the fixture's position within its module rotates the palette), and
/// dispatches the colors to the controller followed by a strobe commit.
///
/// The phase scalar is owned by the driver instance; there is no shared or
/// global animation state.
///
/// # Type Parameters
/// * `'d` - Lifetime of the delay source reference
/// * `C` - Light controller implementation type
/// * `D` - Delay source implementation type
pub struct RainbowDriver<'d, C: LightController, D: DelaySource> {
    controller: C,
    delay: &'d D,
    gradient: Gradient,
    config: DriverConfig,
    phase: f64,
    frames_rendered: u64,
}

impl<'d, C: LightController, D: DelaySource> RainbowDriver<'d, C, D> {
    /// Creates a driver with the default rainbow palette and configuration.
    pub fn new(controller: C, delay: &'d D) -> Self {
        Self::with_config(controller, delay, RAINBOW, DriverConfig::default())
    }

    /// Creates a driver with a custom gradient and configuration.
    pub fn with_config(controller: C, delay: &'d D, gradient: Gradient, config: DriverConfig) -> Self {
        Self {
            controller,
            delay,
            gradient,
            config,
            phase: config.initial_phase,
            frames_rendered: 0,
        }
    }

    /// Runs the animation loop until `should_stop` returns true, then closes
    /// the controller session.
    ///
    /// Each iteration decrements the phase, blocks for the configured frame
    /// delay, and renders one frame. The stop predicate is checked once per
    /// frame, so shutdown latency is bounded by the frame delay.
    ///
    /// # Errors
    /// Returns the controller's error on the first failed dispatch or close.
    /// No retry is attempted; the session is left as the controller's
    /// implementation defines on error.
    pub fn run<F: FnMut() -> bool>(mut self, mut should_stop: F) -> Result<(), C::Error> {
        while !should_stop() {
            self.advance();
            self.delay.delay_ms(self.config.frame_delay_ms);
            self.render_frame()?;
        }

        self.controller.close()
    }

    /// Renders one frame without the frame delay.
    ///
    /// Advances the phase and dispatches a full fixture pass plus strobe.
    /// For callers that own their loop and handle pacing themselves.
    ///
    /// # Errors
    /// Returns the controller's error on the first failed dispatch.
    pub fn service(&mut self) -> Result<(), C::Error> {
        self.advance();
        self.render_frame()
    }

    /// Closes the controller session without rendering further frames.
    pub fn shutdown(self) -> Result<(), C::Error> {
        self.controller.close()
    }

    /// Returns the current animation phase.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Returns the number of frames rendered so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Returns the gradient being rendered.
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// Returns a reference to the controller handle.
    pub fn controller(&self) -> &C {
        &self.controller
    }

    fn advance(&mut self) {
        self.phase -= self.config.phase_step;
    }

    fn render_frame(&mut self) -> Result<(), C::Error> {
        for address in FixtureAddress::iter() {
            let color = self.gradient.color_at(self.phase, usize::from(address.position()));
            self.controller.set_rgb(address, color)?;
        }
        self.controller.strobe()?;

        self.frames_rendered += 1;
        Ok(())
    }
}
