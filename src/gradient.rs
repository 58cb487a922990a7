//! The anchor palette and its phase-driven evaluation.

use crate::color::lerp;
use palette::Srgb;

/// Number of anchor colors in a gradient.
pub const PALETTE_SIZE: usize = 5;

/// The default rainbow palette.
pub const RAINBOW: Gradient = Gradient::new([
    Srgb::new(128, 0, 0),
    Srgb::new(128, 128, 0),
    Srgb::new(0, 255, 0),
    Srgb::new(0, 0, 255),
    Srgb::new(128, 0, 255),
]);

/// An ordered, fixed-size palette of anchor colors, traversed cyclically.
///
/// The animation phase selects a rotating pair of adjacent anchors: its
/// integer part (plus the fixture's position slot) picks the pair, its
/// fractional part is the blend weight between them. Adjacent anchors are
/// always blended, so the palette is traversed smoothly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    colors: [Srgb<u8>; PALETTE_SIZE],
}

impl Gradient {
    /// Creates a gradient from its anchor colors.
    pub const fn new(colors: [Srgb<u8>; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// Returns the anchor colors.
    pub const fn colors(&self) -> &[Srgb<u8>; PALETTE_SIZE] {
        &self.colors
    }

    /// Evaluates the gradient at the given phase for one position slot.
    ///
    /// Picks `colors[(floor(phase) + slot) % 5]` and its successor, blended
    /// by the fractional part of `phase`. The phase must be non-negative;
    /// the driver only ever decrements from a large positive start value.
    pub fn color_at(&self, phase: f64, slot: usize) -> Srgb<u8> {
        // `as` truncates toward zero, which is floor for non-negative phase.
        // Also keeps this module core-only (no f64::floor intrinsic).
        let base = phase as u64 as usize;
        let index = (base + slot) % PALETTE_SIZE;
        let next = (index + 1) % PALETTE_SIZE;
        let weight = (phase - (phase as u64) as f64) as f32;

        lerp(self.colors[index], self.colors[next], weight)
    }
}

impl Default for Gradient {
    fn default() -> Self {
        RAINBOW
    }
}
