//! Channel-wise color blending.
//!
//! The rig hardware takes 8-bit RGB, so blending happens directly on
//! `Srgb<u8>` with truncating casts rather than going through `Srgb<f32>`.

use palette::Srgb;

/// Linearly blends two colors.
///
/// Each output channel is `b * weight + a * (1 - weight)`, truncated toward
/// zero. A weight of 0.0 returns `a` exactly; weights approaching 1.0
/// approach `b` within one count per channel.
#[inline]
pub fn lerp(a: Srgb<u8>, b: Srgb<u8>, weight: f32) -> Srgb<u8> {
    Srgb::new(
        lerp_channel(a.red, b.red, weight),
        lerp_channel(a.green, b.green, weight),
        lerp_channel(a.blue, b.blue, weight),
    )
}

#[inline]
fn lerp_channel(a: u8, b: u8, weight: f32) -> u8 {
    // Truncating cast; saturates at the u8 bounds.
    (f32::from(b) * weight + f32::from(a) * (1.0 - weight)) as u8
}
