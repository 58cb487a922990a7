#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Gradient`**: A fixed five-entry palette of anchor colors, evaluated
//!   cyclically from an animation phase
//! - **`RainbowDriver`**: Renders the gradient across all 25 fixtures, one
//!   frame at a time, and latches each frame with a strobe commit
//! - **`LightController`**: Trait to implement for your light rig session
//! - **`DelaySource`**: Trait to implement for your frame-pacing mechanism
//! - **`FixtureAddress`**: Typed identifier for one of the 25 fixtures
//!   (5 modules x 5 positions, flattened module-major)
//!
//! Colors are `Srgb<u8>` (0-255 per channel) throughout, matching what the
//! rig hardware consumes. Blending truncates toward zero per channel.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod color;
pub mod controller;
pub mod driver;
pub mod gradient;
pub mod rig;
pub mod time;

pub use color::lerp;
pub use controller::LightController;
pub use driver::{DriverConfig, RainbowDriver};
pub use gradient::{Gradient, PALETTE_SIZE, RAINBOW};
pub use rig::{AddressError, FixtureAddress, FIXTURES_PER_MODULE, FIXTURE_COUNT, MODULE_COUNT};
pub use time::DelaySource;
#[cfg(feature = "std")]
pub use time::StdDelay;
