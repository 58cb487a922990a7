//! Fixture addressing for the rig's module/position grid.

/// Number of modules in the rig.
pub const MODULE_COUNT: usize = 5;

/// Number of fixture positions per module.
pub const FIXTURES_PER_MODULE: usize = 5;

/// Total number of addressable fixtures.
pub const FIXTURE_COUNT: usize = MODULE_COUNT * FIXTURES_PER_MODULE;

/// Errors from constructing a fixture address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressError {
    /// Module index exceeds the rig's module count.
    ModuleOutOfRange(u8),

    /// Position index exceeds the module's fixture count.
    PositionOutOfRange(u8),
}

impl core::fmt::Display for AddressError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AddressError::ModuleOutOfRange(module) => {
                write!(f, "module {} exceeds rig module count of {}", module, MODULE_COUNT)
            }
            AddressError::PositionOutOfRange(position) => {
                write!(
                    f,
                    "position {} exceeds per-module fixture count of {}",
                    position, FIXTURES_PER_MODULE
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AddressError {}

/// Identifies one addressable fixture on the rig.
///
/// Fixtures are laid out module-major: the flat index is
/// `module * FIXTURES_PER_MODULE + position`, in the range `0..FIXTURE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixtureAddress(u8);

impl FixtureAddress {
    /// Creates an address from module and position indices.
    ///
    /// # Errors
    /// * `ModuleOutOfRange` - `module >= MODULE_COUNT`
    /// * `PositionOutOfRange` - `position >= FIXTURES_PER_MODULE`
    pub fn new(module: u8, position: u8) -> Result<Self, AddressError> {
        if usize::from(module) >= MODULE_COUNT {
            return Err(AddressError::ModuleOutOfRange(module));
        }
        if usize::from(position) >= FIXTURES_PER_MODULE {
            return Err(AddressError::PositionOutOfRange(position));
        }

        Ok(Self(module * FIXTURES_PER_MODULE as u8 + position))
    }

    /// Returns the flat fixture index in `0..FIXTURE_COUNT`.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the module index in `0..MODULE_COUNT`.
    pub const fn module(self) -> u8 {
        self.0 / FIXTURES_PER_MODULE as u8
    }

    /// Returns the position within the module in `0..FIXTURES_PER_MODULE`.
    pub const fn position(self) -> u8 {
        self.0 % FIXTURES_PER_MODULE as u8
    }

    /// Iterates over all fixture addresses in module-major order.
    pub fn iter() -> impl Iterator<Item = FixtureAddress> {
        (0..FIXTURE_COUNT as u8).map(FixtureAddress)
    }
}

impl From<FixtureAddress> for usize {
    fn from(address: FixtureAddress) -> Self {
        usize::from(address.0)
    }
}
