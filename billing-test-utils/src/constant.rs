//! Tax policy values inserted by `TestBuilder::with_default_settings`.
//!
//! Values are percentages, as stored in the settings table.

/// Mining tax rate of corporations at or above the registration rate.
pub const TEST_HIGH_TIER_MINING_TAX_RATE: f64 = 10.0;

/// Mining tax rate of corporations below the registration rate.
pub const TEST_LOW_TIER_MINING_TAX_RATE: f64 = 20.0;

/// Ore value modifier of corporations at or above the registration rate.
pub const TEST_HIGH_TIER_MODIFIER: f64 = 90.0;

/// Ore value modifier of corporations below the registration rate.
pub const TEST_LOW_TIER_MODIFIER: f64 = 100.0;

/// PvE tax rate of corporations at or above the registration rate.
pub const TEST_HIGH_TIER_PVE_TAX_RATE: f64 = 5.0;

/// PvE tax rate of corporations below the registration rate.
pub const TEST_LOW_TIER_PVE_TAX_RATE: f64 = 15.0;

/// Share of tracked members that must have a valid key for the high compliance tier.
pub const TEST_REGISTRATION_RATE: f64 = 75.0;

/// Setting names paired with their default test value.
pub static DEFAULT_TAX_SETTINGS: [(&str, f64); 7] = [
    ("ioretaxrate", TEST_HIGH_TIER_MINING_TAX_RATE),
    ("oretaxrate", TEST_LOW_TIER_MINING_TAX_RATE),
    ("ioremodifier", TEST_HIGH_TIER_MODIFIER),
    ("oremodifier", TEST_LOW_TIER_MODIFIER),
    ("ipvetaxrate", TEST_HIGH_TIER_PVE_TAX_RATE),
    ("pvetaxrate", TEST_LOW_TIER_PVE_TAX_RATE),
    ("irate", TEST_REGISTRATION_RATE),
];

/// Owner hash used for character ownership fixtures.
pub static TEST_OWNER_HASH: &str = "owner_hash";
