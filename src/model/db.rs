//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used throughout the crate, so signatures don't
//! need to spell out the generated `entity` crate paths.

/// Type alias for EVE Online character database model.
///
/// # Fields (from `entity::eve_character::Model`)
/// - `id` - Primary key, database identifier
/// - `character_id` - EVE Online character ID (unique)
/// - `corporation_id` - Record ID of the character's current corporation
/// - `name` - Character name
pub type EveCharacterModel = entity::eve_character::Model;

/// Type alias for EVE Online corporation database model.
///
/// # Fields (from `entity::eve_corporation::Model`)
/// - `id` - Primary key, database identifier
/// - `corporation_id` - EVE Online corporation ID (unique)
/// - `name` - Corporation name
/// - `ticker` - Corporation ticker
/// - `member_count` - Number of members in the corporation
pub type EveCorporationModel = entity::eve_corporation::Model;

/// Type alias for the corporation bill database model.
///
/// One record per corporation and billing period. Tax rates and the modifier are stored as
/// fractions (0.0 - 1.0).
pub type CorporationBillModel = entity::billing_corporation_bill::Model;

/// Type alias for the character bill database model.
///
/// One record per main character, corporation and billing period.
pub type CharacterBillModel = entity::billing_character_bill::Model;
