//! Database model type aliases for test utilities.

/// Type alias for user database model.
pub type UserModel = entity::auth_user::Model;

/// Type alias for character ownership database model.
pub type CharacterOwnershipModel = entity::auth_user_character::Model;

/// Type alias for EVE Online character database model.
pub type EveCharacterModel = entity::eve_character::Model;

/// Type alias for EVE Online corporation database model.
pub type EveCorporationModel = entity::eve_corporation::Model;

/// Type alias for corporation member tracking database model.
pub type MemberTrackingModel = entity::eve_corporation_member_tracking::Model;

/// Type alias for market price database model.
pub type MarketPriceModel = entity::eve_market_price::Model;

/// Type alias for mining ledger entry database model.
pub type MiningModel = entity::eve_character_mining::Model;

/// Type alias for corporation wallet journal entry database model.
pub type WalletJournalModel = entity::eve_corporation_wallet_journal::Model;

/// Type alias for billing setting database model.
pub type SettingModel = entity::billing_setting::Model;

/// Type alias for corporation bill database model.
pub type CorporationBillModel = entity::billing_corporation_bill::Model;

/// Type alias for character bill database model.
pub type CharacterBillModel = entity::billing_character_bill::Model;
