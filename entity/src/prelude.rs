pub use super::auth_user::Entity as AuthUser;
pub use super::auth_user_character::Entity as AuthUserCharacter;
pub use super::billing_character_bill::Entity as BillingCharacterBill;
pub use super::billing_corporation_bill::Entity as BillingCorporationBill;
pub use super::billing_setting::Entity as BillingSetting;
pub use super::eve_character::Entity as EveCharacter;
pub use super::eve_character_mining::Entity as EveCharacterMining;
pub use super::eve_corporation::Entity as EveCorporation;
pub use super::eve_corporation_member_tracking::Entity as EveCorporationMemberTracking;
pub use super::eve_corporation_wallet_journal::Entity as EveCorporationWalletJournal;
pub use super::eve_market_price::Entity as EveMarketPrice;
