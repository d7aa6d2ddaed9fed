pub mod prelude;

pub mod auth_user;
pub mod auth_user_character;
pub mod billing_character_bill;
pub mod billing_corporation_bill;
pub mod billing_setting;
pub mod eve_character;
pub mod eve_character_mining;
pub mod eve_corporation;
pub mod eve_corporation_member_tracking;
pub mod eve_corporation_wallet_journal;
pub mod eve_market_price;
