pub use sea_orm_migration::prelude::*;

mod m20251101_000001_eve_corporation;
mod m20251101_000002_eve_character;
mod m20251101_000003_auth_user;
mod m20251101_000004_auth_user_character;
mod m20251101_000005_eve_corporation_member_tracking;
mod m20251101_000006_eve_market_price;
mod m20251101_000007_eve_character_mining;
mod m20251101_000008_eve_corporation_wallet_journal;
mod m20251101_000009_billing_setting;
mod m20251101_000010_billing_corporation_bill;
mod m20251101_000011_billing_character_bill;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_eve_corporation::Migration),
            Box::new(m20251101_000002_eve_character::Migration),
            Box::new(m20251101_000003_auth_user::Migration),
            Box::new(m20251101_000004_auth_user_character::Migration),
            Box::new(m20251101_000005_eve_corporation_member_tracking::Migration),
            Box::new(m20251101_000006_eve_market_price::Migration),
            Box::new(m20251101_000007_eve_character_mining::Migration),
            Box::new(m20251101_000008_eve_corporation_wallet_journal::Migration),
            Box::new(m20251101_000009_billing_setting::Migration),
            Box::new(m20251101_000010_billing_corporation_bill::Migration),
            Box::new(m20251101_000011_billing_character_bill::Migration),
        ]
    }
}
