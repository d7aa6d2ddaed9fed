//! In-memory model factories for EVE data fixtures.
//!
//! These functions build active models with standard test values without touching the
//! database. Fixture methods insert them; tests may also adjust fields before insertion.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};
use sea_orm::ActiveValue;

/// EVE Online ID of CONCORD, the first party of bounty payouts.
pub static CONCORD_ID: i64 = 1000125;

/// Create a mock corporation with default test values.
///
/// # Arguments
/// - `corporation_id` - The EVE Online corporation ID to use
pub fn mock_corporation(corporation_id: i64) -> entity::eve_corporation::ActiveModel {
    entity::eve_corporation::ActiveModel {
        corporation_id: ActiveValue::Set(corporation_id),
        name: ActiveValue::Set(format!("Corporation {}", corporation_id)),
        ticker: ActiveValue::Set("AUTMN".to_string()),
        member_count: ActiveValue::Set(21),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
}

/// Create a mock character with default test values.
///
/// # Arguments
/// - `character_id` - The EVE Online character ID to use
/// - `corporation_record_id` - Record ID of the character's corporation entry
pub fn mock_character(
    character_id: i64,
    corporation_record_id: i32,
) -> entity::eve_character::ActiveModel {
    entity::eve_character::ActiveModel {
        character_id: ActiveValue::Set(character_id),
        corporation_id: ActiveValue::Set(corporation_record_id),
        name: ActiveValue::Set(format!("Character {}", character_id)),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
}

/// Create a mining ledger entry.
///
/// Year and month are derived from `date`. The solar system is fixed to Jita.
///
/// # Arguments
/// - `character_record_id` - Record ID of the mining character's entry
/// - `date` - Day the ore was mined
/// - `type_id` - Ore type ID
/// - `quantity` - Units mined
pub fn mock_mining(
    character_record_id: i32,
    date: NaiveDate,
    type_id: i64,
    quantity: i64,
) -> entity::eve_character_mining::ActiveModel {
    entity::eve_character_mining::ActiveModel {
        character_id: ActiveValue::Set(character_record_id),
        date: ActiveValue::Set(date),
        year: ActiveValue::Set(date.year()),
        month: ActiveValue::Set(date.month() as i32),
        solar_system_id: ActiveValue::Set(30000142),
        type_id: ActiveValue::Set(type_id),
        quantity: ActiveValue::Set(quantity),
        ..Default::default()
    }
}

/// Create a wallet journal entry in the master wallet division.
///
/// # Arguments
/// - `corporation_record_id` - Record ID of the corporation owning the wallet
/// - `journal_id` - Unique journal entry ID
/// - `ref_type` - Journal reference type, e.g. `player_donation`
/// - `date` - Date of the transaction
/// - `amount` - Transaction amount
pub fn mock_journal_entry(
    corporation_record_id: i32,
    journal_id: i64,
    ref_type: &str,
    date: NaiveDateTime,
    amount: f64,
) -> entity::eve_corporation_wallet_journal::ActiveModel {
    entity::eve_corporation_wallet_journal::ActiveModel {
        corporation_id: ActiveValue::Set(corporation_record_id),
        division: ActiveValue::Set(1),
        journal_id: ActiveValue::Set(journal_id),
        date: ActiveValue::Set(date),
        ref_type: ActiveValue::Set(ref_type.to_string()),
        first_party_id: ActiveValue::Set(None),
        second_party_id: ActiveValue::Set(None),
        amount: ActiveValue::Set(amount),
        reason: ActiveValue::Set(None),
        ..Default::default()
    }
}
