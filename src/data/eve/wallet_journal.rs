use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

/// Journal reference type of an ISK donation between players
pub static PLAYER_DONATION_REF_TYPE: &str = "player_donation";

/// Journal reference types counted as PvE income
pub static BOUNTY_REF_TYPES: [&str; 2] = ["bounty_prizes", "ess_escrow_transfer"];

pub struct WalletJournalRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WalletJournalRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Find player donations of an exact amount sent by any of the provided characters
    ///
    /// # Arguments
    /// - `sender_ids`: EVE Online character IDs the donation may originate from
    /// - `amount`: Exact donation amount
    /// - `start`: Inclusive lower bound of the journal entry date
    /// - `end`: Exclusive upper bound of the journal entry date
    ///
    /// # Returns
    /// The journal IDs of every matching entry
    pub async fn find_donation_journal_ids(
        &self,
        sender_ids: &[i64],
        amount: f64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<i64>, DbErr> {
        if sender_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::EveCorporationWalletJournal::find()
            .select_only()
            .column(entity::eve_corporation_wallet_journal::Column::JournalId)
            .filter(
                entity::eve_corporation_wallet_journal::Column::RefType
                    .eq(PLAYER_DONATION_REF_TYPE),
            )
            .filter(entity::eve_corporation_wallet_journal::Column::Amount.eq(amount))
            .filter(
                entity::eve_corporation_wallet_journal::Column::FirstPartyId
                    .is_in(sender_ids.iter().copied()),
            )
            .filter(entity::eve_corporation_wallet_journal::Column::Date.gte(start))
            .filter(entity::eve_corporation_wallet_journal::Column::Date.lt(end))
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }

    /// Get bounty income recorded in a corporation's wallet, grouped by receiving character
    ///
    /// # Arguments
    /// - `corporation_id`: Record ID of the corporation owning the wallet
    /// - `start`: Inclusive lower bound of the journal entry date
    /// - `end`: Exclusive upper bound of the journal entry date
    ///
    /// # Returns
    /// One `(second_party_id, total)` tuple per receiving character
    pub async fn get_bounty_totals(
        &self,
        corporation_id: i32,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<(Option<i64>, Option<f64>)>, DbErr> {
        entity::prelude::EveCorporationWalletJournal::find()
            .select_only()
            .column(entity::eve_corporation_wallet_journal::Column::SecondPartyId)
            .expr_as(
                Func::sum(Expr::col(
                    entity::eve_corporation_wallet_journal::Column::Amount,
                )),
                "total",
            )
            .filter(entity::eve_corporation_wallet_journal::Column::CorporationId.eq(corporation_id))
            .filter(
                entity::eve_corporation_wallet_journal::Column::RefType
                    .is_in(BOUNTY_REF_TYPES.iter().copied()),
            )
            .filter(entity::eve_corporation_wallet_journal::Column::Date.gte(start))
            .filter(entity::eve_corporation_wallet_journal::Column::Date.lt(end))
            .group_by(entity::eve_corporation_wallet_journal::Column::SecondPartyId)
            .into_tuple::<(Option<i64>, Option<f64>)>()
            .all(self.db)
            .await
    }
}
