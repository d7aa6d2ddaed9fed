use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

pub struct MiningRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MiningRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get the total value mined by a character during a month
    ///
    /// Value is the sum of `quantity * average_price` over the character's mining ledger
    /// entries. Entries for ore types without a market price are excluded.
    ///
    /// # Arguments
    /// - `character_id`: Record ID of the character entry in the database
    /// - `year`: Calendar year of the ledger entries
    /// - `month`: Calendar month of the ledger entries, 1-based
    ///
    /// # Returns
    /// The total value, `0.0` if the character has no priced entries for the month
    pub async fn get_character_mining_value(
        &self,
        character_id: i32,
        year: i32,
        month: i32,
    ) -> Result<f64, DbErr> {
        let amount = entity::prelude::EveCharacterMining::find()
            .select_only()
            .expr_as(
                Func::sum(
                    Expr::col((
                        entity::eve_character_mining::Entity,
                        entity::eve_character_mining::Column::Quantity,
                    ))
                    .mul(Expr::col((
                        entity::eve_market_price::Entity,
                        entity::eve_market_price::Column::AveragePrice,
                    ))),
                ),
                "amount",
            )
            .inner_join(entity::eve_market_price::Entity)
            .filter(entity::eve_character_mining::Column::CharacterId.eq(character_id))
            .filter(entity::eve_character_mining::Column::Year.eq(year))
            .filter(entity::eve_character_mining::Column::Month.eq(month))
            .into_tuple::<Option<f64>>()
            .one(self.db)
            .await?;

        Ok(amount.flatten().unwrap_or(0.0))
    }

    /// Get the priced mining ledger rows of every character affiliated with a corporation
    ///
    /// # Arguments
    /// - `corporation_id`: Record ID of the corporation entry in the database
    /// - `year`: Calendar year of the ledger entries
    /// - `month`: Calendar month of the ledger entries, 1-based
    ///
    /// # Returns
    /// One `(character_id, quantity, average_price)` tuple per ledger entry, where
    /// `character_id` is the EVE Online character ID
    pub async fn get_corporation_ledger_rows(
        &self,
        corporation_id: i32,
        year: i32,
        month: i32,
    ) -> Result<Vec<(i64, i64, f64)>, DbErr> {
        entity::prelude::EveCharacterMining::find()
            .select_only()
            .column(entity::eve_character::Column::CharacterId)
            .column(entity::eve_character_mining::Column::Quantity)
            .column(entity::eve_market_price::Column::AveragePrice)
            .inner_join(entity::eve_character::Entity)
            .inner_join(entity::eve_market_price::Entity)
            .filter(entity::eve_character::Column::CorporationId.eq(corporation_id))
            .filter(entity::eve_character_mining::Column::Year.eq(year))
            .filter(entity::eve_character_mining::Column::Month.eq(month))
            .into_tuple::<(i64, i64, f64)>()
            .all(self.db)
            .await
    }
}
