use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get a character and the corporation it is currently affiliated with
    ///
    /// # Arguments
    /// - `character_id`: EVE Online character ID
    ///
    /// # Returns
    /// - `Some((character, Some(corporation)))` if both entries exist
    /// - `Some((character, None))` if the character's corporation entry is missing
    /// - `None` if the character is unknown
    pub async fn get_by_character_id(
        &self,
        character_id: i64,
    ) -> Result<
        Option<(
            entity::eve_character::Model,
            Option<entity::eve_corporation::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::EveCharacter::find()
            .filter(entity::eve_character::Column::CharacterId.eq(character_id))
            .find_also_related(entity::eve_corporation::Entity)
            .one(self.db)
            .await
    }

    /// Get the EVE Online character IDs of all characters affiliated with a corporation
    ///
    /// # Arguments
    /// - `corporation_id`: Record ID of the corporation entry in the database
    pub async fn get_character_ids_by_corporation(
        &self,
        corporation_id: i32,
    ) -> Result<Vec<i64>, DbErr> {
        entity::prelude::EveCharacter::find()
            .select_only()
            .column(entity::eve_character::Column::CharacterId)
            .filter(entity::eve_character::Column::CorporationId.eq(corporation_id))
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }
}
