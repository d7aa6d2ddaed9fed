use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct UserCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserCharacterRepository<'a, C> {
    /// Creates a new instance of [`UserCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all characters owned by the provided user
    ///
    /// # Arguments
    /// - `user_id` (`i32`): ID of the user entry in the database
    ///
    /// # Returns
    /// Ownership entries with their character, ordered by ascending character record ID. The
    /// character is `None` if its entry no longer exists.
    pub async fn get_characters_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<
        Vec<(
            entity::auth_user_character::Model,
            Option<entity::eve_character::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::AuthUserCharacter::find()
            .filter(entity::auth_user_character::Column::UserId.eq(user_id))
            .find_also_related(entity::eve_character::Entity)
            .order_by_asc(entity::auth_user_character::Column::CharacterId)
            .all(self.db)
            .await
    }
}
