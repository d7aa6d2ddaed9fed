//! User and character ownership repositories.

pub mod user_character;

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};


pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get every user along with their main character
    ///
    /// The main character is `None` when the user's main character entry no longer exists.
    /// Users are returned in ascending record ID order.
    pub async fn get_all_with_main_character(
        &self,
    ) -> Result<
        Vec<(
            entity::auth_user::Model,
            Option<entity::eve_character::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::AuthUser::find()
            .find_also_related(entity::eve_character::Entity)
            .order_by_asc(entity::auth_user::Column::Id)
            .all(self.db)
            .await
    }
}
