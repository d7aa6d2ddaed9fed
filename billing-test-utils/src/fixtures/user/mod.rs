//! User and character ownership fixture utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::TEST_OWNER_HASH,
    error::TestError,
    model::{CharacterOwnershipModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    pub setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with an existing character as main.
    ///
    /// The main character is also recorded as owned by the user.
    ///
    /// # Arguments
    /// - `main_character_id` - The EVE Online character ID of the user's main
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user
    /// - `Err(TestError::DbErr)` - The character doesn't exist or an insert failed
    pub async fn insert_user(&self, main_character_id: i64) -> Result<UserModel, TestError> {
        let main_character = self.setup.eve().require_character(main_character_id).await?;

        let user = entity::prelude::AuthUser::insert(entity::auth_user::ActiveModel {
            main_character_id: ActiveValue::Set(main_character.id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        self.insert_user_character_ownership(user.id, main_character_id)
            .await?;

        Ok(user)
    }

    /// Record an existing character as owned by a user.
    ///
    /// # Arguments
    /// - `user_id` - Record ID of the user entry
    /// - `character_id` - The EVE Online character ID of the owned character
    pub async fn insert_user_character_ownership(
        &self,
        user_id: i32,
        character_id: i64,
    ) -> Result<CharacterOwnershipModel, TestError> {
        let character = self.setup.eve().require_character(character_id).await?;

        Ok(
            entity::prelude::AuthUserCharacter::insert(entity::auth_user_character::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(character.id),
                owner_hash: ActiveValue::Set(TEST_OWNER_HASH.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
