use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct SettingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SettingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get the settings matching the provided names
    ///
    /// Names without a stored setting are omitted from the result.
    pub async fn get_many(
        &self,
        names: &[&str],
    ) -> Result<Vec<entity::billing_setting::Model>, DbErr> {
        entity::prelude::BillingSetting::find()
            .filter(entity::billing_setting::Column::Name.is_in(names.iter().copied()))
            .all(self.db)
            .await
    }
}
