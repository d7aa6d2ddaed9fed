use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

pub struct MemberTrackingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberTrackingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Count the tracked members of a corporation
    ///
    /// # Arguments
    /// - `corporation_id`: Record ID of the corporation entry in the database
    ///
    /// # Returns
    /// A tuple of `(registered, total)` where `registered` is the number of tracked members with a
    /// valid key and `total` is the number of tracked members.
    pub async fn count_by_corporation(&self, corporation_id: i32) -> Result<(u64, u64), DbErr> {
        let total = entity::prelude::EveCorporationMemberTracking::find()
            .filter(entity::eve_corporation_member_tracking::Column::CorporationId.eq(corporation_id))
            .count(self.db)
            .await?;

        let registered = entity::prelude::EveCorporationMemberTracking::find()
            .filter(entity::eve_corporation_member_tracking::Column::CorporationId.eq(corporation_id))
            .filter(entity::eve_corporation_member_tracking::Column::KeyOk.eq(true))
            .count(self.db)
            .await?;

        Ok((registered, total))
    }
}
