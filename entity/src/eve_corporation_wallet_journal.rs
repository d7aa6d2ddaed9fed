use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "eve_corporation_wallet_journal")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Record ID of the corporation owning the wallet
    pub corporation_id: i32,
    pub division: i32,
    #[sea_orm(unique)]
    pub journal_id: i64,
    pub date: DateTime,
    pub ref_type: String,
    pub first_party_id: Option<i64>,
    pub second_party_id: Option<i64>,
    pub amount: f64,
    pub reason: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::eve_corporation::Entity",
        from = "Column::CorporationId",
        to = "super::eve_corporation::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    EveCorporation,
}

impl Related<super::eve_corporation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveCorporation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
