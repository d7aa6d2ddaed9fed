use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "eve_character_mining")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub character_id: i32,
    pub date: Date,
    pub year: i32,
    pub month: i32,
    pub solar_system_id: i64,
    pub type_id: i64,
    pub quantity: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::eve_character::Entity",
        from = "Column::CharacterId",
        to = "super::eve_character::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    EveCharacter,
}

impl Related<super::eve_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EveCharacter.def()
    }
}

// Ledger entries may reference types without a known price, so the join is declared
// here rather than as a foreign key relation.
impl Related<super::eve_market_price::Entity> for Entity {
    fn to() -> RelationDef {
        Entity::belongs_to(super::eve_market_price::Entity)
            .from(Column::TypeId)
            .to(super::eve_market_price::Column::TypeId)
            .into()
    }
}

impl ActiveModelBehavior for ActiveModel {}
