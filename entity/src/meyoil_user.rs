use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "meyoil_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub main_character_id: i32,
    pub password_hash: String,
    pub nexon_api_key: String,
    pub data_collection_agreed: bool,
    pub weekly_reset_enabled: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::maple_character::Entity",
        from = "Column::MainCharacterId",
        to = "super::maple_character::Column::Id"
    )]
    MapleCharacter,
    #[sea_orm(has_many = "super::meyoil_user_character::Entity")]
    MeyoilUserCharacter,
}

impl Related<super::maple_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MapleCharacter.def()
    }
}

impl Related<super::meyoil_user_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MeyoilUserCharacter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
