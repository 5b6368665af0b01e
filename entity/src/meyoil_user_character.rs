use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "meyoil_user_character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(unique)]
    pub character_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::meyoil_user::Entity",
        from = "Column::UserId",
        to = "super::meyoil_user::Column::Id",
        on_delete = "Cascade"
    )]
    MeyoilUser,
    #[sea_orm(
        belongs_to = "super::maple_character::Entity",
        from = "Column::CharacterId",
        to = "super::maple_character::Column::Id"
    )]
    MapleCharacter,
}

impl Related<super::meyoil_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MeyoilUser.def()
    }
}

impl Related<super::maple_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MapleCharacter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
