use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "maple_character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub ocid: String,
    pub name: String,
    pub world_name: Option<String>,
    pub character_class: Option<String>,
    pub level: Option<i32>,
    pub image: Option<String>,
    pub created_at: DateTime,
    pub info_updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::meyoil_user::Entity")]
    MeyoilUser,
    #[sea_orm(has_one = "super::meyoil_user_character::Entity")]
    MeyoilUserCharacter,
}

impl Related<super::meyoil_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MeyoilUser.def()
    }
}

impl Related<super::meyoil_user_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MeyoilUserCharacter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
