use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251018_000001_create_maple_character_table::MapleCharacter,
    m20251018_000002_create_meyoil_user_table::MeyoilUser,
};

static IDX_USER_CHARACTER_USER_ID: &str = "idx_meyoil_user_character_user_id";
static FK_USER_CHARACTER_USER_ID: &str = "fk_meyoil_user_character_user_id";
static FK_USER_CHARACTER_CHARACTER_ID: &str = "fk_meyoil_user_character_character_id";

/// Ownership links: a character belongs to at most one user (unique `character_id`) and a
/// user's links are deleted with the user.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MeyoilUserCharacter::Table)
                    .if_not_exists()
                    .col(pk_auto(MeyoilUserCharacter::Id))
                    .col(integer(MeyoilUserCharacter::UserId))
                    .col(integer_uniq(MeyoilUserCharacter::CharacterId))
                    .col(timestamp(MeyoilUserCharacter::CreatedAt))
                    .col(timestamp(MeyoilUserCharacter::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_CHARACTER_USER_ID)
                    .table(MeyoilUserCharacter::Table)
                    .col(MeyoilUserCharacter::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_CHARACTER_USER_ID)
                    .from_tbl(MeyoilUserCharacter::Table)
                    .from_col(MeyoilUserCharacter::UserId)
                    .to_tbl(MeyoilUser::Table)
                    .to_col(MeyoilUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_CHARACTER_CHARACTER_ID)
                    .from_tbl(MeyoilUserCharacter::Table)
                    .from_col(MeyoilUserCharacter::CharacterId)
                    .to_tbl(MapleCharacter::Table)
                    .to_col(MapleCharacter::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_CHARACTER_CHARACTER_ID)
                    .table(MeyoilUserCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_CHARACTER_USER_ID)
                    .table(MeyoilUserCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_CHARACTER_USER_ID)
                    .table(MeyoilUserCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MeyoilUserCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MeyoilUserCharacter {
    Table,
    Id,
    UserId,
    CharacterId,
    CreatedAt,
    UpdatedAt,
}
