use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251018_000001_create_maple_character_table::MapleCharacter;

static FK_USER_MAIN_CHARACTER_ID: &str = "fk_meyoil_user_main_character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MeyoilUser::Table)
                    .if_not_exists()
                    .col(pk_auto(MeyoilUser::Id))
                    .col(integer_uniq(MeyoilUser::MainCharacterId))
                    .col(string(MeyoilUser::PasswordHash))
                    .col(string(MeyoilUser::NexonApiKey))
                    .col(boolean(MeyoilUser::DataCollectionAgreed))
                    .col(boolean(MeyoilUser::WeeklyResetEnabled))
                    .col(timestamp(MeyoilUser::CreatedAt))
                    .col(timestamp(MeyoilUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_MAIN_CHARACTER_ID)
                    .from_tbl(MeyoilUser::Table)
                    .from_col(MeyoilUser::MainCharacterId)
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
                    .name(FK_USER_MAIN_CHARACTER_ID)
                    .table(MeyoilUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MeyoilUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MeyoilUser {
    Table,
    Id,
    MainCharacterId,
    PasswordHash,
    NexonApiKey,
    DataCollectionAgreed,
    WeeklyResetEnabled,
    CreatedAt,
    UpdatedAt,
}
