use sea_orm_migration::{prelude::*, schema::*};

static IDX_MAPLE_CHARACTER_NAME: &str = "idx_maple_character_name";
static IDX_MAPLE_CHARACTER_INFO_UPDATED_AT: &str = "idx_maple_character_info_updated_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MapleCharacter::Table)
                    .if_not_exists()
                    .col(pk_auto(MapleCharacter::Id))
                    .col(string_uniq(MapleCharacter::Ocid))
                    .col(string(MapleCharacter::Name))
                    .col(string_null(MapleCharacter::WorldName))
                    .col(string_null(MapleCharacter::CharacterClass))
                    .col(integer_null(MapleCharacter::Level))
                    .col(string_null(MapleCharacter::Image))
                    .col(timestamp(MapleCharacter::CreatedAt))
                    .col(timestamp(MapleCharacter::InfoUpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MAPLE_CHARACTER_NAME)
                    .table(MapleCharacter::Table)
                    .col(MapleCharacter::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MAPLE_CHARACTER_INFO_UPDATED_AT)
                    .table(MapleCharacter::Table)
                    .col(MapleCharacter::InfoUpdatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MAPLE_CHARACTER_INFO_UPDATED_AT)
                    .table(MapleCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MAPLE_CHARACTER_NAME)
                    .table(MapleCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MapleCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MapleCharacter {
    Table,
    Id,
    Ocid,
    Name,
    WorldName,
    CharacterClass,
    Level,
    Image,
    CreatedAt,
    InfoUpdatedAt,
}
