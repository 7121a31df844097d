use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_venue_table::Venue;
use super::m20240101_000002_create_artist_table::Artist;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VenueGenre::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(VenueGenre::VenueId).integer().not_null())
                    .col(ColumnDef::new(VenueGenre::Name).string_len(30).not_null())
                    .primary_key(
                        Index::create()
                            .col(VenueGenre::VenueId)
                            .col(VenueGenre::Name),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_venuegenre_venue_id")
                            .from(VenueGenre::Table, VenueGenre::VenueId)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ArtistGenre::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ArtistGenre::ArtistId).integer().not_null())
                    .col(ColumnDef::new(ArtistGenre::Name).string_len(30).not_null())
                    .primary_key(
                        Index::create()
                            .col(ArtistGenre::ArtistId)
                            .col(ArtistGenre::Name),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artistgenre_artist_id")
                            .from(ArtistGenre::Table, ArtistGenre::ArtistId)
                            .to(Artist::Table, Artist::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArtistGenre::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VenueGenre::Table).to_owned())
            .await
    }
}

// Table names follow the original schema: `venuegenre` / `artistgenre`.
#[derive(DeriveIden)]
pub enum VenueGenre {
    #[sea_orm(iden = "venuegenre")]
    Table,
    VenueId,
    Name,
}

#[derive(DeriveIden)]
pub enum ArtistGenre {
    #[sea_orm(iden = "artistgenre")]
    Table,
    ArtistId,
    Name,
}
