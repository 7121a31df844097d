use std::collections::BTreeSet;

use sea_orm::{
    prelude::DateTime,
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::{
    db::{
        attributes::{validate_genres, ArtistAttributes},
        entities::{artist, artist_genre, show, venue},
    },
    error::{AppError, Result},
    services::{listing, ArtistRecord, ArtistSummary, GenreDelta, SearchResults},
};

pub struct ArtistRepository {
    db: DatabaseConnection,
}

impl ArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, attributes: ArtistAttributes, genres: &[String]) -> Result<i32> {
        attributes.validate()?;
        let genres = validate_genres(genres)?;

        let txn = self.db.begin().await?;
        let artist = attributes.into_active_model().insert(&txn).await?;
        insert_genres(&txn, artist.id, &genres).await?;
        txn.commit().await?;

        tracing::info!("Artist {} ({}) created with {} genres", artist.id, artist.name, genres.len());
        Ok(artist.id)
    }

    pub async fn find(&self, id: i32) -> Result<ArtistRecord> {
        let artist = artist::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| not_found(id))?;

        let genres = artist_genre::Entity::find()
            .filter(artist_genre::Column::ArtistId.eq(id))
            .order_by_asc(artist_genre::Column::Name)
            .all(&self.db)
            .await?;

        let shows = show::Entity::find()
            .filter(show::Column::ArtistId.eq(id))
            .find_also_related(venue::Entity)
            .order_by_asc(show::Column::StartTime)
            .all(&self.db)
            .await?;

        Ok(ArtistRecord { artist, genres, shows })
    }

    pub async fn edit(
        &self,
        id: i32,
        attributes: ArtistAttributes,
        genres: &[String],
    ) -> Result<GenreDelta> {
        attributes.validate()?;
        let desired = validate_genres(genres)?;

        let txn = self.db.begin().await?;
        let current = artist::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| not_found(id))?;

        let mut model: artist::ActiveModel = current.into();
        attributes.apply(&mut model);
        model.update(&txn).await?;

        let existing: BTreeSet<String> = artist_genre::Entity::find()
            .filter(artist_genre::Column::ArtistId.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|g| g.name)
            .collect();

        let delta = GenreDelta::reconcile(&existing, &desired);
        if !delta.to_remove.is_empty() {
            artist_genre::Entity::delete_many()
                .filter(artist_genre::Column::ArtistId.eq(id))
                .filter(artist_genre::Column::Name.is_in(delta.to_remove.iter().cloned()))
                .exec(&txn)
                .await?;
        }
        insert_genres(&txn, id, &delta.to_add).await?;
        txn.commit().await?;

        tracing::info!(
            "Artist {} updated: {} genres kept, {} removed, {} added",
            id,
            delta.to_keep.len(),
            delta.to_remove.len(),
            delta.to_add.len()
        );
        Ok(delta)
    }

    /// Shows and genre rows are removed by the cascading foreign keys.
    pub async fn delete(&self, id: i32) -> Result<String> {
        let txn = self.db.begin().await?;
        let artist = artist::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| not_found(id))?;
        let name = artist.name.clone();

        artist::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        tracing::info!("Artist {} ({}) deleted", id, name);
        Ok(name)
    }

    pub async fn list(&self) -> Result<Vec<ArtistSummary>> {
        let artists = artist::Entity::find()
            .order_by_asc(artist::Column::Id)
            .all(&self.db)
            .await?;

        Ok(artists
            .into_iter()
            .map(|a| ArtistSummary {
                id: a.id,
                name: a.name,
            })
            .collect())
    }

    /// Case-insensitive substring search on the artist name.
    pub async fn search(&self, term: &str, now: DateTime) -> Result<SearchResults> {
        let ids: Vec<i32> = artist::Entity::find()
            .select_only()
            .column(artist::Column::Id)
            .column(artist::Column::Name)
            .into_tuple::<(i32, String)>()
            .all(&self.db)
            .await?
            .into_iter()
            .filter(|(_, name)| listing::name_matches(name, term))
            .map(|(id, _)| id)
            .collect();

        let rows = artist::Entity::find()
            .filter(artist::Column::Id.is_in(ids))
            .order_by_asc(artist::Column::Id)
            .find_with_related(show::Entity)
            .all(&self.db)
            .await?;

        tracing::debug!("Artist search '{}' matched {} artists", term, rows.len());
        Ok(listing::search_results(&rows, now))
    }
}

async fn insert_genres(
    txn: &DatabaseTransaction,
    artist_id: i32,
    names: &BTreeSet<String>,
) -> Result<()> {
    if names.is_empty() {
        return Ok(());
    }

    let rows = names.iter().map(|name| artist_genre::ActiveModel {
        artist_id: Set(artist_id),
        name: Set(name.clone()),
    });
    artist_genre::Entity::insert_many(rows)
        .exec_without_returning(txn)
        .await?;
    Ok(())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Artist {} not found", id))
}
