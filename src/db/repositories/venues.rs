use std::collections::BTreeSet;

use sea_orm::{
    prelude::DateTime,
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::{
    db::{
        attributes::{validate_genres, VenueAttributes},
        entities::{artist, show, venue, venue_genre},
    },
    error::{AppError, Result},
    services::{listing, GenreDelta, GroupedVenueView, SearchResults, VenueRecord},
};

pub struct VenueRepository {
    db: DatabaseConnection,
}

impl VenueRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a venue and its genres atomically, returning the new id.
    pub async fn create(&self, attributes: VenueAttributes, genres: &[String]) -> Result<i32> {
        attributes.validate()?;
        let genres = validate_genres(genres)?;

        let txn = self.db.begin().await?;
        let venue = attributes.into_active_model().insert(&txn).await?;
        insert_genres(&txn, venue.id, &genres).await?;
        txn.commit().await?;

        tracing::info!("Venue {} ({}) created with {} genres", venue.id, venue.name, genres.len());
        Ok(venue.id)
    }

    pub async fn find(&self, id: i32) -> Result<VenueRecord> {
        let venue = venue::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| not_found(id))?;

        let genres = venue_genre::Entity::find()
            .filter(venue_genre::Column::VenueId.eq(id))
            .order_by_asc(venue_genre::Column::Name)
            .all(&self.db)
            .await?;

        let shows = show::Entity::find()
            .filter(show::Column::VenueId.eq(id))
            .find_also_related(artist::Entity)
            .order_by_asc(show::Column::StartTime)
            .all(&self.db)
            .await?;

        Ok(VenueRecord { venue, genres, shows })
    }

    /// Overwrite the venue's attributes and bring its genres in line with
    /// `genres`. Returns the delta that was applied.
    pub async fn edit(
        &self,
        id: i32,
        attributes: VenueAttributes,
        genres: &[String],
    ) -> Result<GenreDelta> {
        attributes.validate()?;
        let desired = validate_genres(genres)?;

        let txn = self.db.begin().await?;
        let current = venue::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| not_found(id))?;

        let mut model: venue::ActiveModel = current.into();
        attributes.apply(&mut model);
        model.update(&txn).await?;

        let existing: BTreeSet<String> = venue_genre::Entity::find()
            .filter(venue_genre::Column::VenueId.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|g| g.name)
            .collect();

        let delta = GenreDelta::reconcile(&existing, &desired);
        if !delta.to_remove.is_empty() {
            venue_genre::Entity::delete_many()
                .filter(venue_genre::Column::VenueId.eq(id))
                .filter(venue_genre::Column::Name.is_in(delta.to_remove.iter().cloned()))
                .exec(&txn)
                .await?;
        }
        insert_genres(&txn, id, &delta.to_add).await?;
        txn.commit().await?;

        tracing::info!(
            "Venue {} updated: {} genres kept, {} removed, {} added",
            id,
            delta.to_keep.len(),
            delta.to_remove.len(),
            delta.to_add.len()
        );
        Ok(delta)
    }

    /// Delete a venue. Its shows and genre rows go with it through the
    /// cascading foreign keys. Returns the deleted venue's name.
    pub async fn delete(&self, id: i32) -> Result<String> {
        let txn = self.db.begin().await?;
        let venue = venue::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| not_found(id))?;
        let name = venue.name.clone();

        venue::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        tracing::info!("Venue {} ({}) deleted", id, name);
        Ok(name)
    }

    pub async fn list_grouped(&self, now: DateTime) -> Result<Vec<GroupedVenueView>> {
        let rows = venue::Entity::find()
            .order_by_asc(venue::Column::Id)
            .find_with_related(show::Entity)
            .all(&self.db)
            .await?;

        Ok(listing::group_by_location(&rows, now))
    }

    /// Case-insensitive substring search on the venue name.
    pub async fn search(&self, term: &str, now: DateTime) -> Result<SearchResults> {
        let ids: Vec<i32> = venue::Entity::find()
            .select_only()
            .column(venue::Column::Id)
            .column(venue::Column::Name)
            .into_tuple::<(i32, String)>()
            .all(&self.db)
            .await?
            .into_iter()
            .filter(|(_, name)| listing::name_matches(name, term))
            .map(|(id, _)| id)
            .collect();

        let rows = venue::Entity::find()
            .filter(venue::Column::Id.is_in(ids))
            .order_by_asc(venue::Column::Id)
            .find_with_related(show::Entity)
            .all(&self.db)
            .await?;

        tracing::debug!("Venue search '{}' matched {} venues", term, rows.len());
        Ok(listing::search_results(&rows, now))
    }
}

async fn insert_genres(
    txn: &DatabaseTransaction,
    venue_id: i32,
    names: &BTreeSet<String>,
) -> Result<()> {
    if names.is_empty() {
        return Ok(());
    }

    let rows = names.iter().map(|name| venue_genre::ActiveModel {
        venue_id: Set(venue_id),
        name: Set(name.clone()),
    });
    venue_genre::Entity::insert_many(rows)
        .exec_without_returning(txn)
        .await?;
    Ok(())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Venue {} not found", id))
}
