use sea_orm::{
    prelude::DateTime, DatabaseConnection, EntityTrait, LoaderTrait, QueryOrder, Set,
    TransactionTrait,
};

use crate::{
    db::entities::{artist, show, venue},
    error::{AppError, Result},
    services::ShowView,
};

pub struct ShowRepository {
    db: DatabaseConnection,
}

impl ShowRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Book `artist_id` at `venue_id` for `start_time`.
    ///
    /// Both parents must exist and the `(venue, artist, start_time)` slot must
    /// be free. The checks run inside the insert's transaction; a concurrent
    /// booking that slips past them is still caught by the primary key and
    /// reported as a duplicate.
    pub async fn create(&self, venue_id: i32, artist_id: i32, start_time: DateTime) -> Result<()> {
        let txn = self.db.begin().await?;

        if venue::Entity::find_by_id(venue_id).one(&txn).await?.is_none() {
            return Err(AppError::Reference(format!("Venue {} does not exist", venue_id)));
        }
        if artist::Entity::find_by_id(artist_id).one(&txn).await?.is_none() {
            return Err(AppError::Reference(format!("Artist {} does not exist", artist_id)));
        }
        if show::Entity::find_by_id((venue_id, artist_id, start_time))
            .one(&txn)
            .await?
            .is_some()
        {
            return Err(AppError::Duplicate(format!(
                "Artist {} is already booked at venue {} for {}",
                artist_id, venue_id, start_time
            )));
        }

        let booking = show::ActiveModel {
            venue_id: Set(venue_id),
            artist_id: Set(artist_id),
            start_time: Set(start_time),
        };
        show::Entity::insert(booking)
            .exec_without_returning(&txn)
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Show booked: artist {} at venue {} on {}",
            artist_id,
            venue_id,
            start_time
        );
        Ok(())
    }

    /// Every show with both of its parents, earliest first.
    pub async fn list(&self) -> Result<Vec<ShowView>> {
        let rows = show::Entity::find()
            .find_also_related(venue::Entity)
            .order_by_asc(show::Column::StartTime)
            .order_by_asc(show::Column::VenueId)
            .order_by_asc(show::Column::ArtistId)
            .all(&self.db)
            .await?;

        let shows: Vec<show::Model> = rows.iter().map(|(show, _)| show.clone()).collect();
        let artists = shows.load_one(artist::Entity, &self.db).await?;

        rows.iter()
            .zip(artists.iter())
            .map(|((show, venue), artist)| {
                ShowView::from_parts(show, venue.as_ref(), artist.as_ref())
            })
            .collect()
    }
}
