use futures::TryStreamExt;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Executor, FromRow, Pool, Sqlite};
use std::str::FromStr;

use crate::{
    entities::{Coordinates, NewPlace, Place},
    error::{unexpected_error, Error},
};

/// Layout shared with existing `places.db` files. Column names, including the
/// camel-cased `imageUri`, must not change.
pub const CREATE_PLACES_TABLE: &str = "CREATE TABLE IF NOT EXISTS places (
    id INTEGER PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    imageUri TEXT NOT NULL,
    address TEXT NOT NULL,
    lat REAL NOT NULL,
    lng REAL NOT NULL
)";

/// What the engine reports back for an insert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub insert_id: i64,
    pub rows_affected: u64,
}

#[derive(Debug, FromRow)]
struct PlaceRow {
    id: i64,
    title: String,
    #[sqlx(rename = "imageUri")]
    image_uri: String,
    address: String,
    lat: f64,
    lng: f64,
}

impl From<PlaceRow> for Place {
    fn from(row: PlaceRow) -> Self {
        Place {
            id: row.id,
            title: row.title,
            image_uri: row.image_uri,
            address: row.address,
            location: Coordinates {
                lat: row.lat,
                lng: row.lng,
            },
        }
    }
}

/// Owns the connection pool for the places database. Construct one per
/// process and hand it to whoever needs it.
#[derive(Clone, Debug)]
pub struct PlaceStore {
    pool: Pool<Sqlite>,
}

impl PlaceStore {
    #[tracing::instrument(name = "PlaceStore::connect")]
    pub async fn connect(db_uri: &str, max_connections: u32) -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str(db_uri)?.create_if_missing(true);

        // every connection to an in-memory database opens a fresh, empty one
        let pool = if is_in_memory(db_uri) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections)
                .connect_with(options)
                .await?
        };

        tracing::info!("connected to {}", db_uri);

        Ok(Self { pool })
    }

    /// Creates the `places` table unless it already exists. Safe to run on
    /// every start.
    #[tracing::instrument(skip(self))]
    pub async fn initialize(&self) -> Result<(), Error> {
        let mut tx = self.pool.begin().await?;
        tx.execute(CREATE_PLACES_TABLE).await?;
        tx.commit().await?;

        tracing::info!("places schema ready");

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn insert_place(&self, place: &NewPlace) -> Result<InsertResult, Error> {
        let mut tx = self.pool.begin().await?;

        let result = tx
            .execute(
                sqlx::query(
                    "INSERT INTO places (title, imageUri, address, lat, lng) VALUES (?, ?, ?, ?, ?)",
                )
                .bind(&place.title)
                .bind(&place.image_uri)
                .bind(&place.address)
                .bind(place.location.lat)
                .bind(place.location.lng),
            )
            .await?;

        // dropping the transaction rolls the write back
        if result.rows_affected() != 1 {
            tracing::warn!("insert affected {} rows", result.rows_affected());
            return Err(unexpected_error());
        }

        tx.commit().await?;

        Ok(InsertResult {
            insert_id: result.last_insert_rowid(),
            rows_affected: result.rows_affected(),
        })
    }

    /// All stored places in the engine's row order.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_places(&self) -> Result<Vec<Place>, Error> {
        let mut tx = self.pool.begin().await?;

        let places: Vec<Place> = sqlx::query_as::<_, PlaceRow>("SELECT * FROM places")
            .fetch(&mut tx)
            .map_ok(Place::from)
            .try_collect()
            .await?;

        tx.commit().await?;

        Ok(places)
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch_place(&self, id: i64) -> Result<Option<Place>, Error> {
        let mut tx = self.pool.begin().await?;

        let maybe_row = sqlx::query_as::<_, PlaceRow>("SELECT * FROM places WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut tx)
            .await?;

        tx.commit().await?;

        Ok(maybe_row.map(Place::from))
    }
}

fn is_in_memory(db_uri: &str) -> bool {
    db_uri.contains(":memory:") || db_uri.contains("mode=memory")
}
