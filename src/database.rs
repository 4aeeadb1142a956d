use crate::model::*;
use async_trait::async_trait;
use sqlx::any::{AnyPoolOptions, AnyRow};
use sqlx::{AnyPool, Row};
use std::time::Duration;
use uuid::Uuid;

// sqlite hands booleans back as integers, so both drivers get an integer here
const SELECT_MOVIES: &str = "SELECT movie_id, name, description, director, year, age_rating, \
     poster, youtube_video_id, CASE WHEN is_paid THEN 1 ELSE 0 END AS is_paid FROM movies";

/// Read access to the movie table.
#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn list_movies(&self) -> sqlx::Result<Vec<Movie>>;
    /// `Ok(None)` when no row has this id.
    async fn get_movie(&self, id: Uuid) -> sqlx::Result<Option<Movie>>;
}

#[async_trait]
impl MovieStore for AnyPool {
    async fn list_movies(&self) -> sqlx::Result<Vec<Movie>> {
        let rows = sqlx::query(SELECT_MOVIES).fetch_all(self).await?;
        rows.iter().map(movie_from_row).collect()
    }

    async fn get_movie(&self, id: Uuid) -> sqlx::Result<Option<Movie>> {
        let query = format!("{} WHERE movie_id = $1", SELECT_MOVIES);
        sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(self)
            .await?
            .as_ref()
            .map(movie_from_row)
            .transpose()
    }
}

fn movie_from_row(row: &AnyRow) -> sqlx::Result<Movie> {
    let id: String = row.try_get("movie_id")?;
    let is_paid: i32 = row.try_get("is_paid")?;
    Ok(Movie {
        id: Uuid::parse_str(&id).map_err(|err| sqlx::Error::ColumnDecode {
            index: "movie_id".to_owned(),
            source: Box::new(err),
        })?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        director: row.try_get("director")?,
        year: row.try_get("year")?,
        age_rating: row.try_get("age_rating")?,
        poster: row.try_get("poster")?,
        video_id: row.try_get("youtube_video_id")?,
        is_paid: is_paid != 0,
    })
}

/// Row count of `movies`, used by the seed command to report what it did.
pub async fn count_movies(pool: &AnyPool) -> sqlx::Result<i64> {
    let row = sqlx::query("SELECT COUNT(*) AS n FROM movies")
        .fetch_one(pool)
        .await?;
    row.try_get("n")
}

/// Opens the pool. Works for any url the `any` driver knows, which is
/// `postgres://` in production and `sqlite:` in tests.
pub async fn connect(url: &str, acquire_timeout: Duration) -> sqlx::Result<AnyPool> {
    sqlx::any::install_default_drivers();
    let mut options = AnyPoolOptions::new().acquire_timeout(acquire_timeout);
    if url.starts_with("sqlite::memory:") {
        // Every sqlite connection opens its own in-memory database.
        options = options.max_connections(1);
    }
    options.connect(url).await
}
