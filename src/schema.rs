//! Schema migrations and seed data, run by `movie migrate` and `movie seed`.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::AnyPool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn migrate(pool: &AnyPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

pub struct SeedMovie {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub director: &'static str,
    pub year: i32,
    pub age_rating: i32,
    pub poster: &'static str,
    pub video_id: &'static str,
    pub is_paid: bool,
}

pub const SEED_MOVIES: &[SeedMovie] = &[
    SeedMovie {
        id: "a2b0639f-2cc6-44b8-b97b-15d69dbb511e",
        name: "Fight Club",
        description: "David Fincher's 1999 adaptation of the Chuck Palahniuk novel. An \
            anonymous office worker, fed up with consumer life, starts an underground \
            fight club with the soap salesman Tyler Durden.",
        director: "David Fincher",
        year: 1999,
        age_rating: 18,
        poster: "/static/posters/fightclub.svg",
        video_id: "qtRKdVHc-cE",
        is_paid: true,
    },
    SeedMovie {
        id: "72f8b983-3eb4-48db-9ed0-e45cc6bd716b",
        name: "The Godfather",
        description: "Francis Ford Coppola's epic crime drama based on the Mario Puzo \
            novel, with Marlon Brando and Al Pacino as Vito and Michael Corleone.",
        director: "Francis Ford Coppola",
        year: 1972,
        age_rating: 18,
        poster: "/static/posters/father.svg",
        video_id: "ar1SHxgeZUc",
        is_paid: false,
    },
    SeedMovie {
        id: "efd3c33c-e5e2-11ea-adc1-0242ac120002",
        name: "Pulp Fiction",
        description: "Quentin Tarantino's non-linear tale of robbers, hitmen, a boxer \
            and an overdose, named after the pulp magazines of the mid 20th century.",
        director: "Quentin Tarantino",
        year: 1994,
        age_rating: 16,
        poster: "/static/posters/pulpfiction.svg",
        video_id: "s7EdQ4FqbhY",
        is_paid: true,
    },
];

const INSERT_MOVIE: &str = "INSERT INTO movies \
    (movie_id, name, description, director, year, age_rating, poster, youtube_video_id, is_paid) \
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
    ON CONFLICT DO NOTHING";

/// Inserts [`SEED_MOVIES`] in a single transaction. Rows whose id already
/// exists are left alone, so seeding twice is harmless. Returns the number
/// of rows actually inserted.
pub async fn seed(pool: &AnyPool) -> sqlx::Result<u64> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;
    for movie in SEED_MOVIES {
        // an error drops `tx`, which rolls the whole run back
        inserted += sqlx::query(INSERT_MOVIE)
            .bind(movie.id)
            .bind(movie.name)
            .bind(movie.description)
            .bind(movie.director)
            .bind(movie.year)
            .bind(movie.age_rating)
            .bind(movie.poster)
            .bind(movie.video_id)
            .bind(movie.is_paid)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }
    tx.commit().await?;
    Ok(inserted)
}
