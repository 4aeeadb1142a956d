use actix_web::{http::header, http::StatusCode, test, web, App};
use async_trait::async_trait;
use nextflix::{catalog, database::MovieStore, model::Movie};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

const FIGHT_CLUB: &str = "a2b0639f-2cc6-44b8-b97b-15d69dbb511e";

#[derive(Default)]
struct StubStore {
    movies: Vec<Movie>,
    broken: bool,
    queries: AtomicUsize,
}

#[async_trait]
impl MovieStore for StubStore {
    async fn list_movies(&self) -> sqlx::Result<Vec<Movie>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(self.movies.clone())
    }

    async fn get_movie(&self, id: Uuid) -> sqlx::Result<Option<Movie>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(self.movies.iter().find(|movie| movie.id == id).cloned())
    }
}

fn fight_club() -> Movie {
    Movie {
        id: Uuid::parse_str(FIGHT_CLUB).unwrap(),
        name: "Fight Club".to_owned(),
        director: "David Fincher".to_owned(),
        year: 1999,
        age_rating: 18,
        poster: "/static/posters/fightclub.svg".to_owned(),
        video_id: "qtRKdVHc-cE".to_owned(),
        is_paid: true,
        ..Movie::default()
    }
}

macro_rules! app {
    ($store:expr) => {{
        let store: Arc<dyn MovieStore> = $store.clone();
        test::init_service(
            App::new()
                .app_data(web::Data::from(store))
                .configure(catalog::routes)
                .default_service(web::route().to(catalog::unknown_route)),
        )
        .await
    }};
}

fn is_json(res: &actix_web::dev::ServiceResponse) -> bool {
    res.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value.starts_with("application/json"))
}

#[actix_web::test]
async fn empty_table_lists_no_movies() {
    let store = Arc::new(StubStore::default());
    let app = app!(store);

    let res = test::call_service(&app, test::TestRequest::get().uri("/movies").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(is_json(&res));
    let movies: Vec<Movie> = test::read_body_json(res).await;
    assert!(movies.is_empty());
}

#[actix_web::test]
async fn lists_movies_with_wire_names() {
    let store = Arc::new(StubStore {
        movies: vec![fight_club()],
        ..StubStore::default()
    });
    let app = app!(store);

    let req = test::TestRequest::get().uri("/movies").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body[0]["id"], FIGHT_CLUB);
    assert_eq!(body[0]["movie_url"], "qtRKdVHc-cE");
    assert_eq!(body[0]["age_rating"], 18);
    assert_eq!(body[0]["is_paid"], true);
}

#[actix_web::test]
async fn finds_movie_by_id() {
    let store = Arc::new(StubStore {
        movies: vec![fight_club()],
        ..StubStore::default()
    });
    let app = app!(store);

    let req = test::TestRequest::get()
        .uri(&format!("/movie/{}", FIGHT_CLUB))
        .to_request();
    let movie: Movie = test::call_and_read_body_json(&app, req).await;
    assert_eq!(movie, fight_club());
}

#[actix_web::test]
async fn invalid_id_never_reaches_the_store() {
    let store = Arc::new(StubStore {
        movies: vec![fight_club()],
        ..StubStore::default()
    });
    let app = app!(store);

    for id in ["not-a-uuid", "42", "a2b0639f-2cc6-44b8-b97b"] {
        let req = test::TestRequest::get()
            .uri(&format!("/movie/{}", id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(is_json(&res));
    }
    assert_eq!(store.queries.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn unknown_id_is_not_found() {
    let store = Arc::new(StubStore::default());
    let app = app!(store);

    let req = test::TestRequest::get()
        .uri(&format!("/movie/{}", Uuid::new_v4()))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(is_json(&res));
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Movie not found");
    assert_eq!(store.queries.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn storage_failure_is_a_server_error() {
    let store = Arc::new(StubStore {
        broken: true,
        ..StubStore::default()
    });
    let app = app!(store);

    let res = test::call_service(&app, test::TestRequest::get().uri("/movies").to_request()).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(is_json(&res));

    let req = test::TestRequest::get()
        .uri(&format!("/movie/{}", FIGHT_CLUB))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(is_json(&res));
}

#[actix_web::test]
async fn every_response_is_json_whatever_the_method() {
    let store = Arc::new(StubStore {
        movies: vec![fight_club()],
        ..StubStore::default()
    });
    let app = app!(store);

    let cases = [
        (test::TestRequest::post().uri("/movies"), StatusCode::OK),
        (test::TestRequest::post().uri("/movie/abc"), StatusCode::BAD_REQUEST),
        (test::TestRequest::get().uri("/movie/"), StatusCode::NOT_FOUND),
        (test::TestRequest::delete().uri("/films"), StatusCode::NOT_FOUND),
    ];
    for (req, status) in cases {
        let res = test::call_service(&app, req.to_request()).await;
        assert_eq!(res.status(), status);
        assert!(is_json(&res));
    }
}
