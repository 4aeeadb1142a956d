//! HTML pages of the web front-end.

use crate::client::{MovieCatalog, UserDirectory};
use crate::config::WebConfig;
use crate::error::AppError;
use crate::model::*;
use crate::outcome::{Fetched, OnFailure};
use crate::render::{render, Tera};
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;
use uuid::Uuid;

type Catalog = web::Data<dyn MovieCatalog>;
type Users = web::Data<dyn UserDirectory>;
type Config = web::Data<WebConfig>;

pub const SESSION_COOKIE: &str = "session";

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/movie/{id}", web::get().to(movie));
}

/// Serves `/static/*` from `dir`.
pub fn static_files(dir: &str) -> actix_files::Files {
    actix_files::Files::new("/static", dir)
}

#[derive(Serialize)]
struct HomePage<'a> {
    movies: &'a [Movie],
    user: &'a User,
    pay_url: Option<String>,
    degraded: bool,
}

#[derive(Serialize)]
struct MoviePage<'a> {
    movie: &'a Movie,
    user: &'a User,
    pay_url: Option<String>,
    degraded: bool,
}

/// The visitor behind the request. `None` inside is the anonymous visitor,
/// which is what a failed lookup degrades to as well.
async fn current_user(req: &HttpRequest, users: &dyn UserDirectory) -> Fetched<Option<User>> {
    let result = match req.cookie(SESSION_COOKIE) {
        None => Ok(None),
        Some(session) => users.user_by_token(session.value()).await.map(Some),
    };
    Fetched::new("user", result, OnFailure::Degrade)
}

fn pay_url(config: &WebConfig, user: &Fetched<Option<User>>) -> Option<String> {
    let user = match user {
        Fetched::Ok(Some(user)) => user,
        _ => return None,
    };
    reqwest::Url::parse_with_params(
        &format!("{}/checkout", config.payment_addr),
        &[("uid", user.id.to_string())],
    )
    .map(String::from)
    .ok()
}

async fn home(
    req: HttpRequest,
    catalog: Catalog,
    users: Users,
    tera: Tera,
    config: Config,
) -> Result<HttpResponse, AppError> {
    let movies = Fetched::new("movie list", catalog.list_movies().await, OnFailure::Degrade);
    let user = current_user(&req, users.get_ref()).await;

    let anonymous = User::default();
    let page = HomePage {
        pay_url: pay_url(&config, &user),
        degraded: movies.is_degraded() || user.is_degraded(),
        movies: movies.value().map(Vec::as_slice).unwrap_or_default(),
        user: user.value().and_then(Option::as_ref).unwrap_or(&anonymous),
    };
    render(&tera, "main.html", &tera::Context::from_serialize(page)?)
}

async fn movie(
    req: HttpRequest,
    id: web::Path<String>,
    catalog: Catalog,
    users: Users,
    tera: Tera,
    config: Config,
) -> Result<HttpResponse, AppError> {
    let id = Uuid::parse_str(&id).map_err(|_| AppError::InvalidId)?;
    let movie = Fetched::new("movie", catalog.get_movie(id).await, config.movie_on_failure);
    let user = current_user(&req, users.get_ref()).await;

    let anonymous = User::default();
    let page = MoviePage {
        pay_url: pay_url(&config, &user),
        degraded: movie.is_degraded() || user.is_degraded(),
        movie: &movie.into_result()?,
        user: user.value().and_then(Option::as_ref).unwrap_or(&anonymous),
    };
    render(&tera, "movie.html", &tera::Context::from_serialize(page)?)
}
