use crate::database::MovieStore;
use crate::error::CatalogError;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

type Store = web::Data<dyn MovieStore>;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/movies", web::route().to(list_movies))
        .route("/movie/{id}", web::route().to(get_movie));
}

/// Default service for the catalog app, so unknown paths answer in JSON too.
pub async fn unknown_route() -> Result<HttpResponse, CatalogError> {
    Err(CatalogError::UnknownRoute)
}

async fn list_movies(store: Store) -> Result<HttpResponse, CatalogError> {
    let movies = store.list_movies().await?;
    Ok(HttpResponse::Ok().json(movies))
}

async fn get_movie(id: web::Path<String>, store: Store) -> Result<HttpResponse, CatalogError> {
    // checked before the store is touched
    let id = Uuid::parse_str(&id).map_err(|_| CatalogError::InvalidId)?;
    let movie = store.get_movie(id).await?.ok_or(CatalogError::NotFound)?;
    Ok(HttpResponse::Ok().json(movie))
}
