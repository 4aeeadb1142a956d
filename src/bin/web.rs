use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use nextflix::client::{http_client, HttpCatalog, HttpUserDirectory, MovieCatalog, UserDirectory};
use nextflix::{config::WebConfig, frontend, render};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    nextflix::init_logging("web");
    let config = WebConfig::load()?;
    info!("Downstream auth: {:?}", config.auth);
    info!("Movie page on catalog failure: {:?}", config.movie_on_failure);

    let tera = web::Data::new(render::load_templates(&config.template_dir, "web")?);
    let client = http_client(config.http_timeout)?;
    let catalog: web::Data<dyn MovieCatalog> = web::Data::from(
        Arc::new(HttpCatalog::new(client.clone(), config.movie_addr.clone())) as Arc<dyn MovieCatalog>,
    );
    let users: web::Data<dyn UserDirectory> = web::Data::from(
        Arc::new(HttpUserDirectory::new(client, config.user_addr.clone())) as Arc<dyn UserDirectory>,
    );
    let port = config.port;
    let static_dir = config.static_dir.clone();
    let config = web::Data::new(config);

    info!("Starting on port {}", port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(tera.clone())
            .app_data(catalog.clone())
            .app_data(users.clone())
            .app_data(config.clone())
            .configure(frontend::routes)
            .service(frontend::static_files(&static_dir))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;
    Ok(())
}
