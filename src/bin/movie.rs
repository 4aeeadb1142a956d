use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::{Parser, Subcommand};
use log::info;
use nextflix::{catalog, config::CatalogConfig, database, database::MovieStore, schema};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "movie", about = "Movie catalog service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply schema migrations and exit
    Migrate,
    /// Insert the sample movies and exit
    Seed,
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    nextflix::init_logging("movie");
    let cli = Cli::parse();
    let config = CatalogConfig::load()?;
    let pool = database::connect(&config.database_url, config.acquire_timeout).await?;

    match cli.command {
        Some(Command::Migrate) => {
            schema::migrate(&pool).await?;
            info!("Migrations complete");
            return Ok(());
        }
        Some(Command::Seed) => {
            let inserted = schema::seed(&pool).await?;
            info!(
                "Seed data inserted: {} new, {} movies in total",
                inserted,
                database::count_movies(&pool).await?
            );
            return Ok(());
        }
        None => {}
    }

    let store: web::Data<dyn MovieStore> = web::Data::from(Arc::new(pool) as Arc<dyn MovieStore>);
    info!("Starting on port {}", config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(catalog::routes)
            .default_service(web::route().to(catalog::unknown_route))
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await?;
    Ok(())
}
