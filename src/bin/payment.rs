use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use nextflix::client::{http_client, HttpUserDirectory, UserDirectory};
use nextflix::{config::PaymentConfig, payment, render};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    nextflix::init_logging("payment");
    let config = PaymentConfig::load()?;
    info!("Downstream auth: {:?}", config.auth);

    let tera = web::Data::new(render::load_templates(&config.template_dir, "payment")?);
    let client = http_client(config.http_timeout)?;
    let users: web::Data<dyn UserDirectory> = web::Data::from(
        Arc::new(HttpUserDirectory::new(client, config.user_addr.clone())) as Arc<dyn UserDirectory>,
    );
    let port = config.port;
    let config = web::Data::new(config);

    info!("Starting on port {}", port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(tera.clone())
            .app_data(users.clone())
            .app_data(config.clone())
            .configure(payment::routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;
    Ok(())
}
