//! Checkout pages of the payment service.

use crate::client::UserDirectory;
use crate::config::PaymentConfig;
use crate::error::AppError;
use crate::render::{render, Tera};
use actix_web::{web, HttpResponse};
use log::{info, warn};
use serde::{Deserialize, Serialize};

type Users = web::Data<dyn UserDirectory>;
type Config = web::Data<PaymentConfig>;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/checkout", web::get().to(checkout_form))
        .route("/checkout", web::post().to(checkout));
}

#[derive(Deserialize)]
pub struct CheckoutQuery {
    #[serde(default)]
    uid: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct Card {
    pub uid: String,
    pub pan: String,
    pub date: String,
    pub cvc: String,
}

#[derive(Serialize)]
struct Message<'a> {
    msg: &'a str,
    back_url: &'a str,
}

/// Stand-in for a payment processor. A card is turned down only when the
/// number, the expiry date and the cvc are all different from the test card.
pub fn card_accepted(card: &Card) -> bool {
    !(card.pan != "4444444444444444" && card.date != "12/12" && card.cvc != "123")
}

fn message(tera: &tera::Tera, msg: &str, back_url: &str) -> Result<HttpResponse, AppError> {
    let ctx = tera::Context::from_serialize(Message { msg, back_url })?;
    render(tera, "msg.html", &ctx)
}

/// Link back to the form for `uid`, under the public address of this service.
pub fn form_url(config: &PaymentConfig, uid: &str) -> String {
    let mut url = config.public_addr.clone();
    let path = format!("{}/checkout", url.path().trim_end_matches('/'));
    url.set_path(&path);
    url.set_fragment(None);
    url.query_pairs_mut().clear().append_pair("uid", uid);
    url.into()
}

async fn checkout_form(
    query: web::Query<CheckoutQuery>,
    tera: Tera,
    config: Config,
) -> Result<HttpResponse, AppError> {
    if query.uid.is_empty() {
        return message(&tera, "The user identifier is missing.", &config.web_addr);
    }
    let mut ctx = tera::Context::new();
    ctx.insert("uid", &query.uid);
    render(&tera, "payform.html", &ctx)
}

async fn checkout(
    card: web::Form<Card>,
    users: Users,
    tera: Tera,
    config: Config,
) -> Result<HttpResponse, AppError> {
    let retry_url = form_url(&config, &card.uid);
    if !card_accepted(&card) {
        info!("card declined for user {:?}", card.uid);
        return message(&tera, "Invalid payment details.", &retry_url);
    }

    if let Err(err) = users.mark_paid(&card.uid).await {
        warn!("Payment error for user {:?}: {}", card.uid, err);
        return message(&tera, "An error occurred while processing the payment.", &retry_url);
    }

    info!("user {:?} has paid", card.uid);
    message(&tera, "Payment completed successfully.", &config.web_addr)
}
