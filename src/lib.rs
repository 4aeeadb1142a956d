//! A small movie streaming site split into three services:
//!
//! - `movie`: the catalog, JSON over a SQL table ([`catalog`], [`database`], [`schema`])
//! - `payment`: the checkout form ([`payment`])
//! - `web`: the HTML front-end ([`frontend`])
//!
//! Users and sessions belong to a separate user service reached through
//! [`client::UserDirectory`].

pub mod catalog;
pub mod client;
pub mod config;
pub mod database;
pub mod error;
pub mod frontend;
pub mod model;
pub mod outcome;
pub mod payment;
pub mod render;
pub mod schema;

/// Sets up `env_logger` with `<service>=debug,actix_web=info` unless
/// `RUST_LOG` says otherwise.
pub fn init_logging(service: &str) {
    let default = format!("{}=debug,nextflix=debug,actix_web=info", service);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}
