use crate::error::AppError;
use actix_web::{web, HttpResponse};

pub type Tera = web::Data<tera::Tera>;

/// Loads every template of one service, e.g. `templates/web/**/*`.
pub fn load_templates(template_dir: &str, service: &str) -> tera::Result<tera::Tera> {
    tera::Tera::new(&format!("{}/{}/**/*", template_dir, service))
}

pub fn render(tera: &tera::Tera, name: &str, ctx: &tera::Context) -> Result<HttpResponse, AppError> {
    let body = tera.render(name, ctx)?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
