// Route exports
pub mod analysis;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(analysis::configure);
}
