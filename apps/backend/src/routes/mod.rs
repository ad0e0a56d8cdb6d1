use actix_web::web;

pub mod games;
pub mod health;

/// Register every route. `main.rs` and the route tests share this so the
/// tested surface is the served surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}
