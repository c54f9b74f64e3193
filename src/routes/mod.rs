// Route exports
pub mod errors;
pub mod mentors;
pub mod profile;

use actix_web::web;

pub use mentors::{AppState, MentorListing};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(mentors::configure)
            .configure(profile::configure),
    );
}
