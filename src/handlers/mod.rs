use actix_cors::Cors;
use actix_web::web;

mod api;
mod dashboard;
mod employees;
mod jobs;
mod search;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard::home)
        .service(search::search)
        .service(jobs::list)
        .service(jobs::create_form)
        .service(jobs::create)
        .service(jobs::update_form)
        .service(jobs::update)
        .service(jobs::delete)
        .service(employees::list)
        .service(employees::create_form)
        .service(employees::create)
        .service(employees::update_form)
        .service(employees::update)
        .service(employees::delete)
        .service(
            web::scope("/api")
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allowed_methods(vec!["GET"]),
                )
                .service(api::get_jobs)
                .service(api::get_job),
        );
}
