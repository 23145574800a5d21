use actix_web::{get, post, web, HttpResponse};

use crate::database::Storage;
use crate::errors::JobdeskError;
use crate::job::{Job, JobForm};
use crate::views;
use crate::Context;

#[get("/jobs")]
pub async fn list(storage: Storage) -> Result<HttpResponse, JobdeskError> {
    let jobs = Job::all(&storage).await?;

    views::render(views::Jobs { jobs })
}

#[get("/create")]
pub async fn create_form() -> Result<HttpResponse, JobdeskError> {
    views::render(views::CreateJob {})
}

#[post("/create")]
pub async fn create(
    storage: Storage,
    form: web::Form<JobForm>,
) -> Result<HttpResponse, JobdeskError> {
    let job = Job::create(&storage, form.into_inner()).await?;
    info!("Created job {}", job.id);

    Ok(views::redirect("/jobs"))
}

#[get("/update/{id}")]
pub async fn update_form(
    storage: Storage,
    id: web::Path<i64>,
) -> Result<HttpResponse, JobdeskError> {
    let job = Job::find(&storage, id.into_inner()).await?;

    views::render(views::UpdateJob { job })
}

#[post("/update/{id}")]
pub async fn update(
    storage: Storage,
    id: web::Path<i64>,
    form: web::Form<JobForm>,
) -> Result<HttpResponse, JobdeskError> {
    let mut job = Job::find(&storage, id.into_inner()).await?;
    job.update(&storage, form.into_inner()).await?;
    info!("Updated job {}", job.id);

    Ok(views::redirect("/jobs"))
}

#[post("/delete/{id}")]
pub async fn delete(
    storage: Storage,
    ctx: web::Data<Context>,
    id: web::Path<i64>,
) -> Result<HttpResponse, JobdeskError> {
    let job = Job::find(&storage, id.into_inner()).await?;
    let id = job.id;
    job.delete(&storage, ctx.policy.on_job_delete).await?;
    info!("Deleted job {}", id);

    Ok(views::redirect("/jobs"))
}
