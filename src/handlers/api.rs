use actix_web::{get, web};

use crate::database::Storage;
use crate::errors::JobdeskError;
use crate::job::Job;

#[get("/jobs")]
pub async fn get_jobs(storage: Storage) -> Result<web::Json<Vec<Job>>, JobdeskError> {
    let jobs = Job::all(&storage).await?;

    Ok(web::Json(jobs))
}

#[get("/jobs/{id}")]
pub async fn get_job(
    storage: Storage,
    id: web::Path<i64>,
) -> Result<web::Json<Job>, JobdeskError> {
    let job = Job::find(&storage, id.into_inner()).await?;

    Ok(web::Json(job))
}
