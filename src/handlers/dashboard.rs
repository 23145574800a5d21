use actix_web::{get, HttpResponse};

use crate::dashboard::Dashboard;
use crate::database::Storage;
use crate::employee::Employee;
use crate::errors::JobdeskError;
use crate::job::Job;
use crate::views;

#[get("/")]
pub async fn home(storage: Storage) -> Result<HttpResponse, JobdeskError> {
    let jobs = Job::all(&storage).await?;
    let employees = Employee::all(&storage).await?;

    let dashboard = Dashboard::build(jobs, employees);
    views::render(views::Home::new(dashboard)?)
}
