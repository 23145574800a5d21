use actix_web::http::header;
use actix_web::HttpResponse;
use askama::Template;

use crate::dashboard::Dashboard;
use crate::employee::{self, Employee, EmployeeRow};
use crate::errors::JobdeskError;
use crate::job::Job;
use crate::search::{JobMatch, SearchResults};

#[derive(Template)]
#[template(path = "home.html")]
pub struct Home {
    pub jobs_count: usize,
    pub employees_count: usize,
    pub last_jobs: Vec<Job>,
    pub last_employees: Vec<Employee>,
    pub chart_labels: String,
    pub chart_data: String,
}

impl Home {
    pub fn new(dashboard: Dashboard) -> Result<Self, JobdeskError> {
        Ok(Home {
            jobs_count: dashboard.jobs_count,
            employees_count: dashboard.employees_count,
            last_jobs: dashboard.last_jobs,
            last_employees: dashboard.last_employees,
            chart_labels: script_json(&dashboard.chart_labels)?,
            chart_data: script_json(&dashboard.chart_data)?,
        })
    }
}

#[derive(Template)]
#[template(path = "search.html")]
pub struct Search {
    pub query: String,
    pub jobs: Vec<JobMatch>,
    pub employees: Vec<Employee>,
}

impl From<SearchResults> for Search {
    fn from(results: SearchResults) -> Self {
        Search {
            query: results.query,
            jobs: results.jobs,
            employees: results.employees,
        }
    }
}

#[derive(Template)]
#[template(path = "jobs.html")]
pub struct Jobs {
    pub jobs: Vec<Job>,
}

#[derive(Template)]
#[template(path = "create_job.html")]
pub struct CreateJob {}

#[derive(Template)]
#[template(path = "update.html")]
pub struct UpdateJob {
    pub job: Job,
}

#[derive(Template)]
#[template(path = "employees.html")]
pub struct Employees {
    pub employees: Vec<EmployeeRow>,
}

#[derive(Template)]
#[template(path = "create_employee.html")]
pub struct CreateEmployee {
    pub jobs: Vec<JobOption>,
}

#[derive(Template)]
#[template(path = "update_employee.html")]
pub struct UpdateEmployee {
    pub employee: Employee,
    pub jobs: Vec<JobOption>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub code: u16,
    pub reason: &'static str,
    pub message: String,
}

/// One entry of the job select control on employee forms.
pub struct JobOption {
    pub id: i64,
    pub title: String,
    pub selected: bool,
}

impl JobOption {
    /// A `selected` id naming none of `jobs` still gets an option, so saving
    /// the form keeps the employee's dangling `job_id`.
    pub fn list(jobs: Vec<Job>, selected: Option<i64>) -> Vec<JobOption> {
        let mut options: Vec<JobOption> = jobs
            .into_iter()
            .map(|job| JobOption {
                id: job.id,
                title: job.title().to_owned(),
                selected: selected == Some(job.id),
            })
            .collect();

        if let Some(id) = selected {
            if !options.iter().any(|option| option.selected) {
                options.insert(
                    0,
                    JobOption {
                        id,
                        title: employee::missing_job_label(id),
                        selected: true,
                    },
                );
            }
        }

        options
    }
}

pub fn render<T: Template>(template: T) -> Result<HttpResponse, JobdeskError> {
    let body = template
        .render()
        .map_err(|err| JobdeskError::RenderTemplate { source: err })?;

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/html; charset=utf-8"))
        .body(body))
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

// Embedded in a <script> block, so "</" must not end it early.
fn script_json<T: serde::Serialize>(value: &T) -> Result<String, JobdeskError> {
    serde_json::to_string(value)
        .map(|json| json.replace("</", "<\\/"))
        .map_err(|err| JobdeskError::SerializeChart { source: err })
}
