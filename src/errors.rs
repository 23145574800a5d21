use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use askama::Template;

use crate::views::ErrorPage;

#[derive(thiserror::Error, Debug)]
pub enum JobdeskError {
    #[error("Failed to read config file, {}", source)]
    ReadConfig { source: std::io::Error },

    #[error("Failed to parse config file, {}", source)]
    ParseConfig { source: toml::de::Error },

    #[error("Invalid job delete policy '{}', expected orphan, cascade or reject", value)]
    InvalidPolicy { value: String },

    #[error("Failed to create the database directory, {}", source)]
    CreateDatabaseDir { source: std::io::Error },

    #[error("Failed to open the database at {}, {}", path, source)]
    OpenDatabase {
        path: String,
        source: rusqlite::Error,
    },

    #[error("Failed to create the database schema, {}", source)]
    CreateSchema { source: rusqlite::Error },

    #[error("Failed to query the database, {}", source)]
    Query { source: rusqlite::Error },

    #[error("Failed to reach the database, {}", source)]
    Mailbox { source: actix::MailboxError },

    #[error("Failed to read the database handle from the request")]
    ReadStorage {},

    #[error("Failed to render template, {}", source)]
    RenderTemplate { source: askama::Error },

    #[error("Failed to serialize chart data, {}", source)]
    SerializeChart { source: serde_json::Error },

    #[error("{} {} not found", kind, id)]
    NotFound { kind: &'static str, id: i64 },

    #[error("Job {} is still referenced by {} employee(s)", id, employees)]
    JobInUse { id: i64, employees: i64 },

    #[error("Job {} does not exist", id)]
    UnknownJob { id: i64 },
}

impl actix_web::error::ResponseError for JobdeskError {
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let page = ErrorPage {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error"),
            message: self.to_string(),
        };

        match page.render() {
            Ok(body) => HttpResponse::build(status)
                .insert_header((header::CONTENT_TYPE, "text/html; charset=utf-8"))
                .body(body),
            Err(err) => {
                error!("Failed to render the error page, {}", err);
                HttpResponse::build(status)
                    .insert_header((header::CONTENT_TYPE, "text/plain; charset=utf-8"))
                    .body(page.message)
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            JobdeskError::NotFound { .. } => StatusCode::NOT_FOUND,
            JobdeskError::JobInUse { .. } => StatusCode::CONFLICT,
            JobdeskError::UnknownJob { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
