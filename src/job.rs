use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

use crate::config::JobDeletePolicy;
use crate::database::Storage;
use crate::employee::Employee;
use crate::errors::JobdeskError;

mod query;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    pub id: i64,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
}

/// Submitted by the create and update job forms.
#[derive(Debug, Deserialize, Serialize)]
pub struct JobForm {
    pub title: String,
    pub company: String,
    pub location: String,
}

impl Job {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Job {
            id: row.get(0)?,
            title: row.get(1)?,
            company: row.get(2)?,
            location: row.get(3)?,
        })
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn company(&self) -> &str {
        self.company.as_deref().unwrap_or_default()
    }

    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }

    pub async fn all(storage: &Storage) -> Result<Vec<Job>, JobdeskError> {
        storage
            .query(query::GET_ALL_JOBS, vec![], Job::from_row)
            .await
    }

    pub async fn get(storage: &Storage, id: i64) -> Result<Option<Job>, JobdeskError> {
        let jobs = storage
            .query(query::GET_JOB_BY_ID, vec![id.into()], Job::from_row)
            .await?;

        Ok(jobs.into_iter().next())
    }

    pub async fn find(storage: &Storage, id: i64) -> Result<Job, JobdeskError> {
        Job::get(storage, id)
            .await?
            .ok_or(JobdeskError::NotFound { kind: "Job", id })
    }

    /// `pattern` is a LIKE pattern, see `search::like_pattern`.
    pub async fn search(storage: &Storage, pattern: &str) -> Result<Vec<Job>, JobdeskError> {
        storage
            .query(
                query::SEARCH_JOBS,
                vec![pattern.to_owned().into()],
                Job::from_row,
            )
            .await
    }

    pub async fn create(storage: &Storage, form: JobForm) -> Result<Job, JobdeskError> {
        let params: Vec<Value> = vec![
            form.title.clone().into(),
            form.company.clone().into(),
            form.location.clone().into(),
        ];
        let id = storage.insert(query::INSERT_JOB, params).await?;
        debug!("Job {} saved in the database", id);

        Ok(Job {
            id,
            title: Some(form.title),
            company: Some(form.company),
            location: Some(form.location),
        })
    }

    pub async fn update(&mut self, storage: &Storage, form: JobForm) -> Result<(), JobdeskError> {
        self.title = Some(form.title);
        self.company = Some(form.company);
        self.location = Some(form.location);

        let params: Vec<Value> = vec![
            self.id.into(),
            self.title.clone().into(),
            self.company.clone().into(),
            self.location.clone().into(),
        ];
        storage.execute(query::UPDATE_JOB, params).await?;
        debug!("Job {} updated", self.id);

        Ok(())
    }

    pub async fn delete(self, storage: &Storage, policy: JobDeletePolicy) -> Result<(), JobdeskError> {
        match policy {
            JobDeletePolicy::Orphan => (),
            JobDeletePolicy::Cascade => {
                let removed = Employee::delete_for_job(storage, self.id).await?;
                debug!("Removed {} employee(s) of job {}", removed, self.id);
            }
            JobDeletePolicy::Reject => {
                let employees = Employee::count_for_job(storage, self.id).await?;
                if employees > 0 {
                    return Err(JobdeskError::JobInUse {
                        id: self.id,
                        employees,
                    });
                }
            }
        }

        storage
            .execute(query::DELETE_JOB, vec![self.id.into()])
            .await?;
        debug!("Job {} deleted", self.id);

        Ok(())
    }
}
