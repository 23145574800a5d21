use rusqlite::types::Value;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::database::Storage;
use crate::errors::JobdeskError;

mod query;

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub job_id: Option<i64>,
}

/// An employee together with the job it references. `job_found` is false
/// when `job_id` is empty or names a deleted job.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRow {
    pub employee: Employee,
    pub job_found: bool,
    pub job_title: Option<String>,
}

impl EmployeeRow {
    pub fn job_label(&self) -> String {
        match (self.job_found, self.employee.job_id) {
            (true, _) => self.job_title.clone().unwrap_or_default(),
            (false, Some(job_id)) => missing_job_label(job_id),
            (false, None) => String::new(),
        }
    }
}

pub fn missing_job_label(job_id: i64) -> String {
    format!("#{} (missing)", job_id)
}

/// Submitted by the create and update employee forms. An empty `job_id`
/// means the employee has no job.
#[derive(Debug, Deserialize, Serialize)]
pub struct EmployeeForm {
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub job_id: Option<i64>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

impl Employee {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Employee {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            job_id: row.get(3)?,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    pub async fn all(storage: &Storage) -> Result<Vec<Employee>, JobdeskError> {
        storage
            .query(query::GET_ALL_EMPLOYEES, vec![], Employee::from_row)
            .await
    }

    pub async fn all_with_job(storage: &Storage) -> Result<Vec<EmployeeRow>, JobdeskError> {
        storage
            .query(query::GET_ALL_EMPLOYEES_WITH_JOB, vec![], |row| {
                Ok(EmployeeRow {
                    employee: Employee::from_row(row)?,
                    job_found: row.get::<_, Option<i64>>(4)?.is_some(),
                    job_title: row.get(5)?,
                })
            })
            .await
    }

    pub async fn find(storage: &Storage, id: i64) -> Result<Employee, JobdeskError> {
        storage
            .query(query::GET_EMPLOYEE_BY_ID, vec![id.into()], Employee::from_row)
            .await?
            .into_iter()
            .next()
            .ok_or(JobdeskError::NotFound {
                kind: "Employee",
                id,
            })
    }

    pub async fn for_job(storage: &Storage, job_id: i64) -> Result<Vec<Employee>, JobdeskError> {
        storage
            .query(
                query::GET_EMPLOYEES_BY_JOB,
                vec![job_id.into()],
                Employee::from_row,
            )
            .await
    }

    pub async fn count_for_job(storage: &Storage, job_id: i64) -> Result<i64, JobdeskError> {
        let counts = storage
            .query(query::COUNT_EMPLOYEES_BY_JOB, vec![job_id.into()], |row| {
                row.get::<_, i64>(0)
            })
            .await?;

        Ok(counts.into_iter().next().unwrap_or(0))
    }

    pub async fn delete_for_job(storage: &Storage, job_id: i64) -> Result<usize, JobdeskError> {
        storage
            .execute(query::DELETE_EMPLOYEES_BY_JOB, vec![job_id.into()])
            .await
    }

    /// `pattern` is a LIKE pattern, see `search::like_pattern`.
    pub async fn search(storage: &Storage, pattern: &str) -> Result<Vec<Employee>, JobdeskError> {
        storage
            .query(
                query::SEARCH_EMPLOYEES,
                vec![pattern.to_owned().into()],
                Employee::from_row,
            )
            .await
    }

    pub async fn create(storage: &Storage, form: EmployeeForm) -> Result<Employee, JobdeskError> {
        let params: Vec<Value> = vec![
            form.name.clone().into(),
            form.email.clone().into(),
            form.job_id.into(),
        ];
        let id = storage.insert(query::INSERT_EMPLOYEE, params).await?;
        debug!("Employee {} saved in the database", id);

        Ok(Employee {
            id,
            name: Some(form.name),
            email: Some(form.email),
            job_id: form.job_id,
        })
    }

    pub async fn update(
        &mut self,
        storage: &Storage,
        form: EmployeeForm,
    ) -> Result<(), JobdeskError> {
        self.name = Some(form.name);
        self.email = Some(form.email);
        self.job_id = form.job_id;

        let params: Vec<Value> = vec![
            self.id.into(),
            self.name.clone().into(),
            self.email.clone().into(),
            self.job_id.into(),
        ];
        storage.execute(query::UPDATE_EMPLOYEE, params).await?;
        debug!("Employee {} updated", self.id);

        Ok(())
    }

    pub async fn delete(self, storage: &Storage) -> Result<(), JobdeskError> {
        storage
            .execute(query::DELETE_EMPLOYEE, vec![self.id.into()])
            .await?;
        debug!("Employee {} deleted", self.id);

        Ok(())
    }
}
