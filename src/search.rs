use crate::database::Storage;
use crate::employee::Employee;
use crate::errors::JobdeskError;
use crate::job::Job;

pub struct JobMatch {
    pub job: Job,
    pub employees: Vec<Employee>,
}

pub struct SearchResults {
    pub query: String,
    pub jobs: Vec<JobMatch>,
    pub employees: Vec<Employee>,
}

/// Builds a LIKE pattern that matches `query` as a literal substring. The
/// queries using it declare `\` as the escape character.
pub fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    pattern
}

/// Case-insensitive substring search over job title, company and location
/// and over employee name and email. An empty query matches everything.
pub async fn run(storage: &Storage, query: &str) -> Result<SearchResults, JobdeskError> {
    let pattern = like_pattern(query);

    let mut jobs = Vec::new();
    for job in Job::search(storage, &pattern).await? {
        let employees = Employee::for_job(storage, job.id).await?;
        jobs.push(JobMatch { job, employees });
    }

    let employees = Employee::search(storage, &pattern).await?;
    debug!(
        "Search '{}' matched {} job(s) and {} employee(s)",
        query,
        jobs.len(),
        employees.len()
    );

    Ok(SearchResults {
        query: query.to_owned(),
        jobs,
        employees,
    })
}
