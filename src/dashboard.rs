use std::collections::HashMap;

use crate::employee::Employee;
use crate::job::Job;

pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, PartialEq)]
pub struct Dashboard {
    pub jobs_count: usize,
    pub employees_count: usize,
    pub last_jobs: Vec<Job>,
    pub last_employees: Vec<Employee>,
    /// Job titles, parallel to `chart_data`.
    pub chart_labels: Vec<String>,
    /// Number of employees per job.
    pub chart_data: Vec<usize>,
}

impl Dashboard {
    /// Both lists are expected in primary key order.
    pub fn build(jobs: Vec<Job>, employees: Vec<Employee>) -> Self {
        let mut per_job: HashMap<i64, usize> = HashMap::new();
        for job_id in employees.iter().filter_map(|employee| employee.job_id) {
            *per_job.entry(job_id).or_default() += 1;
        }

        let chart_labels = jobs.iter().map(|job| job.title().to_owned()).collect();
        let chart_data = jobs
            .iter()
            .map(|job| per_job.get(&job.id).copied().unwrap_or(0))
            .collect();

        Dashboard {
            jobs_count: jobs.len(),
            employees_count: employees.len(),
            last_jobs: last(jobs),
            last_employees: last(employees),
            chart_labels,
            chart_data,
        }
    }
}

fn last<T>(mut items: Vec<T>) -> Vec<T> {
    let start = items.len().saturating_sub(RECENT_LIMIT);
    items.split_off(start)
}
