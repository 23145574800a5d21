use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::str::FromStr;

use crate::errors::JobdeskError;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE: &str = "./data.db";
pub const DEFAULT_CONFIG: &str = ".jobdeskrc";

/// Contents of the optional `.jobdeskrc` file. Every key may be left out.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub port: Option<u16>,
    pub database: Option<String>,
    pub on_job_delete: Option<JobDeletePolicy>,
    pub validate_employee_job: Option<bool>,
}

impl Config {
    /// Reads `path`, or `.jobdeskrc` when no path was given. Only the
    /// implicit `.jobdeskrc` may be missing.
    pub fn load(path: Option<&str>) -> Result<Self, JobdeskError> {
        let content = match fs::read_to_string(path.unwrap_or(DEFAULT_CONFIG)) {
            Ok(content) => content,
            Err(err) if path.is_none() && err.kind() == ErrorKind::NotFound => {
                debug!("No {} file, using defaults", DEFAULT_CONFIG);
                return Ok(Self::default());
            }
            Err(err) => return Err(JobdeskError::ReadConfig { source: err }),
        };

        toml::from_str(&content).map_err(|err| JobdeskError::ParseConfig { source: err })
    }
}

/// What happens to employees when the job they reference is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobDeletePolicy {
    /// Keep the employees, their `job_id` keeps pointing at the deleted job.
    #[default]
    Orphan,
    Cascade,
    /// Refuse to delete a job while any employee references it.
    Reject,
}

impl FromStr for JobDeletePolicy {
    type Err = JobdeskError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "orphan" => Ok(JobDeletePolicy::Orphan),
            "cascade" => Ok(JobDeletePolicy::Cascade),
            "reject" => Ok(JobDeletePolicy::Reject),
            _ => Err(JobdeskError::InvalidPolicy {
                value: value.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Policy {
    pub on_job_delete: JobDeletePolicy,
    pub validate_employee_job: bool,
}

/// Effective settings for `serve`: command line flags win over the config
/// file, which wins over the defaults.
#[derive(Debug)]
pub struct Settings {
    pub port: u16,
    pub database: String,
    pub policy: Policy,
}

impl Settings {
    pub fn resolve(matches: &clap::ArgMatches, config: Config) -> Result<Self, JobdeskError> {
        let port = matches
            .get_one::<u16>("port")
            .copied()
            .or(config.port)
            .unwrap_or(DEFAULT_PORT);

        let database = matches
            .get_one::<String>("database")
            .cloned()
            .or(config.database)
            .unwrap_or_else(|| DEFAULT_DATABASE.to_owned());
        let database = shellexpand::tilde(&database).into_owned();

        let on_job_delete = match matches.get_one::<String>("on-job-delete") {
            Some(value) => value.parse()?,
            None => config.on_job_delete.unwrap_or_default(),
        };

        let validate_employee_job = if matches.get_flag("validate-employee-job") {
            true
        } else if matches.get_flag("no-validate-employee-job") {
            false
        } else {
            config.validate_employee_job.unwrap_or(false)
        };

        Ok(Settings {
            port,
            database,
            policy: Policy {
                on_job_delete,
                validate_employee_job,
            },
        })
    }
}
