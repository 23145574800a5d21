use actix::prelude::*;
use actix_web::dev::Payload;
use actix_web::{web, HttpRequest};
use futures::future;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Result};
use std::fs;
use std::path::Path;

use crate::errors::JobdeskError;

const SCHEMA: &str = include_str!("schema.sql");

pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens the SQLite file at `path` and makes sure both tables exist.
    pub fn open(path: &str) -> Result<Self, JobdeskError> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|err| JobdeskError::CreateDatabaseDir { source: err })?;
            }
        }

        let connection = Connection::open(path).map_err(|err| JobdeskError::OpenDatabase {
            path: path.to_owned(),
            source: err,
        })?;

        // job_id links are soft, employees may outlive their job
        connection
            .pragma_update(None, "foreign_keys", false)
            .map_err(|err| JobdeskError::CreateSchema { source: err })?;

        debug!("Creating database schema");
        connection
            .execute_batch(SCHEMA)
            .map_err(|err| JobdeskError::CreateSchema { source: err })?;

        Ok(Self { connection })
    }
}

impl Actor for Database {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Context<Self>) {
        debug!("Connected to the database");
    }

    fn stopped(&mut self, _ctx: &mut Context<Self>) {
        debug!("Disconnected from database");
    }
}

pub struct Execute {
    pub query: &'static str,
    pub params: Vec<Value>,
}

impl Message for Execute {
    type Result = Result<usize>;
}

impl Handler<Execute> for Database {
    type Result = Result<usize>;

    fn handle(&mut self, execute: Execute, _ctx: &mut Context<Self>) -> Self::Result {
        self.connection
            .execute(execute.query, params_from_iter(execute.params))
    }
}

/// Same as `Execute` but answers with the rowid of the inserted row.
pub struct Insert {
    pub query: &'static str,
    pub params: Vec<Value>,
}

impl Message for Insert {
    type Result = Result<i64>;
}

impl Handler<Insert> for Database {
    type Result = Result<i64>;

    fn handle(&mut self, insert: Insert, _ctx: &mut Context<Self>) -> Self::Result {
        self.connection
            .execute(insert.query, params_from_iter(insert.params))?;

        Ok(self.connection.last_insert_rowid())
    }
}

pub struct Query<T, F>
where
    T: 'static,
    F: FnMut(&rusqlite::Row<'_>) -> Result<T>,
{
    pub query: &'static str,
    pub params: Vec<Value>,
    pub map_result: F,
}

impl<T, F> Message for Query<T, F>
where
    T: 'static,
    F: FnMut(&rusqlite::Row<'_>) -> Result<T>,
{
    type Result = Result<Vec<T>>;
}

impl<T, F> Handler<Query<T, F>> for Database
where
    T: 'static,
    F: FnMut(&rusqlite::Row<'_>) -> Result<T>,
{
    type Result = Result<Vec<T>>;

    fn handle(&mut self, query: Query<T, F>, _ctx: &mut Context<Self>) -> Self::Result {
        let result: Result<Vec<T>> = self
            .connection
            .prepare(query.query)?
            .query_map(params_from_iter(query.params), query.map_result)?
            .collect();

        result
    }
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Close;

impl Handler<Close> for Database {
    type Result = ();

    fn handle(&mut self, _close: Close, ctx: &mut Context<Self>) {
        ctx.stop();
    }
}

/// Per-request handle on the database actor, dropped with the request.
#[derive(Clone)]
pub struct Storage {
    database: Addr<Database>,
}

impl Storage {
    pub fn new(database: Addr<Database>) -> Self {
        Self { database }
    }

    pub async fn query<T, F>(
        &self,
        query: &'static str,
        params: Vec<Value>,
        map_result: F,
    ) -> Result<Vec<T>, JobdeskError>
    where
        T: Send + 'static,
        F: FnMut(&rusqlite::Row<'_>) -> Result<T> + Send + 'static,
    {
        self.database
            .send(Query {
                query,
                params,
                map_result,
            })
            .await
            .map_err(|err| JobdeskError::Mailbox { source: err })?
            .map_err(|err| JobdeskError::Query { source: err })
    }

    pub async fn execute(
        &self,
        query: &'static str,
        params: Vec<Value>,
    ) -> Result<usize, JobdeskError> {
        self.database
            .send(Execute { query, params })
            .await
            .map_err(|err| JobdeskError::Mailbox { source: err })?
            .map_err(|err| JobdeskError::Query { source: err })
    }

    pub async fn insert(&self, query: &'static str, params: Vec<Value>) -> Result<i64, JobdeskError> {
        self.database
            .send(Insert { query, params })
            .await
            .map_err(|err| JobdeskError::Mailbox { source: err })?
            .map_err(|err| JobdeskError::Query { source: err })
    }
}

impl actix_web::FromRequest for Storage {
    type Error = JobdeskError;
    type Future = future::Ready<Result<Self, JobdeskError>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let storage = req
            .app_data::<web::Data<Addr<Database>>>()
            .map(|database| Storage::new(database.get_ref().clone()))
            .ok_or(JobdeskError::ReadStorage {});

        future::ready(storage)
    }
}

#[cfg(test)]
pub fn open_in_memory() -> Addr<Database> {
    Database::open(":memory:")
        .expect("Failed to open in-memory database")
        .start()
}
