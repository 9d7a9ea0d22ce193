mod value;
pub(crate) use value::Value;

use rowmap_core::{
    async_trait,
    driver::{Driver, Operation, Response},
    stmt::{Row, Value as CoreValue},
    Error, Result,
};
use rowmap_sql::Serializer;
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::sync::Mutex;
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),

    /// One in-memory database shared by every connection, so rows written by
    /// one operation are visible to the next.
    InMemory(Arc<Mutex<RusqliteConnection>>),
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            return Self::in_memory();
        }

        // `sqlite://app.db` parses the first path segment as the host.
        let path = match url.host_str() {
            Some(host) if !host.is_empty() => format!("{host}{}", url.path()),
            _ => url.path().to_string(),
        };

        if path.is_empty() {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not name a database file; url={url_str}"
            )));
        }

        Ok(Self::File(PathBuf::from(path)))
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Ok(Self::InMemory(Arc::new(Mutex::new(connection))))
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory(_) => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    async fn connect(&self) -> Result<Box<dyn rowmap_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory(shared) => Connection::Shared(shared.clone()),
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub enum Connection {
    Owned(RusqliteConnection),
    Shared(Arc<Mutex<RusqliteConnection>>),
}

impl Connection {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self::Owned(connection))
    }
}

#[async_trait]
impl rowmap_core::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match self {
            Connection::Owned(connection) => exec(connection, op),
            Connection::Shared(shared) => {
                let connection = shared.lock().await;
                exec(&connection, op)
            }
        }
    }
}

fn exec(connection: &RusqliteConnection, op: Operation) -> Result<Response> {
    let (sql, query) = match op {
        Operation::Execute(sql) => (sql, false),
        Operation::Query(sql) => (sql, true),
    };

    let mut names = Vec::<String>::new();
    let sql_str = Serializer::sqlite().serialize(&sql.stmt, &mut names);
    let params = sql
        .params
        .bind(&names)?
        .into_iter()
        .map(|value| match value {
            // SQLite stores NaN as NULL.
            CoreValue::F64(v) if v.is_nan() => Err(Error::type_conversion(value, "SQLite REAL")),
            value => Ok(Value::from(value)),
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(sql = %sql_str, params = params.len(), query, "sqlite exec");

    let mut stmt = connection
        .prepare_cached(&sql_str)
        .map_err(Error::driver_operation_failed)?;

    if !query {
        let count = stmt
            .execute(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        return Ok(Response::count(count as _));
    }

    let columns = stmt
        .column_names()
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();

    let mut rows = stmt
        .query(rusqlite::params_from_iter(params.iter()))
        .map_err(Error::driver_operation_failed)?;

    let mut ret = vec![];

    while let Some(row) = rows.next().map_err(Error::driver_operation_failed)? {
        let mut values = Vec::with_capacity(columns.len());

        for index in 0..columns.len() {
            values.push(Value::from_sql(row, index)?.into_inner());
        }

        ret.push(Row::new(columns.clone(), values));
    }

    Ok(Response::rows(ret))
}
