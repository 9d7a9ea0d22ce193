mod builder;
pub use builder::Builder;

mod connect;
pub use connect::{connection_url, driver_for_url, DATABASE_URL};

use crate::{stmt::Row, Params, Record, Result, Table, Value, WriteOp};

use rowmap_core::{
    adapter::Registry,
    driver::{Driver, Operation, Response},
    stmt::Statement,
    Error,
};

use std::sync::Arc;

/// Shared state between all `Db` clones.
pub(crate) struct Shared {
    pub(crate) driver: Box<dyn Driver>,
    pub(crate) registry: Registry,
}

/// A database handle.
///
/// Holds the driver configuration and the adapter registry. Every operation
/// opens its own connection and drops it before returning, so clones can be
/// used from any number of tasks at once.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects to the database at `url` with the standard adapters.
    pub async fn connect(url: &str) -> Result<Db> {
        Builder::default().connect(url).await
    }

    /// Connects to the database named by the `DATABASE_URL` environment
    /// variable.
    pub async fn from_env() -> Result<Db> {
        Db::connect(connection_url()?).await
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.shared.driver
    }

    pub fn registry(&self) -> &Registry {
        &self.shared.registry
    }

    /// A handle bound to one table and key field.
    pub fn table<T: Record>(&self, name: &str, key: &str) -> Table<'_, T> {
        Table::new(self, name, key)
    }

    /// Runs `sql` and returns its only row, if any.
    ///
    /// Fails with a too-many-records error when the query returns more than
    /// one row.
    pub async fn query_single<T: Record>(&self, sql: &str, params: Params) -> Result<Option<T>> {
        self.fetch_single(Statement::raw(sql), params).await
    }

    /// Runs `sql` and returns every row.
    pub async fn query_many<T: Record>(&self, sql: &str, params: Params) -> Result<Vec<T>> {
        let rows = self.fetch(Statement::raw(sql), params).await?;
        self.load_rows(rows)
    }

    /// Inserts `record` into `table`.
    pub async fn create<T: Record>(&self, table: &str, record: &T) -> Result<()> {
        let stmt = Statement::insert(table, T::schema());
        let count = self.execute_stmt(stmt, record.params()).await?;
        check_affected(count, WriteOp::Create, table, None)
    }

    /// Selects the row of `table` whose `key` column equals `value`.
    pub async fn load<T: Record>(
        &self,
        table: &str,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<Option<T>> {
        let params = Params::new().with(key, value);
        self.fetch_single(Statement::select(table, key), params)
            .await
    }

    /// Overwrites every column of the row whose `key` column equals the
    /// record's key field.
    pub async fn update<T: Record>(&self, table: &str, key: &str, record: &T) -> Result<()> {
        let stmt = Statement::update(table, key, T::schema());
        let count = self.execute_stmt(stmt, record.params()).await?;
        check_affected(count, WriteOp::Update, table, Some(key))
    }

    /// Deletes the row of `table` whose `key` column equals `value`.
    pub async fn delete(&self, table: &str, key: &str, value: impl Into<Value>) -> Result<()> {
        let params = Params::new().with(key, value);
        let count = self.execute_stmt(Statement::delete(table, key), params).await?;
        check_affected(count, WriteOp::Delete, table, Some(key))
    }

    /// Runs `sql` and returns the number of affected rows.
    pub async fn execute(&self, sql: &str, params: Params) -> Result<u64> {
        self.execute_stmt(Statement::raw(sql), params).await
    }

    async fn exec(&self, stmt: Statement, mut params: Params, query: bool) -> Result<Response> {
        tracing::trace!(table = stmt.table(), params = params.len(), query, "rowmap exec");

        self.shared.registry.encode_params(&mut params)?;

        let op = if query {
            Operation::query(stmt, params)
        } else {
            Operation::execute(stmt, params)
        };

        let mut connection = self.shared.driver.connect().await?;
        connection.exec(op).await
    }

    async fn execute_stmt(&self, stmt: Statement, params: Params) -> Result<u64> {
        self.exec(stmt, params, false).await?.into_count()
    }

    async fn fetch(&self, stmt: Statement, params: Params) -> Result<Vec<Row>> {
        self.exec(stmt, params, true).await?.into_rows()
    }

    async fn fetch_single<T: Record>(&self, stmt: Statement, params: Params) -> Result<Option<T>> {
        let mut rows = self.fetch(stmt, params).await?;

        match rows.len() {
            0 => Ok(None),
            1 => {
                let row = rows.swap_remove(0);
                self.load_row(row).map(Some)
            }
            n => Err(Error::too_many_records(format!(
                "expected at most one row, got {n}; record={}",
                T::schema().name
            ))),
        }
    }

    fn load_rows<T: Record>(&self, rows: Vec<Row>) -> Result<Vec<T>> {
        rows.into_iter().map(|row| self.load_row(row)).collect()
    }

    fn load_row<T: Record>(&self, mut row: Row) -> Result<T> {
        self.shared.registry.decode_row(T::schema(), &mut row)?;
        T::load(row)
    }
}

fn check_affected(count: u64, op: WriteOp, table: &str, key: Option<&str>) -> Result<()> {
    if count > 0 {
        return Ok(());
    }

    tracing::debug!(%op, table, key, "no rows affected");

    let context = match key {
        Some(key) => format!("table={table} key={key}"),
        None => format!("table={table}"),
    };
    Err(Error::record_not_affected(op, context))
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("driver", &self.shared.driver)
            .field("registry", &self.shared.registry)
            .finish()
    }
}
