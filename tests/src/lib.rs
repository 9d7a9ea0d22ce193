#[macro_use]
mod macros;

pub mod db;

pub use db_test::DbTest;


mod logging;

pub mod prelude;

use rowmap::{stmt::Type, Db};

/// How a test connects to one kind of database.
#[async_trait::async_trait]
pub trait Setup: Send + Sync + 'static {
    async fn connect(&self) -> rowmap::Result<Db>;

    /// Column type used for fields of type `ty` when a test creates a table.
    fn column_type(&self, ty: Type) -> &'static str;
}
