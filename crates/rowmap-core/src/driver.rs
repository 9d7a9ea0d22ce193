mod operation;
pub use operation::{Operation, Sql};

mod response;
pub use response::{Response, Rows};

use crate::{async_trait, Result};

use std::{borrow::Cow, fmt::Debug};

/// Opens connections to one database.
///
/// A driver holds configuration only. Every record operation asks it for a
/// fresh [`Connection`] and drops that connection when the operation ends.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The connection URL, for diagnostics.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Serializes the operation's statement in the connection's dialect,
    /// binds its parameters and runs it.
    async fn exec(&mut self, op: Operation) -> Result<Response>;
}
