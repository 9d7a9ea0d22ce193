use crate::{Db, Params, Record, Result, Value};

use std::marker::PhantomData;

/// A table name and key field bound to a record type.
///
/// Created with [`Db::table`]. Every method forwards to the `Db` operation of
/// the same name.
pub struct Table<'a, T> {
    db: &'a Db,
    name: String,
    key: String,
    _p: PhantomData<fn() -> T>,
}

impl<'a, T: Record> Table<'a, T> {
    pub(crate) fn new(db: &'a Db, name: &str, key: &str) -> Self {
        Self {
            db,
            name: name.to_string(),
            key: key.to_string(),
            _p: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub async fn create(&self, record: &T) -> Result<()> {
        self.db.create(&self.name, record).await
    }

    pub async fn load(&self, value: impl Into<Value>) -> Result<Option<T>> {
        self.db.load(&self.name, &self.key, value).await
    }

    pub async fn update(&self, record: &T) -> Result<()> {
        self.db.update(&self.name, &self.key, record).await
    }

    pub async fn delete(&self, value: impl Into<Value>) -> Result<()> {
        self.db.delete(&self.name, &self.key, value).await
    }

    /// Every row of the table.
    pub async fn all(&self) -> Result<Vec<T>> {
        let sql = format!("SELECT * FROM {}", self.name);
        self.db.query_many(&sql, Params::new()).await
    }
}

impl<T> std::fmt::Debug for Table<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("name", &self.name)
            .field("key", &self.key)
            .finish()
    }
}
