use rowmap::{stmt::Type, Db};

use crate::Setup;

/// Environment variable naming the PostgreSQL database tests run against.
pub const URL_VAR: &str = "ROWMAP_TEST_POSTGRES_URL";

pub struct SetupPostgreSQL {
    url: String,
}

impl SetupPostgreSQL {
    /// Returns `None` when `ROWMAP_TEST_POSTGRES_URL` is not set.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var(URL_VAR).ok()?;
        Some(Self { url })
    }
}

#[async_trait::async_trait]
impl Setup for SetupPostgreSQL {
    async fn connect(&self) -> rowmap::Result<Db> {
        Db::connect(&self.url).await
    }

    fn column_type(&self, ty: Type) -> &'static str {
        match ty {
            Type::Bool => "BOOLEAN",
            Type::I16 => "SMALLINT",
            Type::I32 => "INTEGER",
            Type::I64 => "BIGINT",
            Type::F64 => "DOUBLE PRECISION",
            Type::Null | Type::String => "TEXT",
            Type::Bytes => "BYTEA",
            Type::Uuid => "UUID",
            Type::Timestamp => "TIMESTAMPTZ",
            Type::Point => "POINT",
        }
    }
}
