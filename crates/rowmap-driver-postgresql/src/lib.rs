mod value;
pub(crate) use value::Value;

use postgres_types::ToSql;
use rowmap_core::{
    async_trait,
    driver::{Driver, Operation, Response},
    stmt::Row,
    Error, Result,
};
use rowmap_sql::Serializer;
use std::borrow::Cow;
use tokio_postgres::{tls::MakeTlsConnect, Client, Config, NoTls, Socket};
use url::Url;

/// Connects to PostgreSQL, one client session per operation.
#[derive(Debug)]
pub struct PostgreSQL {
    url: String,
    config: Config,
}

impl PostgreSQL {
    /// Builds a driver from a `postgresql://` or `postgres://` URL.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if !matches!(url.scheme(), "postgresql" | "postgres") {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `postgresql` scheme; url={url_str}"
            )));
        }

        let host = url.host_str().ok_or_else(|| {
            Error::invalid_connection_url(format!("missing host in connection URL; url={url_str}"))
        })?;

        let dbname = url.path().trim_start_matches('/');
        if dbname.is_empty() {
            return Err(Error::invalid_connection_url(format!(
                "no database specified - missing path in connection URL; url={url_str}"
            )));
        }

        let mut config = Config::new();
        config.host(host);
        config.dbname(dbname);

        if let Some(port) = url.port() {
            config.port(port);
        }

        if !url.username().is_empty() {
            config.user(url.username());
        }

        if let Some(password) = url.password() {
            config.password(password);
        }

        Ok(Self::with_config(url_str, config))
    }

    /// Builds a driver from an existing client configuration.
    pub fn with_config(url: impl Into<String>, config: Config) -> Self {
        Self {
            url: url.into(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl Driver for PostgreSQL {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.url)
    }

    async fn connect(&self) -> Result<Box<dyn rowmap_core::Connection>> {
        Ok(Box::new(
            Connection::connect_with_config(&self.config, NoTls).await?,
        ))
    }
}

/// A client session. The session closes when the connection is dropped.
#[derive(Debug)]
pub struct Connection {
    client: Client,
}

impl Connection {
    pub async fn connect_with_config<T>(config: &Config, tls: T) -> Result<Self>
    where
        T: MakeTlsConnect<Socket> + 'static,
        T::Stream: Send + 'static,
    {
        let (client, connection) = config
            .connect(tls)
            .await
            .map_err(Error::driver_operation_failed)?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(error = %e, "postgresql connection error");
            }
        });

        Ok(Self { client })
    }
}

#[async_trait]
impl rowmap_core::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        let (sql, query) = match op {
            Operation::Execute(sql) => (sql, false),
            Operation::Query(sql) => (sql, true),
        };

        let mut names = Vec::<String>::new();
        let sql_as_str = Serializer::postgresql().serialize(&sql.stmt, &mut names);
        let params = sql
            .params
            .bind(&names)?
            .into_iter()
            .map(Value::from)
            .collect::<Vec<_>>();

        tracing::debug!(sql = %sql_as_str, params = params.len(), query, "postgresql exec");

        let args = params
            .iter()
            .map(|param| param as &(dyn ToSql + Sync))
            .collect::<Vec<_>>();

        if !query {
            let count = self
                .client
                .execute(&sql_as_str, &args)
                .await
                .map_err(Error::driver_operation_failed)?;
            return Ok(Response::count(count));
        }

        let rows = self
            .client
            .query(&sql_as_str, &args)
            .await
            .map_err(Error::driver_operation_failed)?;

        let mut ret = Vec::with_capacity(rows.len());

        for row in &rows {
            let columns = row
                .columns()
                .iter()
                .map(|column| column.name().to_string())
                .collect::<Vec<_>>();

            let mut values = Vec::with_capacity(columns.len());
            for index in 0..columns.len() {
                values.push(value::from_sql(row, index)?);
            }

            ret.push(Row::new(columns, values));
        }

        Ok(Response::rows(ret))
    }
}
