use crate::{Error, Result};

use rowmap_core::driver::Driver;

use std::sync::OnceLock;
use url::Url;

/// Environment variable naming the database to connect to.
pub const DATABASE_URL: &str = "DATABASE_URL";

/// Returns the value of `DATABASE_URL`.
///
/// The variable is read the first time this is called; later changes to the
/// environment are not observed.
pub fn connection_url() -> Result<&'static str> {
    static URL: OnceLock<Option<String>> = OnceLock::new();

    URL.get_or_init(|| std::env::var(DATABASE_URL).ok())
        .as_deref()
        .ok_or_else(|| Error::missing_configuration(DATABASE_URL))
}

/// Picks a driver by URL scheme.
pub fn driver_for_url(url: &str) -> Result<Box<dyn Driver>> {
    let parsed =
        Url::parse(url).map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

    match parsed.scheme() {
        "postgresql" | "postgres" => postgresql(url),
        "sqlite" => sqlite(url),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "postgresql")]
fn postgresql(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(rowmap_driver_postgresql::PostgreSQL::new(url)?))
}

#[cfg(not(feature = "postgresql"))]
fn postgresql(_url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url(
        "`postgresql` feature not enabled",
    ))
}

#[cfg(feature = "sqlite")]
fn sqlite(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(rowmap_driver_sqlite::Sqlite::new(url)?))
}

#[cfg(not(feature = "sqlite"))]
fn sqlite(_url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url("`sqlite` feature not enabled"))
}
