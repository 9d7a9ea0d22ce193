use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use postgres_types::{accepts, private::BytesMut, to_sql_checked, FromSql, IsNull, ToSql, Type};
use rowmap_core::{
    stmt::{Point, Value as CoreValue},
    Error, Result,
};
use tokio_postgres::Row;
use uuid::Uuid;

type BoxError = Box<dyn std::error::Error + Sync + Send>;

/// A `rowmap` value bound as a statement parameter.
///
/// The server infers each parameter's type from the statement; the value is
/// encoded for that type and rejected when the two do not fit.
#[derive(Debug)]
pub struct Value(pub(crate) CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> std::result::Result<IsNull, BoxError>
    where
        Self: Sized,
    {
        let value = &self.0;

        match value {
            CoreValue::Null => Ok(IsNull::Yes),
            CoreValue::Bool(v) => checked(v, value, ty, out),
            CoreValue::I16(v) => integer_to_sql((*v).into(), value, ty, out),
            CoreValue::I32(v) => integer_to_sql((*v).into(), value, ty, out),
            CoreValue::I64(v) => integer_to_sql(*v, value, ty, out),
            CoreValue::F64(v) => match *ty {
                Type::FLOAT4 => (*v as f32).to_sql(ty, out),
                _ => checked(v, value, ty, out),
            },
            CoreValue::String(v) => checked(v, value, ty, out),
            CoreValue::Bytes(v) => checked(v, value, ty, out),
            CoreValue::Uuid(v) => match *ty {
                Type::UUID => v.to_sql(ty, out),
                _ => checked(&v.to_string(), value, ty, out),
            },
            CoreValue::Timestamp(v) => match *ty {
                Type::TIMESTAMPTZ => v.to_sql(ty, out),
                Type::TIMESTAMP => v.naive_utc().to_sql(ty, out),
                _ => checked(&v.to_rfc3339_opts(SecondsFormat::AutoSi, true), value, ty, out),
            },
            CoreValue::Point(v) => match *ty {
                Type::POINT => PgPoint(*v).to_sql(ty, out),
                _ => checked(&v.to_string(), value, ty, out),
            },
        }
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

/// Encodes `v` when its native type accepts `ty`.
fn checked<T: ToSql>(
    v: &T,
    value: &CoreValue,
    ty: &Type,
    out: &mut BytesMut,
) -> std::result::Result<IsNull, BoxError> {
    if T::accepts(ty) {
        v.to_sql(ty, out)
    } else {
        Err(mismatch(value, ty))
    }
}

fn integer_to_sql(
    v: i64,
    value: &CoreValue,
    ty: &Type,
    out: &mut BytesMut,
) -> std::result::Result<IsNull, BoxError> {
    match *ty {
        Type::INT2 => i16::try_from(v)?.to_sql(ty, out),
        Type::INT4 => i32::try_from(v)?.to_sql(ty, out),
        Type::INT8 => v.to_sql(ty, out),
        _ => Err(mismatch(value, ty)),
    }
}

fn mismatch(value: &CoreValue, ty: &Type) -> BoxError {
    format!("cannot encode {} as PostgreSQL `{ty}`", value.kind()).into()
}

/// `POINT` on the wire: two big-endian `f64`s.
#[derive(Debug)]
struct PgPoint(Point);

impl ToSql for PgPoint {
    fn to_sql(&self, _ty: &Type, out: &mut BytesMut) -> std::result::Result<IsNull, BoxError> {
        out.extend_from_slice(&self.0.x.to_be_bytes());
        out.extend_from_slice(&self.0.y.to_be_bytes());
        Ok(IsNull::No)
    }

    accepts!(POINT);
    to_sql_checked!();
}

impl<'a> FromSql<'a> for PgPoint {
    fn from_sql(_ty: &Type, raw: &'a [u8]) -> std::result::Result<Self, BoxError> {
        let (Ok(x), Ok(y)) = (
            <[u8; 8]>::try_from(raw.get(..8).unwrap_or_default()),
            <[u8; 8]>::try_from(raw.get(8..).unwrap_or_default()),
        ) else {
            return Err(format!("invalid POINT length {}", raw.len()).into());
        };

        Ok(PgPoint(Point::new(f64::from_be_bytes(x), f64::from_be_bytes(y))))
    }

    accepts!(POINT);
}

/// A column's undecoded wire bytes.
struct RawColumn<'a>(&'a [u8]);

impl<'a> FromSql<'a> for RawColumn<'a> {
    fn from_sql(_ty: &Type, raw: &'a [u8]) -> std::result::Result<Self, BoxError> {
        Ok(RawColumn(raw))
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }
}

/// Reads the column at `index` according to its PostgreSQL type.
pub(crate) fn from_sql(row: &Row, index: usize) -> Result<CoreValue> {
    let column = &row.columns()[index];
    let raw = row
        .try_get::<_, Option<RawColumn<'_>>>(index)
        .map_err(Error::driver_operation_failed)?;

    decode(column.type_(), raw.map(|raw| raw.0)).map_err(|err| {
        err.context(rowmap_core::err!("column={}", column.name()))
    })
}

fn get<'a, T: FromSql<'a>>(ty: &Type, raw: Option<&'a [u8]>) -> Result<Option<T>> {
    Option::<T>::from_sql_nullable(ty, raw)
        .map_err(|err| Error::from(anyhow::anyhow!(err)))
}

/// Decodes wire bytes of type `ty`.
///
/// Types with no `Value` counterpart decode to `Null`. A query selecting
/// every column of a table may return columns no record field maps to; a
/// mapped field of such a type still fails when the record is loaded.
pub(crate) fn decode(ty: &Type, raw: Option<&[u8]>) -> Result<CoreValue> {
    // The type enum's inner representation is private, so each supported type
    // is matched by constant.
    let value = match *ty {
        Type::BOOL => get::<bool>(ty, raw)?.map(CoreValue::from),
        Type::INT2 => get::<i16>(ty, raw)?.map(CoreValue::from),
        Type::INT4 => get::<i32>(ty, raw)?.map(CoreValue::from),
        Type::INT8 => get::<i64>(ty, raw)?.map(CoreValue::from),
        Type::FLOAT4 => get::<f32>(ty, raw)?.map(|v| CoreValue::F64(v.into())),
        Type::FLOAT8 => get::<f64>(ty, raw)?.map(CoreValue::from),
        Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME => {
            get::<String>(ty, raw)?.map(CoreValue::from)
        }
        Type::BYTEA => get::<Vec<u8>>(ty, raw)?.map(CoreValue::from),
        Type::UUID => get::<Uuid>(ty, raw)?.map(CoreValue::from),
        Type::TIMESTAMPTZ => get::<DateTime<Utc>>(ty, raw)?.map(CoreValue::from),
        Type::TIMESTAMP => get::<NaiveDateTime>(ty, raw)?.map(|v| CoreValue::from(v.and_utc())),
        Type::POINT => get::<PgPoint>(ty, raw)?.map(|v| CoreValue::Point(v.0)),
        _ => {
            tracing::trace!(%ty, "skipping column of unsupported type");
            None
        }
    };

    Ok(value.unwrap_or_default())
}
