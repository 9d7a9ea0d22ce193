use core::{fmt, str::FromStr};

/// A two-dimensional geometry point.
///
/// PostgreSQL stores it in a native `POINT` column; stores without a geometry
/// type keep its text form, `(x,y)`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Returned when text is not of the form `(x,y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePointError(());

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("point must be written as `(x,y)`")
    }
}

impl std::error::Error for ParsePointError {}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .ok_or(ParsePointError(()))?;

        let (x, y) = inner.split_once(',').ok_or(ParsePointError(()))?;
        let x = x.trim().parse().map_err(|_| ParsePointError(()))?;
        let y = y.trim().parse().map_err(|_| ParsePointError(()))?;

        Ok(Point { x, y })
    }
}
