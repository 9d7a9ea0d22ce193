use super::{Flavor, Formatter, ToSql};

/// Collects placeholder names while a statement is serialized.
pub trait Params {
    fn push(&mut self, name: &str) -> Placeholder;
}

/// 1-based position of a bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

/// A name used more than once binds once and reuses its position.
impl Params for Vec<String> {
    fn push(&mut self, name: &str) -> Placeholder {
        if let Some(index) = self.iter().position(|existing| existing == name) {
            return Placeholder(index + 1);
        }

        self.push(name.to_string());
        Placeholder(self.len())
    }
}

/// A value placeholder for the field `name`.
pub(super) struct Param<'a>(pub(super) &'a str);

impl ToSql for Param<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        let Placeholder(index) = f.params.push(self.0);

        match f.serializer.flavor {
            Flavor::Named => write!(&mut f.dst, "@{}", self.0).unwrap(),
            Flavor::Postgresql => write!(&mut f.dst, "${index}").unwrap(),
            Flavor::Sqlite => write!(&mut f.dst, "?{index}").unwrap(),
        }
    }
}
