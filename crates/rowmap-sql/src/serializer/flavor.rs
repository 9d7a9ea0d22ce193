use super::Serializer;

#[derive(Debug, Clone, Copy)]
pub(super) enum Flavor {
    /// `@Name` placeholders, the form callers write raw commands in
    Named,
    Postgresql,
    Sqlite,
}

impl Serializer {
    pub fn named() -> Serializer {
        Serializer {
            flavor: Flavor::Named,
        }
    }

    pub fn postgresql() -> Serializer {
        Serializer {
            flavor: Flavor::Postgresql,
        }
    }

    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }
}
