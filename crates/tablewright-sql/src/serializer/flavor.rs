use super::Serializer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    Mysql,
    Mariadb,
}

impl Serializer {
    pub fn mysql() -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
        }
    }

    pub fn mariadb() -> Serializer {
        Serializer {
            flavor: Flavor::Mariadb,
        }
    }

    pub(super) fn is_mariadb(&self) -> bool {
        self.flavor == Flavor::Mariadb
    }
}
