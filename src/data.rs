use serde::{Deserialize, Deserializer};

pub mod student;

/// One field of a partial update: either leave the stored value alone, or overwrite it.
///
/// When deserialising, a missing key becomes [`FieldUpdate::Unchanged`] (pair it with
/// `#[serde(default)]`) and any present value, `null` included, becomes [`FieldUpdate::Set`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    #[default]
    Unchanged,
    Set(T),
}

impl<T> FieldUpdate<T> {
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    pub fn apply_to(self, current: &mut T) {
        if let Self::Set(value) = self {
            *current = value;
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FieldUpdate<U> {
        match self {
            Self::Unchanged => FieldUpdate::Unchanged,
            Self::Set(value) => FieldUpdate::Set(f(value)),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Unchanged => None,
            Self::Set(value) => Some(value),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldUpdate<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::Set)
    }
}
