use std::sync::Arc;

/// An object member name, shared between the handles that carry it.
pub type Key = Arc<str>;
/// A position within an array.
pub type Index = usize;

/// A component in the path from a document root to a [`Node`](crate::Node).
///
/// Paths are diagnostic only; resolution never consults them. Handles created
/// by narrowing an object value contribute no component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathComponent {
    /// A member of an object.
    Key(Key),
    /// An element of an array.
    Index(Index),
}

// Lets `path![0, "foo"]` accept integer literals of any type alongside keys.
#[doc(hidden)]
pub trait PathComponentFrom<T> {
    /// Converts a `path!` element.
    fn from_path_component(value: T) -> PathComponent;
}

macro_rules! impl_integer_as_path_component {
    ($($t:ty),+) => {
        $(
            impl PathComponentFrom<$t> for PathComponent {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                fn from_path_component(value: $t) -> Self {
                    PathComponent::Index(value as Index)
                }
            }
        )+
    };
}
impl_integer_as_path_component!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl PathComponentFrom<&str> for PathComponent {
    fn from_path_component(value: &str) -> Self {
        PathComponent::Key(value.into())
    }
}

/// Renders as a JSONPath-style segment: `.key` or `[index]`.
impl core::fmt::Display for PathComponent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PathComponent::Key(k) => write!(f, ".{k}"),
            PathComponent::Index(i) => write!(f, "[{i}]"),
        }
    }
}

// A `Vec<PathComponent>` serializes as e.g. `["foo", 0, "bar"]` instead of
// the default tagged representation.
#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{Serialize, Serializer};

    use super::PathComponent;

    impl Serialize for PathComponent {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self {
                PathComponent::Key(k) => serializer.serialize_str(k),
                PathComponent::Index(i) => serializer.serialize_u64(*i as u64),
            }
        }
    }
}

impl PathComponent {
    #[must_use]
    /// Returns the index if this component is an index, otherwise `None`.
    pub fn as_index(&self) -> Option<Index> {
        if let Self::Index(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    #[must_use]
    /// Returns the key if this component is a key, otherwise `None`.
    pub fn as_key(&self) -> Option<&str> {
        if let Self::Key(v) = self {
            Some(v)
        } else {
            None
        }
    }
}
