//! Lazy, handle-based navigation over decoded JSON documents.
//!
//! A document is decoded once into a root [`Node`]. Looking up a field or
//! expanding an array does not copy anything out of it: each step produces a
//! small handle that remembers its parent and the key or index that selects
//! it, and resolves its value on demand by walking back to the root.
//!
//! Lookups that fail produce `None`, and `None` can be navigated further
//! through the [`Navigate`] trait, so long chains need no intermediate checks:
//!
//! ```
//! use jsonnode::Navigate;
//!
//! let root = jsonnode::from_str(r#"{"a":1,"b":[{"c":"x"},{"c":"y"}]}"#)?;
//!
//! let items = root.get("b").as_array().unwrap_or_default();
//! let names: Vec<_> = items
//!     .iter()
//!     .filter_map(|item| item.get("c").as_string().map(str::to_owned))
//!     .collect();
//! assert_eq!(names, ["x", "y"]);
//!
//! assert_eq!(root.get("a").as_number(), Some(1.0));
//! assert_eq!(root.get("nope").get("deeper").as_number(), None);
//! # Ok::<(), jsonnode::Error>(())
//! ```

mod navigate;
mod node;
mod options;
mod path_component;
mod value;

#[cfg(feature = "serde")]
mod codec;
#[cfg(feature = "serde")]
mod error;


#[cfg(feature = "serde")]
pub use codec::{
    from_slice, from_slice_with, from_str, from_str_with, to_string, to_string_with, to_vec,
    to_vec_with,
};
#[cfg(feature = "serde")]
pub use error::{Error, Result};
pub use navigate::Navigate;
pub use node::{Node, to_value};
pub use options::CodecOptions;
pub use path_component::{Index, Key, PathComponent, PathComponentFrom};
pub use value::{Array, Map, Value};

#[doc(hidden)]
pub use std::vec;

/// Macro to build a `Vec<PathComponent>` from a heterogeneous list of keys and
/// indices, for comparing against [`Node::path`].
///
/// ```rust
/// # use jsonnode::{path, PathComponent};
/// let p = path![0, "foo", 2];
/// assert_eq!(
///     p,
///     vec![
///         PathComponent::Index(0),
///         PathComponent::Key("foo".into()),
///         PathComponent::Index(2)
///     ]
/// );
/// ```
#[macro_export]
macro_rules! path {
    ( $( $elem:expr ),* $(,)? ) => {{
        use $crate::PathComponentFrom;
        $crate::vec![$($crate::PathComponent::from_path_component($elem)),*]
    }};
}
