/// Configuration for decoding documents into a root [`Node`](crate::Node) and
/// encoding nodes back into JSON text.
///
/// # Examples
///
/// ```rust
/// use jsonnode::{CodecOptions, Error};
///
/// let options = CodecOptions {
///     require_object_root: true,
///     ..Default::default()
/// };
/// let err = jsonnode::from_str_with("[1, 2]", options).unwrap_err();
/// assert!(matches!(err, Error::RootNotObject { found: "array" }));
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecOptions {
    /// Whether to reject documents whose root value is not an object.
    ///
    /// Any JSON value may serve as a root by default. Enabling this restores
    /// the stricter contract where a document is always a record, so that
    /// callers can rely on `get` being meaningful on the root.
    ///
    /// # Default
    ///
    /// `false`
    pub require_object_root: bool,

    /// Whether to encode with newlines and two-space indentation.
    ///
    /// # Default
    ///
    /// `false`
    pub pretty: bool,
}
