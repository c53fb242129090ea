use thiserror::Error;

/// Failures at the decode/encode boundary.
///
/// Navigation never fails: a missing field or a value of the wrong shape is
/// reported as `None` by the accessors on [`Navigate`](crate::Navigate).
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not a single valid JSON value.
    #[error("failed to decode JSON document: {0}")]
    Decode(#[source] serde_json::Error),
    /// The value cannot be written as JSON, e.g. it holds a NaN.
    #[error("failed to encode JSON document: {0}")]
    Encode(#[source] serde_json::Error),
    /// The root was not an object while
    /// [`require_object_root`](crate::CodecOptions::require_object_root) was set.
    #[error("expected an object at the document root, found {found}")]
    RootNotObject {
        /// [`Value::kind`](crate::Value::kind) of the root that was found.
        found: &'static str,
    },
}

/// Result alias for the decode and encode functions.
pub type Result<T, E = Error> = core::result::Result<T, E>;
