//! Glue between JSON text and the handle representation.
//!
//! Decoding and encoding are delegated to `serde_json`; this module only turns
//! its output into a root [`Node`] and back. These are the only fallible
//! operations in the crate.
//!
//! Decoding puts no limit on nesting depth. Deeply nested documents grow the
//! stack on the heap through `serde_stacker` instead of being rejected.

use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::{CodecOptions, Error, Navigate, Node, Result, Value};

/// Decodes a JSON document into a root node.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `s` is not a single valid JSON value.
pub fn from_str(s: &str) -> Result<Node> {
    from_slice_with(s.as_bytes(), CodecOptions::default())
}

/// Decodes a JSON document into a root node using `options`.
///
/// # Errors
///
/// Returns [`Error::Decode`] for malformed input and
/// [`Error::RootNotObject`] when `options.require_object_root` is set and the
/// document is not an object.
pub fn from_str_with(s: &str, options: CodecOptions) -> Result<Node> {
    from_slice_with(s.as_bytes(), options)
}

/// Decodes a JSON document from raw bytes into a root node.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `bytes` is not a single valid JSON value.
pub fn from_slice(bytes: &[u8]) -> Result<Node> {
    from_slice_with(bytes, CodecOptions::default())
}

/// Decodes a JSON document from raw bytes into a root node using `options`.
///
/// # Errors
///
/// See [`from_str_with`].
pub fn from_slice_with(bytes: &[u8], options: CodecOptions) -> Result<Node> {
    let value = decode(bytes).map_err(|err| {
        debug!(len = bytes.len(), error = %err, "failed to decode JSON document");
        Error::Decode(err)
    })?;

    if options.require_object_root && !value.is_object() {
        debug!(found = value.kind(), "rejected document with non-object root");
        return Err(Error::RootNotObject {
            found: value.kind(),
        });
    }

    trace!(len = bytes.len(), kind = value.kind(), "decoded JSON document");
    Ok(Node::root(value))
}

fn decode(bytes: &[u8]) -> serde_json::Result<Value> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// Encodes the value of `node` as JSON text, `null` if there is no node.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the value holds a non-finite number.
pub fn to_string(node: Option<&Node>) -> Result<String> {
    to_string_with(node, CodecOptions::default())
}

/// Encodes the value of `node` as JSON text using `options`.
///
/// # Errors
///
/// See [`to_string`].
pub fn to_string_with(node: Option<&Node>, options: CodecOptions) -> Result<String> {
    let value = node.value();
    let encoded = if options.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    finish_encode(value, encoded)
}

/// Encodes the value of `node` as JSON bytes, `null` if there is no node.
///
/// # Errors
///
/// See [`to_string`].
pub fn to_vec(node: Option<&Node>) -> Result<Vec<u8>> {
    to_vec_with(node, CodecOptions::default())
}

/// Encodes the value of `node` as JSON bytes using `options`.
///
/// # Errors
///
/// See [`to_string`].
pub fn to_vec_with(node: Option<&Node>, options: CodecOptions) -> Result<Vec<u8>> {
    let value = node.value();
    let encoded = if options.pretty {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    };
    finish_encode(value, encoded)
}

fn finish_encode<T: AsRef<[u8]>>(value: &Value, encoded: serde_json::Result<T>) -> Result<T> {
    match encoded {
        Ok(out) => {
            trace!(len = out.as_ref().len(), kind = value.kind(), "encoded JSON document");
            Ok(out)
        }
        Err(err) => {
            debug!(kind = value.kind(), error = %err, "failed to encode JSON document");
            Err(Error::Encode(err))
        }
    }
}

impl FromStr for Node {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        from_slice_with(s.as_bytes(), CodecOptions::default())
    }
}

/// Serializes the resolved value, so an absent `Option<Node>` becomes `null`.
impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

/// Deserializes any JSON value into a new root node.
impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Node::root)
    }
}
