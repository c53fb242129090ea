//! JSON value types and utilities.
//!
//! This module defines the [`Value`] enum, the decoded form of a JSON document
//! that a root [`Node`](crate::Node) owns, and the helpers used to render it.
use std::collections::BTreeMap;

/// Members of a JSON object, ordered by key.
pub type Map = BTreeMap<String, Value>;
/// Elements of a JSON array.
pub type Array = Vec<Value>;

/// A decoded JSON value as defined by [RFC 8259].
///
/// Every JSON number, integral or not, is held as an `f64`, the same
/// representation a standard JSON decoder produces for a dynamically typed
/// target. Integers outside of `±2^53` therefore lose precision.
///
/// # Examples
///
/// ```
/// use jsonnode::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// `null`, also the value of an absent node.
    #[default]
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// Any JSON number.
    Number(f64),
    /// A string with escapes already decoded.
    String(String),
    /// An ordered list of values.
    Array(Array),
    /// A set of members with unique keys.
    Object(Map),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Short lowercase name of the variant, used in diagnostics.
    ///
    /// ```
    /// use jsonnode::Value;
    ///
    /// assert_eq!(Value::Null.kind(), "null");
    /// assert_eq!(Value::Array(vec![]).kind(), "array");
    /// ```
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonnode::{Map, Value};
    ///
    /// assert!(Value::Object(Map::new()).is_object());
    /// assert!(!Value::Null.is_object());
    /// ```
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The boolean, if this is a [`Boolean`](Value::Boolean).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// The number, if this is a [`Number`](Value::Number).
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        if let Self::Number(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    /// The string, if this is a [`String`](Value::String).
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// The elements, if this is an [`Array`](Value::Array).
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        if let Self::Array(items) = self {
            Some(items)
        } else {
            None
        }
    }

    /// The members, if this is an [`Object`](Value::Object).
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        if let Self::Object(map) = self {
            Some(map)
        } else {
            None
        }
    }
}

/// Escapes control characters in a string for inclusion in a JSON string literal.
///
/// Quotes, backslashes, control characters and the Unicode line separators are
/// replaced with their JSON escape sequences.
pub(crate) fn write_escaped_string<W: core::fmt::Write>(src: &str, f: &mut W) -> core::fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            // Pre-2019 JSON parsers may reject raw line separators.
            '\u{2028}' | '\u{2029}' => {
                write!(f, "\\u{:04X}", c as u32)?;
            }
            // JSON escapes are exactly 4 hex digits, so only the BMP is escaped here.
            c if c.is_ascii_control() || c.is_control() && c as u32 <= 0xFFFF => {
                write!(f, "\\u{:04X}", c as u32)?;
            }
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Compact JSON rendering, intended for diagnostics. Use the codec functions
/// for output that must be re-decoded, since non-finite numbers are written
/// as-is here.
impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => {
                f.write_str("\"")?;
                write_escaped_string(s, f)?;
                f.write_str("\"")
            }
            Value::Array(arr) => {
                f.write_str("[")?;
                let mut first = true;
                for v in arr {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                let mut first = true;
                for (k, v) in map {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    f.write_str("\"")?;
                    write_escaped_string(k, f)?;
                    write!(f, "\":{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

// Values (de)serialize as plain JSON rather than serde's default externally
// tagged enum representation.
#[cfg(feature = "serde")]
mod serde_impls {
    use core::fmt;

    use serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{MapAccess, SeqAccess, Visitor},
        ser::{Error as _, SerializeMap, SerializeSeq},
    };

    use super::{Array, Map, Value};

    /// Largest magnitude at which every integer is exactly representable.
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

    impl Serialize for Value {
        #[allow(clippy::cast_possible_truncation)]
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self {
                Value::Null => serializer.serialize_unit(),
                Value::Boolean(b) => serializer.serialize_bool(*b),
                Value::Number(n) if !n.is_finite() => Err(S::Error::custom(format_args!(
                    "cannot encode non-finite number {n}"
                ))),
                // Negative zero has no integer form.
                Value::Number(n)
                    if n.fract() == 0.0
                        && n.abs() <= MAX_SAFE_INTEGER
                        && !(*n == 0.0 && n.is_sign_negative()) =>
                {
                    serializer.serialize_i64(*n as i64)
                }
                Value::Number(n) => serializer.serialize_f64(*n),
                Value::String(s) => serializer.serialize_str(s),
                Value::Array(items) => {
                    let mut seq = serializer.serialize_seq(Some(items.len()))?;
                    for item in items {
                        seq.serialize_element(item)?;
                    }
                    seq.end()
                }
                Value::Object(map) => {
                    let mut out = serializer.serialize_map(Some(map.len()))?;
                    for (k, v) in map {
                        out.serialize_entry(k, v)?;
                    }
                    out.end()
                }
            }
        }
    }

    struct ValueVisitor;

    impl<'de> Visitor<'de> for ValueVisitor {
        type Value = Value;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("any valid JSON value")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(Value::Null)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E> {
            Ok(Value::Null)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            Value::deserialize(deserializer)
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
            Ok(Value::Boolean(value))
        }

        #[allow(clippy::cast_precision_loss)]
        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
            Ok(Value::Number(value as f64))
        }

        #[allow(clippy::cast_precision_loss)]
        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
            Ok(Value::Number(value as f64))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
            Ok(Value::Number(value))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
            Ok(Value::String(value.into()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
            Ok(Value::String(value))
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut items = Array::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(item) = seq.next_element()? {
                items.push(item);
            }
            Ok(Value::Array(items))
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut map = Map::new();
            while let Some((k, v)) = access.next_entry::<String, Value>()? {
                map.insert(k, v);
            }
            Ok(Value::Object(map))
        }
    }

    impl<'de> Deserialize<'de> for Value {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(ValueVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_escapes_keys_and_strings() {
        let mut map = Map::new();
        map.insert("a\"b".into(), Value::String("line\nbreak".into()));
        map.insert("n".into(), Value::Number(1.5));
        let v = Value::Object(map);
        assert_eq!(v.to_string(), r#"{"a\"b":"line\u000Abreak","n":1.5}"#);
    }

    #[test]
    fn integral_numbers_display_without_fraction() {
        assert_eq!(Value::Number(8.0).to_string(), "8");
        assert_eq!(Value::Number(-12345.0).to_string(), "-12345");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_plain_json_shape() {
        let v: Value = serde_json::from_str(r#"{"a":[1,2.5,null,true,"s"]}"#).unwrap();
        let expected = Value::Object(Map::from([(
            "a".to_string(),
            Value::Array(vec![
                Value::Number(1.0),
                Value::Number(2.5),
                Value::Null,
                Value::Boolean(true),
                Value::String("s".into()),
            ]),
        )]));
        assert_eq!(v, expected);
        assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"a":[1,2.5,null,true,"s"]}"#);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn non_finite_numbers_refuse_to_serialize() {
        assert!(serde_json::to_string(&Value::Number(f64::NAN)).is_err());
        assert!(serde_json::to_string(&Value::Number(f64::INFINITY)).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn negative_zero_keeps_its_sign() {
        let text = serde_json::to_string(&Value::Number(-0.0)).unwrap();
        assert_eq!(text, "-0.0");
        let back: Value = serde_json::from_str(&text).unwrap();
        assert!(back.as_f64().is_some_and(f64::is_sign_negative));
        assert_eq!(serde_json::to_string(&Value::Number(0.0)).unwrap(), "0");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn large_integral_numbers_keep_exponent_form() {
        let v = Value::Number(1e300);
        let text = serde_json::to_string(&v).unwrap();
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, v);
    }
}
