use crate::{Node, Value};

static NULL: Value = Value::Null;

/// Read access to a JSON document through [`Node`] handles.
///
/// Implemented for `Node` itself and for `Option<Node>` / `Option<&Node>`, so
/// the result of one lookup can be navigated again without checking it first.
/// An absent node behaves like a node without children: `get` returns `None`,
/// [`value`](Navigate::value) is `null` and every narrowing accessor returns
/// `None`.
///
/// Every method resolves the value again from the root; nothing is cached.
///
/// ```
/// use jsonnode::{Navigate, Value};
///
/// let root = jsonnode::from_str(r#"{"a":null}"#)?;
/// let a = root.get("a");
/// assert!(a.is_some());
/// assert_eq!(a.value(), &Value::Null);
/// assert_eq!(a.as_string(), None);
///
/// assert_eq!(root.get("missing").get("x").as_number(), None);
/// # Ok::<(), jsonnode::Error>(())
/// ```
pub trait Navigate {
    /// The node being navigated, or `None` for an absent one.
    fn node(&self) -> Option<&Node>;

    /// The current value of the node, `null` if the node is absent.
    fn value(&self) -> &Value {
        self.node().and_then(Node::resolve).unwrap_or(&NULL)
    }

    /// Looks up a member of an object value.
    ///
    /// Returns `None` when the node is absent, its value is not an object, or
    /// the object has no such key. A key whose value is `null` is found.
    ///
    /// An empty `field_name` yields a handle on the object itself.
    fn get(&self, field_name: &str) -> Option<Node> {
        let node = self.node()?;
        match node.resolve()? {
            Value::Object(map) if map.contains_key(field_name) => {
                Some(node.child(field_name.into(), None))
            }
            _ => None,
        }
    }

    /// The string, if the value is one.
    fn as_string(&self) -> Option<&str> {
        self.value().as_str()
    }

    /// Every JSON number decodes to an `f64`, integers included.
    fn as_number(&self) -> Option<f64> {
        self.value().as_f64()
    }

    /// The boolean, if the value is one.
    fn as_bool(&self) -> Option<bool> {
        self.value().as_bool()
    }

    /// One handle per element of an array value, in order.
    ///
    /// Each element handle keeps the field name of the array node for
    /// diagnostics; it is selected by its index.
    fn as_array(&self) -> Option<Vec<Node>> {
        let node = self.node()?;
        let items = node.resolve()?.as_array()?;
        let field_name = node.key();
        Some(
            (0..items.len())
                .map(|i| node.child(field_name.clone(), Some(i)))
                .collect(),
        )
    }

    /// A fresh handle on an object value, typically an array element, that
    /// can be navigated with [`get`](Navigate::get).
    fn as_node(&self) -> Option<Node> {
        let node = self.node()?;
        node.resolve()?
            .is_object()
            .then(|| node.child("".into(), None))
    }
}

impl Navigate for Node {
    fn node(&self) -> Option<&Node> {
        Some(self)
    }
}

impl Navigate for Option<Node> {
    fn node(&self) -> Option<&Node> {
        self.as_ref()
    }
}

impl Navigate for Option<&Node> {
    fn node(&self) -> Option<&Node> {
        *self
    }
}

impl<T: Navigate + ?Sized> Navigate for &T {
    fn node(&self) -> Option<&Node> {
        (**self).node()
    }
}
