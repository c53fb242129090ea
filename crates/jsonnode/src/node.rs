//! Lazily resolved handles into a decoded JSON document.

use std::sync::Arc;

use crate::{Index, Key, Map, PathComponent, Value, navigate::Navigate};

/// A handle into a JSON document.
///
/// A root node owns the decoded [`Value`]. Every other node owns nothing but a
/// link to its parent plus the field name or array index that selects it, and
/// recomputes its value by walking that chain each time it is asked.
///
/// Nodes are immutable and cheap to clone. Parents never point at their
/// children, so a chain can never form a cycle.
///
/// Navigation lives on the [`Navigate`] trait, which is also implemented for
/// `Option<Node>` so that a missing link simply propagates:
///
/// ```
/// use jsonnode::Navigate;
///
/// let root = jsonnode::from_str(r#"{"with":{"meat":"prosciutto"}}"#)?;
/// assert_eq!(root.get("with").get("meat").as_string(), Some("prosciutto"));
/// assert!(root.get("without").get("meat").is_none());
/// # Ok::<(), jsonnode::Error>(())
/// ```
#[derive(Clone)]
pub struct Node(Arc<Link>);

enum Link {
    Root(Value),
    Child {
        parent: Node,
        field_name: Key,
        index: Option<Index>,
    },
}

impl Node {
    /// Wraps an already decoded value as the root of a document.
    #[must_use]
    pub fn root(value: Value) -> Self {
        Self(Arc::new(Link::Root(value)))
    }

    /// A root over an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::root(Value::Object(Map::new()))
    }

    pub(crate) fn child(&self, field_name: Key, index: Option<Index>) -> Self {
        Self(Arc::new(Link::Child {
            parent: self.clone(),
            field_name,
            index,
        }))
    }

    /// Walks the ancestry down to this node.
    ///
    /// `None` only if a link was put together inconsistently, which the public
    /// constructors rule out.
    pub(crate) fn resolve(&self) -> Option<&Value> {
        match &*self.0 {
            Link::Root(value) => Some(value),
            Link::Child {
                parent,
                field_name,
                index,
            } => {
                let parent_value = parent.resolve()?;
                match (index, parent_value) {
                    (Some(i), Value::Array(items)) => items.get(*i),
                    // Object narrowing: the parent value is this node's value.
                    (None, Value::Object(_)) if field_name.is_empty() => Some(parent_value),
                    (None, Value::Object(map)) => map.get(&**field_name),
                    _ => None,
                }
            }
        }
    }

    /// `true` for the node that owns the decoded document.
    #[must_use]
    pub fn is_root(&self) -> bool {
        matches!(&*self.0, Link::Root(_))
    }

    /// The handle this one was derived from, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<&Node> {
        match &*self.0 {
            Link::Root(_) => None,
            Link::Child { parent, .. } => Some(parent),
        }
    }

    /// The key this node was looked up by.
    ///
    /// Empty for the root and for handles produced by
    /// [`as_node`](Navigate::as_node). Array elements carry the field name of
    /// the array they were expanded from.
    #[must_use]
    pub fn field_name(&self) -> &str {
        match &*self.0 {
            Link::Root(_) => "",
            Link::Child { field_name, .. } => field_name,
        }
    }

    pub(crate) fn key(&self) -> Key {
        match &*self.0 {
            Link::Root(_) => Key::from(""),
            Link::Child { field_name, .. } => field_name.clone(),
        }
    }

    /// Position within the parent array, if this node is an array element.
    #[must_use]
    pub fn index(&self) -> Option<Index> {
        match &*self.0 {
            Link::Root(_) => None,
            Link::Child { index, .. } => *index,
        }
    }

    /// Components leading from the root to this node.
    ///
    /// ```
    /// use jsonnode::{Navigate, path};
    ///
    /// let root = jsonnode::from_str(r#"{"b":[{"c":"x"}]}"#)?;
    /// let c = root.get("b").as_array().unwrap()[0].as_node().get("c").unwrap();
    /// assert_eq!(c.path(), path!["b", 0, "c"]);
    /// # Ok::<(), jsonnode::Error>(())
    /// ```
    #[must_use]
    pub fn path(&self) -> Vec<PathComponent> {
        let mut components = Vec::new();
        let mut current = self;
        while let Link::Child {
            parent,
            field_name,
            index,
        } = &*current.0
        {
            match index {
                Some(i) => components.push(PathComponent::Index(*i)),
                None if field_name.is_empty() => {}
                None => components.push(PathComponent::Key(field_name.clone())),
            }
            current = parent;
        }
        components.reverse();
        components
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints the location of the node, not the document it points into.
impl core::fmt::Debug for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Node($")?;
        for component in self.path() {
            write!(f, "{component}")?;
        }
        f.write_str(")")
    }
}

/// The resolved value of `node`, or [`Value::Null`] if there is no node.
///
/// This is the way out of the handle representation when the host needs an
/// owned value, for instance to re-encode it with another codec.
#[must_use]
pub fn to_value(node: Option<&Node>) -> Value {
    node.value().clone()
}
