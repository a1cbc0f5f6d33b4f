//! The document tree.
//!
//! Nodes live in an arena owned by [`Document`] and refer to each other
//! through stable [`NodeId`] handles, so growing a container never moves or
//! invalidates anything a caller holds. The invariant that matters is
//! bidirectional consistency: a node's `parent` handle names exactly the
//! container whose child list carries the node's id.
//!
//! Keys and string values are [`Cow`] views. Parsing borrows them straight
//! out of the source text; programmatic construction may pass borrowed or
//! owned strings, and [`Document::into_owned`] converts a whole tree to
//! `'static` when it must outlive its source buffer.

use std::borrow::Cow;

/// Stable handle to a node inside a [`Document`].
///
/// Handles are only meaningful for the document that created them. A handle
/// into a removed subtree keeps pointing at the detached nodes until the
/// document is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A JSON value.
///
/// Each variant carries only the data relevant to it. Containers hold their
/// children as ordered handle lists; array order is significant, object
/// insertion order is preserved but carries no meaning.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// JSON `null`.
    Null,
    /// JSON `true`/`false`.
    Bool(bool),
    /// JSON number, double precision.
    Number(f64),
    /// JSON string, raw (escape sequences are kept as written).
    String(Cow<'a, str>),
    /// JSON object; every child carries a key.
    Object(Vec<NodeId>),
    /// JSON array; children are keyless and ordered.
    Array(Vec<NodeId>),
}

impl<'a> Value<'a> {
    /// True for objects and arrays, the only kinds that may own children.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    /// Returns the kind name as a string for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Object(_) => "object",
            Value::Array(_) => "array",
        }
    }

    fn into_owned(self) -> Value<'static> {
        match self {
            Value::Null => Value::Null,
            Value::Bool(b) => Value::Bool(b),
            Value::Number(n) => Value::Number(n),
            Value::String(s) => Value::String(Cow::Owned(s.into_owned())),
            Value::Object(children) => Value::Object(children),
            Value::Array(children) => Value::Array(children),
        }
    }
}

/// One JSON value in the tree.
#[derive(Debug, Clone)]
pub struct Node<'a> {
    parent: Option<NodeId>,
    key: Option<Cow<'a, str>>,
    value: Value<'a>,
}

impl<'a> Node<'a> {
    fn new(parent: Option<NodeId>) -> Self {
        Self {
            parent,
            key: None,
            value: Value::Null,
        }
    }

    /// Handle of the owning container, `None` for a root or detached node.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Member key; meaningful only when the parent is an object.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The node's value.
    pub fn value(&self) -> &Value<'a> {
        &self.value
    }

    /// Child handles, in order; empty for scalars.
    pub fn children(&self) -> &[NodeId] {
        match &self.value {
            Value::Object(children) | Value::Array(children) => children,
            _ => &[],
        }
    }

    /// Returns the boolean if this is a `Bool`, `None` otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the number if this is a `Number`, `None` otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self.value {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the raw string if this is a `String`, `None` otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// True if this node is an object.
    pub fn is_object(&self) -> bool {
        matches!(self.value, Value::Object(_))
    }

    /// True if this node is an array.
    pub fn is_array(&self) -> bool {
        matches!(self.value, Value::Array(_))
    }

    /// True if this node is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self.value, Value::Null)
    }

    fn into_owned(self) -> Node<'static> {
        Node {
            parent: self.parent,
            key: self.key.map(|k| Cow::Owned(k.into_owned())),
            value: self.value.into_owned(),
        }
    }
}

/// A JSON document: the node arena, its root, and (when parsed from text)
/// the borrowed source buffer the string views point into.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    nodes: Vec<Node<'a>>,
    root: NodeId,
    source: Option<&'a str>,
}

impl<'a> Document<'a> {
    /// Create a document whose root is an empty object with no parent.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                key: None,
                value: Value::Object(Vec::new()),
            }],
            root: NodeId(0),
            source: None,
        }
    }

    pub(crate) fn set_source(&mut self, source: &'a str) {
        self.source = Some(source);
    }

    /// The source text this document was parsed from, if any.
    pub fn source(&self) -> Option<&'a str> {
        self.source
    }

    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of arena slots, including detached nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the arena is empty (never, for a constructed document).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Borrow a node.
    ///
    /// The handle must come from this document; a foreign handle may panic
    /// or name an unrelated node.
    pub fn get(&self, id: NodeId) -> &Node<'a> {
        &self.nodes[id.0]
    }

    /// Replace a node's member key.
    pub fn set_key(&mut self, id: NodeId, key: impl Into<Cow<'a, str>>) {
        self.nodes[id.0].key = Some(key.into());
    }

    /// Replace a node's value.
    ///
    /// Replacing a container value detaches its children; they stay in the
    /// arena until the document drops.
    pub fn set_value(&mut self, id: NodeId, value: Value<'a>) {
        let old = std::mem::replace(&mut self.nodes[id.0].value, value);
        if let Value::Object(children) | Value::Array(children) = old {
            for child in children {
                self.nodes[child.0].parent = None;
            }
        }
    }

    /// Append a default (`null`) child to a container.
    ///
    /// Returns `None` when `parent` is not an object or array.
    pub fn add_child(&mut self, parent: NodeId) -> Option<NodeId> {
        if !self.nodes[parent.0].value.is_container() {
            return None;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(Some(parent)));
        match &mut self.nodes[parent.0].value {
            Value::Object(children) | Value::Array(children) => children.push(id),
            _ => return None,
        }
        Some(id)
    }

    /// Pre-size a container's child list (and the arena) for `additional`
    /// more children without changing the current count.
    ///
    /// Returns `false` when `parent` is not a container.
    pub fn reserve(&mut self, parent: NodeId, additional: usize) -> bool {
        match &mut self.nodes[parent.0].value {
            Value::Object(children) | Value::Array(children) => {
                children.reserve(additional);
            }
            _ => return false,
        }
        self.nodes.reserve(additional);
        true
    }

    /// Remove a node from its parent, preserving sibling order.
    ///
    /// Fails when the node has no parent, the parent is not a container, or
    /// the node is not in the parent's current child list. The subtree is
    /// detached, not reclaimed; its slots are freed when the document drops.
    pub fn remove_child(&mut self, child: NodeId) -> bool {
        let Some(parent) = self.nodes[child.0].parent else {
            return false;
        };
        let position = match &self.nodes[parent.0].value {
            Value::Object(children) | Value::Array(children) => {
                children.iter().position(|&id| id == child)
            }
            _ => None,
        };
        let Some(position) = position else {
            return false;
        };
        match &mut self.nodes[parent.0].value {
            Value::Object(children) | Value::Array(children) => {
                children.remove(position);
            }
            _ => return false,
        }
        self.nodes[child.0].parent = None;
        true
    }

    /// Find an object member by key: linear scan, full-slice comparison.
    ///
    /// Only meaningful when `container` is an object; `None` otherwise.
    pub fn find_by_key(&self, container: NodeId, key: &str) -> Option<NodeId> {
        let node = &self.nodes[container.0];
        if !node.is_object() {
            return None;
        }
        node.children()
            .iter()
            .copied()
            .find(|&child| self.nodes[child.0].key() == Some(key))
    }

    /// Find an array element by index, O(1).
    ///
    /// Only meaningful when `container` is an array and `index` is in range.
    pub fn find_by_index(&self, container: NodeId, index: usize) -> Option<NodeId> {
        let node = &self.nodes[container.0];
        if !node.is_array() {
            return None;
        }
        node.children().get(index).copied()
    }

    /// Position of a node within its parent's child list.
    pub fn index_of(&self, child: NodeId) -> Option<usize> {
        let parent = self.nodes[child.0].parent?;
        self.nodes[parent.0]
            .children()
            .iter()
            .position(|&id| id == child)
    }

    fn add_with(
        &mut self,
        parent: NodeId,
        key: Option<Cow<'a, str>>,
        value: Value<'a>,
    ) -> Option<NodeId> {
        let id = self.add_child(parent)?;
        self.nodes[id.0].key = key;
        self.nodes[id.0].value = value;
        Some(id)
    }

    /// Append a keyless `null` child.
    pub fn add_null(&mut self, parent: NodeId) -> Option<NodeId> {
        self.add_with(parent, None, Value::Null)
    }

    /// Append a keyless boolean child.
    pub fn add_bool(&mut self, parent: NodeId, value: bool) -> Option<NodeId> {
        self.add_with(parent, None, Value::Bool(value))
    }

    /// Append a keyless number child.
    pub fn add_number(&mut self, parent: NodeId, value: f64) -> Option<NodeId> {
        self.add_with(parent, None, Value::Number(value))
    }

    /// Append a keyless string child.
    pub fn add_string(&mut self, parent: NodeId, value: impl Into<Cow<'a, str>>) -> Option<NodeId> {
        self.add_with(parent, None, Value::String(value.into()))
    }

    /// Append a keyless container child of the given kind.
    pub fn add_container(&mut self, parent: NodeId, array: bool) -> Option<NodeId> {
        let value = if array {
            Value::Array(Vec::new())
        } else {
            Value::Object(Vec::new())
        };
        self.add_with(parent, None, value)
    }

    /// Append a keyed `null` member.
    pub fn add_key_null(
        &mut self,
        parent: NodeId,
        key: impl Into<Cow<'a, str>>,
    ) -> Option<NodeId> {
        self.add_with(parent, Some(key.into()), Value::Null)
    }

    /// Append a keyed boolean member.
    pub fn add_key_bool(
        &mut self,
        parent: NodeId,
        key: impl Into<Cow<'a, str>>,
        value: bool,
    ) -> Option<NodeId> {
        self.add_with(parent, Some(key.into()), Value::Bool(value))
    }

    /// Append a keyed number member.
    pub fn add_key_number(
        &mut self,
        parent: NodeId,
        key: impl Into<Cow<'a, str>>,
        value: f64,
    ) -> Option<NodeId> {
        self.add_with(parent, Some(key.into()), Value::Number(value))
    }

    /// Append a keyed string member.
    pub fn add_key_string(
        &mut self,
        parent: NodeId,
        key: impl Into<Cow<'a, str>>,
        value: impl Into<Cow<'a, str>>,
    ) -> Option<NodeId> {
        self.add_with(parent, Some(key.into()), Value::String(value.into()))
    }

    /// Append a keyed container member of the given kind.
    pub fn add_key_container(
        &mut self,
        parent: NodeId,
        key: impl Into<Cow<'a, str>>,
        array: bool,
    ) -> Option<NodeId> {
        let value = if array {
            Value::Array(Vec::new())
        } else {
            Value::Object(Vec::new())
        };
        self.add_with(parent, Some(key.into()), value)
    }

    /// Deep-copy every borrowed key and string, releasing the source buffer.
    pub fn into_owned(self) -> Document<'static> {
        Document {
            nodes: self.nodes.into_iter().map(Node::into_owned).collect(),
            root: self.root,
            source: None,
        }
    }
}

impl Default for Document<'_> {
    fn default() -> Self {
        Self::new()
    }
}
