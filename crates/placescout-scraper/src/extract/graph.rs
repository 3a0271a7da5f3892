//! Arena view over the embedded normalized-cache graph.
//!
//! The graph is a flat map from cache key (`"PlaceDetailBase:123"`) to node
//! object. Nodes point at each other with `{"__ref": "<key>"}` markers; those
//! are never chased during extraction.

use serde_json::{Map, Value};

pub const TYPENAME_FIELD: &str = "__typename";
pub const REFERENCE_FIELD: &str = "__ref";
pub const BUSINESS_DETAIL_TYPENAME: &str = "PlaceDetailBase";
pub const VISITOR_REVIEW_TYPENAME: &str = "VisitorReview";

/// Node map located in a page, keyed in document order.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedGraph {
    nodes: Map<String, Value>,
}

impl EmbeddedGraph {
    #[must_use]
    pub fn new(nodes: Map<String, Value>) -> Self {
        Self { nodes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Single-hop lookup of a node by cache key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.nodes.get(key)
    }

    /// All nodes with their kind, in document order.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, GraphNode<'_>)> {
        self.nodes
            .iter()
            .map(|(key, value)| (key.as_str(), GraphNode::classify(value)))
    }
}

/// A graph node tagged by its `__typename`.
#[derive(Debug, Clone, Copy)]
pub enum GraphNode<'a> {
    BusinessDetail(&'a Map<String, Value>),
    VisitorReview(&'a Map<String, Value>),
    Other,
}

impl<'a> GraphNode<'a> {
    #[must_use]
    pub fn classify(value: &'a Value) -> Self {
        let Some(fields) = value.as_object() else {
            return GraphNode::Other;
        };
        match fields.get(TYPENAME_FIELD).and_then(Value::as_str) {
            Some(BUSINESS_DETAIL_TYPENAME) => GraphNode::BusinessDetail(fields),
            Some(VISITOR_REVIEW_TYPENAME) => GraphNode::VisitorReview(fields),
            _ => GraphNode::Other,
        }
    }
}

/// The target key if `value` is a reference marker.
#[must_use]
pub fn reference_key(value: &Value) -> Option<&str> {
    value.as_object()?.get(REFERENCE_FIELD)?.as_str()
}

/// Copy of `value` with every reference marker removed.
///
/// Returns `None` when `value` itself is a marker. Markers inside arrays are
/// dropped; object fields holding a marker are dropped.
#[must_use]
pub fn strip_references(value: &Value) -> Option<Value> {
    if reference_key(value).is_some() {
        return None;
    }
    match value {
        Value::Array(items) => Some(Value::Array(
            items.iter().filter_map(strip_references).collect(),
        )),
        Value::Object(fields) => Some(Value::Object(
            fields
                .iter()
                .filter_map(|(k, v)| strip_references(v).map(|v| (k.clone(), v)))
                .collect(),
        )),
        other => Some(other.clone()),
    }
}
