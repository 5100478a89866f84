//! Generic parse tree definitions
//!
//! This module defines the tree shape shared by the parser and the renderer:
//! composite nodes with a type name and ordered named fields, sequences, and
//! scalar leaves. The three cases are a closed enum, so every traversal in
//! the crate pattern-matches exhaustively over them.
//!
//! Field order is fixed when a node is built and is the iteration order for
//! both complexity scoring and rendering. Trees are acyclic by construction
//! (they come out of a parser) and are never mutated after construction.

use std::fmt;

/// A value in a parse tree: a composite node, a sequence, or a scalar leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Node(Node),
    Seq(Vec<Value>),
    Scalar(Scalar),
}

/// A composite node: a type name plus its fields in declaration order.
///
/// The ordered field list is baked into the instance, so consumers never
/// look field names up at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub type_name: &'static str,
    pub fields: Vec<(&'static str, Value)>,
}

impl Node {
    /// Create a node with no fields yet.
    pub fn new(type_name: &'static str) -> Self {
        Node {
            type_name,
            fields: Vec::new(),
        }
    }

    /// Append a field; fields keep the order they were added in.
    pub fn field(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.fields.push((name, value.into()));
        self
    }
}

/// An atomic leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Absence marker, e.g. the value of a bare `return`.
    None,
}

impl fmt::Display for Scalar {
    /// The canonical literal form: quoted/escaped strings, canonical digits,
    /// floats with a preserved decimal point, `true`/`false`, `none`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(value) => write!(f, "{:?}", value),
            Scalar::Int(value) => write!(f, "{}", value),
            Scalar::Float(value) => {
                // Keep the decimal point so the literal round-trips as a float
                if value.is_finite() && value.fract() == 0.0 {
                    write!(f, "{:.1}", value)
                } else {
                    write!(f, "{}", value)
                }
            }
            Scalar::Bool(value) => write!(f, "{}", value),
            Scalar::None => write!(f, "none"),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(node)
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::Seq(elements)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Scalar(Scalar::Int(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(Scalar::Float(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Scalar(Scalar::Bool(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(Scalar::Str(value.to_string()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(Scalar::Str(value))
    }
}
