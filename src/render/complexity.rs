//! Complexity scoring for parse tree values
//!
//! The renderer collapses a subtree onto one line when its weight fits the
//! configured budget. The weight is a rough proxy for how much the eye has
//! to parse if the subtree were flattened: each node name, field name, and
//! plain leaf counts as one, and text leaves grow with their length.

use crate::ast::{Scalar, Value};

/// Compute the weight of a value, bottom-up.
///
/// - A node costs 1, plus 1 per field, plus each field value's weight.
/// - A sequence costs only the sum of its elements; an empty one is 0.
/// - Text costs one per started run of ten characters.
/// - Every other scalar costs 1.
///
/// Pure and uncached; callers score each value at most once per render.
pub fn weight(value: &Value) -> usize {
    match value {
        Value::Node(node) => {
            1 + node
                .fields
                .iter()
                .map(|(_, field_value)| 1 + weight(field_value))
                .sum::<usize>()
        }
        Value::Seq(elements) => elements.iter().map(weight).sum(),
        Value::Scalar(Scalar::Str(text)) => text.chars().count() / 10 + 1,
        Value::Scalar(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Node;

    #[test]
    fn test_scalar_weights() {
        assert_eq!(weight(&Value::from(42)), 1);
        assert_eq!(weight(&Value::from(true)), 1);
        assert_eq!(weight(&Value::Scalar(Scalar::None)), 1);
    }

    #[test]
    fn test_text_weight_grows_with_length() {
        assert_eq!(weight(&Value::from("")), 1);
        assert_eq!(weight(&Value::from("123456789")), 1);
        assert_eq!(weight(&Value::from("1234567890")), 2);
        assert_eq!(weight(&Value::from("a".repeat(35).as_str())), 4);
    }

    #[test]
    fn test_text_weight_counts_characters_not_bytes() {
        // Ten two-byte characters still weigh like ten characters
        assert_eq!(weight(&Value::from("éééééééééé")), 2);
    }

    #[test]
    fn test_node_weight() {
        // 1 for the node, 1 + 1 per scalar field
        let point = Node::new("Point").field("x", 1).field("y", 2);
        assert_eq!(weight(&point.into()), 5);
    }

    #[test]
    fn test_fieldless_node_weighs_one() {
        assert_eq!(weight(&Node::new("Add").into()), 1);
    }

    #[test]
    fn test_sequence_weight_is_sum_of_elements() {
        assert_eq!(weight(&Value::Seq(Vec::new())), 0);
        let elements = vec![Value::from(1), Value::from(2), Value::from(3)];
        assert_eq!(weight(&Value::Seq(elements)), 3);
    }

    #[test]
    fn test_weight_is_idempotent() {
        let tree: Value = Node::new("Assign")
            .field("target", Node::new("Name").field("id", "x"))
            .field("value", 1)
            .into();
        let first = weight(&tree);
        assert_eq!(weight(&tree), first);
        assert_eq!(weight(&tree), first);
    }
}
