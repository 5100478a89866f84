//! Atomic value formatting
//!
//! Produces the textual pieces the renderer assembles into lines: styled
//! type labels, styled scalar literals, and the recursive single-line form
//! of an arbitrary subtree. Everything here is blind to the complexity
//! budget; deciding whether the single-line form is used at all is the
//! renderer's job.

use crossterm::style::Stylize;

use crate::ast::{Scalar, Value};

/// Whether to emit ANSI styling or plain text.
///
/// Styling is purely cosmetic: plain output is the styled output with the
/// escape sequences stripped, byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Styling {
    #[default]
    Color,
    Plain,
}

/// Format a node's type name, bold when styled.
pub fn format_type(type_name: &str, styling: Styling) -> String {
    match styling {
        Styling::Color => type_name.bold().to_string(),
        Styling::Plain => type_name.to_string(),
    }
}

/// Format a scalar's canonical literal, green when styled.
pub fn format_value(scalar: &Scalar, styling: Styling) -> String {
    match styling {
        Styling::Color => scalar.to_string().green().to_string(),
        Styling::Plain => scalar.to_string(),
    }
}

/// Format a whole subtree on a single line.
///
/// Nodes render as `Type { field: value, … }` (a fieldless node is just its
/// label), sequences as `[e1, e2, …]`, scalars as their literal. The
/// separator is exactly `", "`.
pub fn format_one_line(value: &Value, styling: Styling) -> String {
    match value {
        Value::Node(node) => {
            let mut result = format_type(node.type_name, styling);

            if !node.fields.is_empty() {
                let fields_str = node
                    .fields
                    .iter()
                    .map(|(name, field_value)| {
                        format!("{}: {}", name, format_one_line(field_value, styling))
                    })
                    .collect::<Vec<_>>()
                    .join(", ");

                result.push_str(&format!(" {{ {} }}", fields_str));
            }

            result
        }
        Value::Seq(elements) => {
            let elements_str = elements
                .iter()
                .map(|element| format_one_line(element, styling))
                .collect::<Vec<_>>()
                .join(", ");

            format!("[{}]", elements_str)
        }
        Value::Scalar(scalar) => format_value(scalar, styling),
    }
}
