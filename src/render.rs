//! Tree rendering
//!
//! Walks a parse tree and renders every subtree either collapsed on one line
//! or expanded across indented lines, depending on its weight against the
//! configured budget. Nesting is encoded as indentation, two spaces per
//! level; expanded node fields are prefixed with their field name, expanded
//! sequence elements with `- `.
//!
//! Example, budget 7:
//!
//! ```text
//! Module
//!   body:
//!     - Assign { target: Name { id: "x" }, value: Constant { value: 1 } }
//!     - Expr
//!       value: Call
//!         func: Name { id: "print" }
//!         args:
//!           - Constant { value: "hello" }
//!           - Name { id: "x" }
//! ```
//!
//! The walk recurses as deep as the input nests; adversarially deep trees
//! can exhaust the call stack. Known limitation.

pub mod complexity;
pub mod format;

pub use complexity::weight;
pub use format::{format_one_line, format_type, format_value, Styling};

use crate::ast::Value;

/// Default maximum weight a subtree may have and still be kept on one line.
pub const DEFAULT_MAX_LINE_COMPLEXITY: usize = 7;

/// Options controlling how a tree is rendered.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Highest weight rendered on a single line.
    pub max_line_complexity: usize,
    pub styling: Styling,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            max_line_complexity: DEFAULT_MAX_LINE_COMPLEXITY,
            styling: Styling::Color,
        }
    }
}

/// Render a tree to its multi-line textual form.
///
/// Output is a pure function of the tree and the options; every produced
/// line ends with a newline.
pub fn render_tree(value: &Value, options: &RenderOptions) -> String {
    let mut result = String::new();
    walk_value(&mut result, value, "", "", options);
    result
}

fn walk_value(result: &mut String, value: &Value, indent: &str, prefix: &str, options: &RenderOptions) {
    if weight(value) <= options.max_line_complexity {
        result.push_str(&format!(
            "{}{}{}\n",
            indent,
            prefix,
            format_one_line(value, options.styling)
        ));
        return;
    }

    match value {
        Value::Node(node) => {
            result.push_str(&format!(
                "{}{}{}\n",
                indent,
                prefix,
                format_type(node.type_name, options.styling)
            ));

            let child_indent = format!("{}  ", indent);
            for (name, field_value) in &node.fields {
                walk_value(
                    result,
                    field_value,
                    &child_indent,
                    &format!("{}: ", name),
                    options,
                );
            }
        }
        Value::Seq(elements) => {
            // Bare header line; the elements carry the content
            result.push_str(&format!("{}{}\n", indent, prefix));

            let child_indent = format!("{}  ", indent);
            for element in elements {
                walk_value(result, element, &child_indent, "- ", options);
            }
        }
        Value::Scalar(scalar) => {
            // Only long text gets here; scalars have no children to expand
            result.push_str(&format!(
                "{}{}{}\n",
                indent,
                prefix,
                format_value(scalar, options.styling)
            ));
        }
    }
}
