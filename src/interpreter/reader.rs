use crate::{ast::Node, interpreter::value::Value};

/// Converts a parse-tree node into a value, consuming the node.
///
/// Leaf rules become leaf values; grouping rules become containers whose
/// children are read recursively in source order. Purely syntactic
/// children are dropped: bracket literals (`(`, `)`, `{`, `}`) and nodes
/// tagged exactly `regex` (the input anchors around the root).
///
/// Tags are matched by substring so that composite rule tags (such as
/// `expr|qexpr`) resolve the same way as plain ones. The root `>` node is
/// read as an S-expression, which is what makes a bare top-level
/// application like `+ 1 2` evaluate.
#[must_use]
pub fn read(node: Node) -> Value {
    if node.tag.contains("number") {
        return read_number(&node.contents);
    }
    if node.tag.contains("symbol") {
        return Value::Symbol(node.contents);
    }

    let mut children = Vec::with_capacity(node.children.len());

    for child in node.children {
        if matches!(child.contents.as_str(), "(" | ")" | "{" | "}") {
            continue;
        }
        if child.tag == "regex" {
            continue;
        }

        children.push(read(child));
    }

    if node.tag.contains("qexpr") {
        Value::qexpr(children)
    } else {
        Value::sexpr(children)
    }
}

/// Parses a number leaf's contents as a base-10 signed integer.
///
/// A literal that does not fit in an `i64` yields an `invalid number`
/// error value instead of a number.
fn read_number(contents: &str) -> Value {
    contents.parse::<i64>()
            .map_or_else(|_| Value::error("invalid number"), Value::number)
}
