//! Graphviz rendering of a computation graph.
//!
//! Each node becomes a record `label | data | grad`; derived nodes get an
//! extra small node for their operation, with edges operand -> op -> node.
//! The output is meant for `dot -Tsvg`, not for loading graphs back.

use std::collections::HashMap;
use std::fmt::{self, Write};

use crate::autograd::graph::{topological_sort, NodeId};
use crate::autograd::Op;
use crate::value::Value;

/// Renders every node reachable from `root` in DOT format, left to right.
pub fn to_dot(root: &Value) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_dot(&mut out, root);
    out
}

fn write_dot(out: &mut impl Write, root: &Value) -> fmt::Result {
    let nodes = topological_sort(root);
    let ids: HashMap<NodeId, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.node_id(), i))
        .collect();

    writeln!(out, "digraph {{\n  rankdir=LR;")?;
    for (i, node) in nodes.iter().enumerate() {
        let guard = node.read_data();
        let label = guard.label.as_deref().unwrap_or("");
        writeln!(
            out,
            "  n{} [shape=record, label=\"{{ {} | data {:.4} | grad {:.4} }}\"];",
            i,
            escape(label),
            guard.data,
            guard.grad
        )?;
        if guard.op != Op::Leaf {
            writeln!(out, "  n{}_op [label=\"{}\"];", i, escape(&guard.op.to_string()))?;
            writeln!(out, "  n{}_op -> n{};", i, i)?;
            for operand in &guard.operands {
                writeln!(out, "  n{} -> n{}_op;", ids[&operand.node_id()], i)?;
            }
        }
    }
    writeln!(out, "}}")
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '"' | '{' | '}' | '|' | '<' | '>' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_dot_lists_nodes_and_edges() {
        let a = Value::with_label(3.0, "a");
        let b = Value::with_label(2.0, "b");
        let c = (&a * &b).labeled("c");
        c.backward();

        let dot = to_dot(&c);
        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("{ a | data 3.0000 | grad 2.0000 }"));
        assert!(dot.contains("{ b | data 2.0000 | grad 3.0000 }"));
        assert!(dot.contains("{ c | data 6.0000 | grad 1.0000 }"));
        assert!(dot.contains("n2_op [label=\"*\"]"));
        assert!(dot.contains("n0 -> n2_op;"));
        assert!(dot.contains("n1 -> n2_op;"));
        assert!(dot.contains("n2_op -> n2;"));
    }

    #[test]
    fn test_write_dot_closes_graph() {
        let x = Value::with_label(1.0, "x");
        let mut out = String::new();
        assert!(write_dot(&mut out, &x).is_ok());
        assert_eq!(out, to_dot(&x));
        assert!(out.ends_with("}\n"));
        assert_eq!(out.matches(" -> ").count(), 0);
    }

    #[test]
    fn test_escape_record_characters() {
        assert_eq!(escape("a|b"), "a\\|b");
        assert_eq!(escape("{x}"), "\\{x\\}");
    }
}
