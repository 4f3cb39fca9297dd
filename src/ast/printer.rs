//! Debug printer for the syntax tree.
//!
//! Pre-order traversal, one line per node, two spaces of indent per level.
//! Byte literal values render with C-style escapes via
//! [`LiteralValue`](super::types::LiteralValue)'s `Display`.

use std::fmt::Write;

use super::ast::Node;

/// Renders the tree to a string.
pub fn render_ast(node: &Node) -> String {
    let mut out = String::new();
    render_node(node, 0, &mut out);
    out
}

/// Prints the tree to stdout.
pub fn print_ast(node: &Node) {
    print!("{}", render_ast(node));
}

fn render_node(node: &Node, indent: usize, out: &mut String) {
    let pad = " ".repeat(indent);

    match node {
        Node::Block { children } => {
            let _ = writeln!(out, "{}Block", pad);
            for child in children {
                render_node(child, indent + 2, out);
            }
        }
        Node::Literal { value, .. } => {
            let _ = writeln!(out, "{}Literal({})", pad, value);
        }
        Node::Identifier { name } => {
            let _ = writeln!(out, "{}Identifier({})", pad, name);
        }
        Node::Binary {
            operator,
            left,
            right,
        } => {
            let _ = writeln!(out, "{}BinaryExpr({})", pad, operator);
            render_node(left, indent + 2, out);
            render_node(right, indent + 2, out);
        }
        Node::FunctionDecl {
            modifiers,
            name,
            params,
            return_type,
            body,
        } => {
            let _ = writeln!(
                out,
                "{}FunctionDecl({} {}) -> {}",
                pad,
                modifiers.join(" "),
                name,
                return_type
            );
            let _ = writeln!(out, "{}  Params:", pad);
            for (param_type, param_name) in params {
                let _ = writeln!(out, "{}    {} {}", pad, param_type, param_name);
            }
            let _ = writeln!(out, "{}  Body:", pad);
            render_node(body, indent + 4, out);
        }
        Node::Return { value } => {
            let _ = writeln!(out, "{}ReturnExpr", pad);
            render_node(value, indent + 2, out);
        }
        Node::If {
            condition,
            then_branch,
            else_branch,
        } => {
            let _ = writeln!(out, "{}IfExpr", pad);
            let _ = writeln!(out, "{}  Condition:", pad);
            render_node(condition, indent + 4, out);
            let _ = writeln!(out, "{}  Then:", pad);
            render_node(then_branch, indent + 4, out);
            if let Some(else_node) = else_branch {
                let _ = writeln!(out, "{}  Else:", pad);
                render_node(else_node, indent + 4, out);
            }
        }
        Node::VarDecl {
            is_const,
            name,
            declared_type,
            initializer,
        } => {
            let keyword = if *is_const { "const" } else { "var" };
            let _ = writeln!(out, "{}VarDecl({} {} : {})", pad, keyword, name, declared_type);
            if let Some(value) = initializer {
                render_node(value, indent + 2, out);
            }
        }
        Node::Assign { target, value } => {
            let _ = writeln!(out, "{}AssignExpr({})", pad, target);
            render_node(value, indent + 2, out);
        }
        Node::ConstDecl | Node::For | Node::Match | Node::Unary | Node::Call => {
            let _ = writeln!(out, "{}Unknown AST Node", pad);
        }
    }
}
