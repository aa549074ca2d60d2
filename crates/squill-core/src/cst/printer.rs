//! Exact printer for the SQL CST
//!
//! Printing is a token concatenation walk of the tree. Because the lexer
//! and parser never drop or normalize a byte, printing a freshly parsed
//! tree reproduces the source exactly, and printing an edited tree changes
//! only the text of the replaced subtrees.

use std::fmt::Write;

use rowan::NodeOrToken;

use super::nodes::SqlSyntaxNode;

/// Print a node and everything under it, exactly as stored
pub fn print(node: &SqlSyntaxNode) -> String {
    let mut out = String::with_capacity(usize::from(node.text_range().len()));
    for element in node.descendants_with_tokens() {
        if let NodeOrToken::Token(token) = element {
            out.push_str(token.text());
        }
    }
    out
}

/// Print into any `fmt::Write` sink
pub fn print_to<W: Write>(node: &SqlSyntaxNode, out: &mut W) -> std::fmt::Result {
    for element in node.descendants_with_tokens() {
        if let NodeOrToken::Token(token) = element {
            out.write_str(token.text())?;
        }
    }
    Ok(())
}
