/// AST (Abstract Syntax Tree) module
/// Contains the tree produced by the parser
///
/// Submodules:
/// - ast: the root `Program` and the `Node` trait shared by every node
/// - expressions: expression variants
/// - statements: statement variants and blocks
///
/// `Display` on any node is its canonical reconstruction: every prefix and
/// infix expression is fully parenthesized, so the rendered text witnesses
/// how precedence was resolved.
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
