use std::{
    fmt::{Display, Formatter, Result},
    slice::Iter,
};

use super::{
    ast::Node,
    expressions::{Expression, Identifier},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let name = value;`
    Let { name: Identifier, value: Expression },
    /// `return value;`
    Return { value: Expression },
    /// A bare expression used as a statement.
    Expression { value: Expression },
    Block(BlockStmt),
}

/// Statements between `{` and `}`, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStmt {
    pub body: Vec<Statement>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Statement> {
        self.body.iter()
    }
}

impl Node for BlockStmt {
    fn token_literal(&self) -> String {
        String::from("{")
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for statement in &self.body {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

impl Node for Statement {
    fn token_literal(&self) -> String {
        match self {
            Statement::Let { .. } => String::from("let"),
            Statement::Return { .. } => String::from("return"),
            Statement::Expression { value } => value.token_literal(),
            Statement::Block(block) => block.token_literal(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {} = {};", name, value),
            Statement::Return { value } => write!(f, "return {};", value),
            Statement::Expression { value } => write!(f, "{}", value),
            Statement::Block(block) => write!(f, "{}", block),
        }
    }
}
