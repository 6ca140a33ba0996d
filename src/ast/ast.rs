use std::{
    fmt::{Display, Formatter, Result},
    slice::Iter,
};

use super::statements::Statement;

/// Node Trait
///
/// Implemented by every tree node. `Display` gives the canonical
/// reconstruction; `token_literal` the text of the token that introduced
/// the node.
pub trait Node: Display {
    fn token_literal(&self) -> String;
}

/// Root of every parsed tree.
///
/// Statements are kept in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Statement> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    fn token_literal(&self) -> String {
        self.statements
            .first()
            .map(Node::token_literal)
            .unwrap_or_default()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}
