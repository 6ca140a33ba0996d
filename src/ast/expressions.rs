use std::fmt::{Display, Formatter, Result};

use super::{ast::Node, statements::BlockStmt};

/// A name, either used as a value or bound by `let` / a parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub value: String,
}

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Identifier {
            value: value.into(),
        }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> String {
        self.value.clone()
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    /// `value` as scanned; `literal` keeps the source text it came from
    IntegerLiteral {
        value: i64,
        literal: String,
    },
    Boolean(bool),
    /// `!right` or `-right`
    Prefix {
        operator: String,
        right: Box<Expression>,
    },
    /// `left operator right`
    Infix {
        left: Box<Expression>,
        operator: String,
        right: Box<Expression>,
    },
    If {
        condition: Box<Expression>,
        consequence: BlockStmt,
        alternative: Option<BlockStmt>,
    },
    FunctionLiteral {
        parameters: Vec<Identifier>,
        body: BlockStmt,
    },
    /// `function(arguments...)`
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

impl Expression {
    /// An integer literal written in canonical decimal form.
    pub fn integer(value: i64) -> Self {
        Expression::IntegerLiteral {
            value,
            literal: value.to_string(),
        }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> String {
        match self {
            Expression::Identifier(identifier) => identifier.token_literal(),
            Expression::IntegerLiteral { literal, .. } => literal.clone(),
            Expression::Boolean(value) => value.to_string(),
            Expression::Prefix { operator, .. } | Expression::Infix { operator, .. } => {
                operator.clone()
            }
            Expression::If { .. } => String::from("if"),
            Expression::FunctionLiteral { .. } => String::from("fn"),
            Expression::Call { .. } => String::from("("),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expression::Identifier(identifier) => write!(f, "{}", identifier),
            Expression::IntegerLiteral { value, .. } => write!(f, "{}", value),
            Expression::Boolean(value) => write!(f, "{}", value),
            Expression::Prefix { operator, right } => write!(f, "({}{})", operator, right),
            Expression::Infix {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if{} {}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " else {}", alternative)?;
                }
                Ok(())
            }
            Expression::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {}", join(parameters), body)
            }
            Expression::Call {
                function,
                arguments,
            } => write!(f, "{}({})", function, join(arguments)),
        }
    }
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
