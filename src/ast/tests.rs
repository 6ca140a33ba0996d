//! Unit tests for AST reconstruction.

use super::{
    ast::{Node, Program},
    expressions::{Expression, Identifier},
    statements::{BlockStmt, Statement},
};

fn ident(name: &str) -> Expression {
    Expression::Identifier(Identifier::new(name))
}

fn infix(left: Expression, operator: &str, right: Expression) -> Expression {
    Expression::Infix {
        left: Box::new(left),
        operator: operator.to_string(),
        right: Box::new(right),
    }
}

#[test]
fn test_let_statement_string() {
    let program = Program {
        statements: vec![Statement::Let {
            name: Identifier::new("myVar"),
            value: ident("anotherVar"),
        }],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_empty_program() {
    let program = Program::default();

    assert!(program.is_empty());
    assert_eq!(program.to_string(), "");
    assert_eq!(program.token_literal(), "");
}

#[test]
fn test_prefix_and_infix_are_parenthesized() {
    let expression = infix(
        Expression::Prefix {
            operator: "-".to_string(),
            right: Box::new(ident("a")),
        },
        "*",
        ident("b"),
    );

    assert_eq!(expression.to_string(), "((-a) * b)");
    assert_eq!(expression.token_literal(), "*");
}

#[test]
fn test_return_statement_string() {
    let statement = Statement::Return {
        value: Expression::integer(5),
    };

    assert_eq!(statement.to_string(), "return 5;");
    assert_eq!(statement.token_literal(), "return");
}

#[test]
fn test_if_expression_string() {
    let without_else = Expression::If {
        condition: Box::new(infix(ident("x"), "<", ident("y"))),
        consequence: BlockStmt {
            body: vec![Statement::Expression { value: ident("x") }],
        },
        alternative: None,
    };
    assert_eq!(without_else.to_string(), "if(x < y) x");

    let with_else = Expression::If {
        condition: Box::new(Expression::Boolean(true)),
        consequence: BlockStmt {
            body: vec![Statement::Expression { value: ident("x") }],
        },
        alternative: Some(BlockStmt {
            body: vec![Statement::Expression { value: ident("y") }],
        }),
    };
    assert_eq!(with_else.to_string(), "iftrue x else y");
    assert_eq!(with_else.token_literal(), "if");
}

#[test]
fn test_function_literal_string() {
    let function = Expression::FunctionLiteral {
        parameters: vec![Identifier::new("x"), Identifier::new("y")],
        body: BlockStmt {
            body: vec![Statement::Expression {
                value: infix(ident("x"), "+", ident("y")),
            }],
        },
    };

    assert_eq!(function.to_string(), "fn(x, y) (x + y)");
    assert_eq!(function.token_literal(), "fn");
}

#[test]
fn test_call_expression_string() {
    let call = Expression::Call {
        function: Box::new(ident("add")),
        arguments: vec![
            Expression::integer(1),
            infix(Expression::integer(2), "*", Expression::integer(3)),
        ],
    };

    assert_eq!(call.to_string(), "add(1, (2 * 3))");
    assert_eq!(call.token_literal(), "(");
}

#[test]
fn test_program_iterates_in_order() {
    let program = Program {
        statements: vec![
            Statement::Expression { value: ident("a") },
            Statement::Expression { value: ident("b") },
        ],
    };

    let rendered: Vec<String> = program.iter().map(|s| s.to_string()).collect();
    assert_eq!(rendered, vec!["a", "b"]);
    assert_eq!(program.to_string(), "ab");
}
