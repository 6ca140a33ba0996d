use std::collections::HashMap;

use crate::{
    ast::{expressions::Expression, statements::Statement},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator binding strength, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,        // f(x)
}

pub type StmtHandler = fn(&mut Parser) -> Option<Statement>;
pub type NUDHandler = fn(&mut Parser) -> Option<Expression>;
pub type LEDHandler = fn(&mut Parser, Expression, Precedence) -> Option<Expression>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality
    parser.led(TokenKind::Equals, Precedence::Equals, parse_infix_expr);
    parser.led(TokenKind::NotEquals, Precedence::Equals, parse_infix_expr);

    // Relational
    parser.led(TokenKind::Less, Precedence::LessGreater, parse_infix_expr);
    parser.led(TokenKind::Greater, Precedence::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, Precedence::Sum, parse_infix_expr);
    parser.led(TokenKind::Dash, Precedence::Sum, parse_infix_expr);
    parser.led(TokenKind::Star, Precedence::Product, parse_infix_expr);
    parser.led(TokenKind::Slash, Precedence::Product, parse_infix_expr);

    if parser.options().call_expressions {
        parser.led(TokenKind::OpenParen, Precedence::Call, parse_call_expr);
    }

    // Literals and symbols
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::Int, parse_integer_literal_expr);
    parser.nud(TokenKind::True, parse_boolean_expr);
    parser.nud(TokenKind::False, parse_boolean_expr);
    parser.nud(TokenKind::Bang, parse_prefix_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::If, parse_if_expr);
    parser.nud(TokenKind::Fn, parse_function_literal_expr);

    // Statements; anything else is an expression statement
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type PrecedenceLookup = HashMap<TokenKind, Precedence>;
