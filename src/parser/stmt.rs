use tracing::trace;

use crate::{
    ast::{
        expressions::{Expression, Identifier},
        statements::{BlockStmt, Statement},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::Precedence},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    trace!(kind = %parser.current_token_kind(), "parse_stmt");

    if let Some(handler) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Statement> {
    // let name = value;
    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }
    let name = Identifier::new(parser.current_token().value.clone());

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest);
    let value = finish_stmt(parser, value)?;

    Some(Statement::Let { name, value })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Statement> {
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest);
    let value = finish_stmt(parser, value)?;

    Some(Statement::Return { value })
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Statement> {
    let value = parse_expr(parser, Precedence::Lowest);
    let value = finish_stmt(parser, value)?;

    Some(Statement::Expression { value })
}

/// Parses statements up to the matching `}` or end of input.
///
/// Expects `{` as the current token and leaves `}` (or `EOF`) current.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStmt {
    trace!("parse_block_stmt");
    parser.advance();

    let mut body = Vec::new();
    while !parser.current_token_is(TokenKind::CloseCurly) && !parser.current_token_is(TokenKind::EOF)
    {
        if let Some(stmt) = parse_stmt(parser) {
            body.push(stmt);
        }
        parser.advance();
    }

    BlockStmt { body }
}

/// Consumes the `;` ending a statement and hands its value back.
///
/// The `;` is taken even when the value is absent, so a failed statement
/// does not leave it behind for the statement loop. A missing `;` is only an
/// error with `strict_semicolons`, and even then not when the statement is
/// the last one of a block or of the input.
fn finish_stmt(parser: &mut Parser, value: Option<Expression>) -> Option<Expression> {
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
        return value;
    }

    let value = value?;

    if !parser.options().strict_semicolons
        || parser.peek_token_is(TokenKind::CloseCurly)
        || parser.peek_token_is(TokenKind::EOF)
        || parser.expect_peek(TokenKind::Semicolon)
    {
        return Some(value);
    }

    None
}
