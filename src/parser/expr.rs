use tracing::trace;

use crate::{
    ast::{
        expressions::{Expression, Identifier},
        statements::BlockStmt,
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser, stmt::parse_block_stmt};

// Every handler starts with the token that selected it as the current token
// and returns with the last token of its expression as the current token.

pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Option<Expression> {
    if !parser.enter_nesting() {
        return None;
    }

    let expr = parse_nested_expr(parser, precedence);
    parser.leave_nesting();
    expr
}

fn parse_nested_expr(parser: &mut Parser, precedence: Precedence) -> Option<Expression> {
    let kind = parser.current_token_kind();
    trace!(%kind, ?precedence, "parse_expr");

    // First parse NUD
    let Some(nud) = parser.get_nud_lookup().get(&kind).copied() else {
        let position = parser.current_token().span.start.clone();
        parser.push_error(ErrorImpl::MissingPrefixHandler { kind }, position);
        return None;
    };

    let mut left = nud(parser)?;

    // Strictly greater, so equal precedence chains to the left
    while !parser.peek_token_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let Some(led) = parser.get_led_lookup().get(&parser.peek_token_kind()).copied() else {
            return Some(left);
        };

        parser.advance();
        let operator_precedence = parser.current_precedence();
        left = led(parser, left, operator_precedence)?;
    }

    Some(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Option<Expression> {
    Some(Expression::Identifier(Identifier::new(
        parser.current_token().value.clone(),
    )))
}

pub fn parse_integer_literal_expr(parser: &mut Parser) -> Option<Expression> {
    let literal = parser.current_token().value.clone();

    let value = match literal.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            let position = parser.current_token().span.start.clone();
            parser.push_error(
                ErrorImpl::IntegerParseError {
                    literal: literal.clone(),
                },
                position,
            );
            0
        }
    };

    Some(Expression::IntegerLiteral { value, literal })
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Option<Expression> {
    Some(Expression::Boolean(parser.current_token_is(TokenKind::True)))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expression> {
    let operator = parser.current_token().value.clone();
    parser.advance();

    let right = parse_expr(parser, Precedence::Prefix)?;

    Some(Expression::Prefix {
        operator,
        right: Box::new(right),
    })
}

pub fn parse_infix_expr(
    parser: &mut Parser,
    left: Expression,
    precedence: Precedence,
) -> Option<Expression> {
    let operator = parser.current_token().value.clone();
    parser.advance();

    let right = parse_expr(parser, precedence)?;

    Some(Expression::Infix {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expression> {
    parser.advance();
    let expr = parse_expr(parser, Precedence::Lowest)?;

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<Expression> {
    // if (condition) { consequence } else { alternative }
    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }
    parser.advance();

    let condition = parse_expr(parser, Precedence::Lowest)?;

    if !parser.expect_peek(TokenKind::CloseParen) || !parser.expect_peek(TokenKind::OpenCurly) {
        return None;
    }

    let consequence = parse_block_stmt(parser);

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.advance();
        if !parser.expect_peek(TokenKind::OpenCurly) {
            return None;
        }
        Some(parse_block_stmt(parser))
    } else {
        None
    };

    Some(Expression::If {
        condition: Box::new(condition),
        consequence,
        alternative,
    })
}

pub fn parse_function_literal_expr(parser: &mut Parser) -> Option<Expression> {
    // fn(a, b) { body }
    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }

    let parameters = parse_function_parameters(parser)?;

    if !parser.expect_peek(TokenKind::OpenCurly) {
        return None;
    }

    let body: BlockStmt = parse_block_stmt(parser);

    Some(Expression::FunctionLiteral { parameters, body })
}

fn parse_function_parameters(parser: &mut Parser) -> Option<Vec<Identifier>> {
    let mut parameters = Vec::new();

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.advance();
        return Some(parameters);
    }

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }
    parameters.push(Identifier::new(parser.current_token().value.clone()));

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        if !parser.expect_peek(TokenKind::Identifier) {
            return None;
        }
        parameters.push(Identifier::new(parser.current_token().value.clone()));
    }

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(parameters)
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: Expression,
    _precedence: Precedence,
) -> Option<Expression> {
    let arguments = parse_call_arguments(parser)?;

    Some(Expression::Call {
        function: Box::new(left),
        arguments,
    })
}

fn parse_call_arguments(parser: &mut Parser) -> Option<Vec<Expression>> {
    let mut arguments = Vec::new();

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.advance();
        return Some(arguments);
    }

    parser.advance();
    arguments.push(parse_expr(parser, Precedence::Lowest)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        arguments.push(parse_expr(parser, Precedence::Lowest)?);
    }

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(arguments)
}
