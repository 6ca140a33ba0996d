//! Unit tests for diagnostics.
//!
//! This module contains tests for diagnostic kinds, messages and tips.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.mk".to_string()))
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            got: TokenKind::Int,
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.mk");
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assign,
            got: TokenKind::Int,
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.to_string(), "expected token Assign -- got Int");
}

#[test]
fn test_missing_prefix_handler_error() {
    let error = Error::new(
        ErrorImpl::MissingPrefixHandler {
            kind: TokenKind::Greater,
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "MissingPrefixHandler");
    assert_eq!(
        error.to_string(),
        "no prefix parse function for Greater found"
    );
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_integer_parse_error() {
    let error = Error::new(
        ErrorImpl::IntegerParseError {
            literal: "99999999999999999999".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "IntegerParseError");
    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::MissingPrefixHandler {
            kind: TokenKind::Illegal,
        },
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_kind_accessor() {
    let error = Error::new(
        ErrorImpl::MissingPrefixHandler {
            kind: TokenKind::Semicolon,
        },
        at(3),
    );

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::MissingPrefixHandler {
            kind: TokenKind::Semicolon
        }
    );
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 }, at(9));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "expression nested deeper than 256 levels");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}
