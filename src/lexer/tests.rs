//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and delimiters
//! - Comments and whitespace
//! - Illegal characters and end of input

use super::{
    lexer::{tokenize, Lexer},
    source::{synthetic_token, TokenSource, TokenStream},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.mk".to_string()))
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("let fn if else true false return"),
        vec![
            TokenKind::Let,
            TokenKind::Fn,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Return,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore letter".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    // Keyword prefixes do not split identifiers.
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "letter");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("5 10 9223372036854775808".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, "5");
    assert_eq!(tokens[1].value, "10");
    // Range checking is the parser's concern.
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[2].value, "9223372036854775808");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("= + - ! * / < > == != , ; ( ) { }"),
        vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Bang,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_without_whitespace() {
    assert_eq!(
        kinds("x==!y;"),
        vec![
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Bang,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_function_literal() {
    assert_eq!(
        kinds("let add = fn(x, y) { x + y; };"),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Fn,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    assert_eq!(
        kinds("// leading comment\nlet x = 5; // trailing\n// last"),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_illegal_characters_become_tokens() {
    let tokens = tokenize("a @ é".to_string(), None);

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "@");
    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].value, "é");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let  answer".to_string(), Some("spans.mk".to_string()));

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 11);
    assert_eq!(tokens[1].span.start.1.as_str(), "spans.mk");
    assert_eq!(tokens[2].span.start.0, 11);
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("  \n\t "), vec![TokenKind::EOF]);
}

#[test]
fn test_lexer_keeps_returning_eof() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_token_stream_drains_to_eof() {
    let mut stream = TokenStream::new(vec![
        synthetic_token(TokenKind::Int, "1"),
        synthetic_token(TokenKind::Semicolon, ";"),
    ]);

    assert_eq!(stream.next_token().value, "1");
    assert_eq!(stream.next_token().kind, TokenKind::Semicolon);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x".to_string(), None);
    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_token_display() {
    let token = synthetic_token(TokenKind::Int, "7");
    assert_eq!(token.to_string(), "Token {\nkind: Int,\nvalue: 7}");
}
