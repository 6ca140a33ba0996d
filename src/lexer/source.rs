//! The token supply consumed by the parser.
//!
//! The parser never looks further ahead than one token past the current one,
//! so a source only has to hand out tokens in order. Sources are not
//! reversible; any buffering is the parser's job.

use std::{collections::VecDeque, rc::Rc};

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Produces tokens one at a time.
///
/// Implementations must eventually return a [`TokenKind::EOF`] token and keep
/// returning it on every later call.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// A token source over an already-built list of tokens.
///
/// Useful when the tokens come from somewhere other than [`Lexer`]
/// (a cache, a test, a different scanner). Once drained it yields `EOF`
/// positioned after the last token.
///
/// [`Lexer`]: super::lexer::Lexer
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
    end: Position,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens
            .last()
            .map(|token| token.span.end.clone())
            .unwrap_or_else(Position::null);

        TokenStream {
            tokens: tokens.into(),
            end,
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        match self.tokens.pop_front() {
            Some(token) => token,
            None => MK_TOKEN!(
                TokenKind::EOF,
                String::new(),
                Span {
                    start: self.end.clone(),
                    end: self.end.clone(),
                }
            ),
        }
    }
}

/// Builds a token with an empty span, for hand-assembled token lists.
pub fn synthetic_token(kind: TokenKind, value: &str) -> Token {
    let position = Position(0, Rc::new(String::from("<synthetic>")));
    MK_TOKEN!(
        kind,
        String::from(value),
        Span {
            start: position.clone(),
            end: position,
        }
    )
}
