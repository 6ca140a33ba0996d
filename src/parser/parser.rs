//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program loop.
//! The parser pulls tokens from a [`TokenSource`] through a two-token window
//! (current and peek) and uses a Pratt parser with NUD/LED handlers for
//! expressions.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Operator precedences
//!
//! Diagnostics never abort parsing. They are collected on the parser and
//! the offending statement is left out of the program.

use std::{collections::HashMap, mem};

use tracing::{debug, debug_span};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        source::{TokenSource, TokenStream},
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, LEDHandler, LEDLookup, NUDHandler, NUDLookup, Precedence,
        PrecedenceLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Knobs for a single parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Require `;` after `let`, `return` and expression statements, unless the
    /// statement is the last one before `}` or end of input. Off by default:
    /// a missing `;` is tolerated and a present one is consumed.
    pub strict_semicolons: bool,
    /// Register `(` as an infix operator so that `f(x, y)` parses as a call.
    /// Off by default, in which case an expression ends before `(` and
    /// `a (b)` is two statements.
    pub call_expressions: bool,
}

/// How deeply expressions may nest before the parser gives up on one.
///
/// Each nested operand, group or block costs a level. The limit keeps both
/// parsing and the recursive walks over the finished tree within the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// One parser handles exactly one token stream.
pub struct Parser {
    /// Where tokens come from
    source: Box<dyn TokenSource>,
    /// The token under examination
    current: Token,
    /// The token after `current`
    peek: Token,
    /// Diagnostics in the order they were recorded
    errors: Vec<Error>,
    options: ParserOptions,
    /// Expressions currently being parsed, outermost included
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for operator precedence
    precedence_lookup: PrecedenceLookup,
}

impl Parser {
    /// Creates a parser with default options and both lookahead slots filled.
    pub fn new(source: impl TokenSource + 'static) -> Self {
        Parser::with_options(source, ParserOptions::default())
    }

    pub fn with_options(source: impl TokenSource + 'static, options: ParserOptions) -> Self {
        let mut source: Box<dyn TokenSource> = Box::new(source);
        let current = source.next_token();
        let peek = source.next_token();

        let mut parser = Parser {
            source,
            current,
            peek,
            errors: vec![],
            options,
            depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Parses statements until end of input.
    ///
    /// Statements that fail to parse are skipped; their diagnostics are
    /// available from [`Parser::errors`] afterwards.
    pub fn parse_program(&mut self) -> Program {
        let _span = debug_span!("parse_program").entered();
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.advance();
        }

        debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }

    /// Diagnostic messages in the order they were recorded.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Diagnostics with their source positions.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the token after the current one.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts peek into current and pulls a new peek token.
    pub fn advance(&mut self) {
        let next = self.source.next_token();
        self.current = mem::replace(&mut self.peek, next);
    }

    /// Advances only if the peek token is `kind`.
    ///
    /// Otherwise records an `UnexpectedToken` diagnostic at the peek token
    /// and leaves the window untouched.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.advance();
            return true;
        }

        let position = self.peek.span.start.clone();
        self.push_error(
            ErrorImpl::UnexpectedToken {
                expected: kind,
                got: self.peek.kind,
            },
            position,
        );
        false
    }

    /// Precedence of the peek token; `Lowest` for non-operators.
    pub fn peek_precedence(&self) -> Precedence {
        self.precedence_of(self.peek.kind)
    }

    /// Precedence of the current token; `Lowest` for non-operators.
    pub fn current_precedence(&self) -> Precedence {
        self.precedence_of(self.current.kind)
    }

    fn precedence_of(&self, kind: TokenKind) -> Precedence {
        self.precedence_lookup
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    /// Enters one more level of expression nesting.
    ///
    /// Past [`MAX_NESTING_DEPTH`] this records a `NestingTooDeep` diagnostic
    /// at the current token and returns false without entering.
    pub fn enter_nesting(&mut self) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            let position = self.current.span.start.clone();
            self.push_error(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                position,
            );
            return false;
        }

        self.depth += 1;
        true
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn push_error(&mut self, error: ErrorImpl, position: Position) {
        let error = Error::new(error, position);
        debug!(error = %error, position = error.get_position().0, "recorded parse diagnostic");
        self.errors.push(error);
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the precedence lookup table.
    pub fn get_precedence_lookup(&self) -> &PrecedenceLookup {
        &self.precedence_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `precedence` - How tightly this operator binds
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, precedence: Precedence, led_fn: LEDHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for expressions led by this token
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses an already-scanned list of tokens.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (holding the diagnostics)
/// - The parsed Program
pub fn parse(tokens: Vec<Token>) -> (Parser, Program) {
    let mut parser = Parser::new(TokenStream::new(tokens));
    let program = parser.parse_program();

    (parser, program)
}
