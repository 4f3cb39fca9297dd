//! Parser implementation for building the Abstract Syntax Tree.
//!
//! The parser is a single-writer cursor over a [`TokenStream`]: it reads
//! the current token, consumes it with `advance`, and looks one token
//! ahead with `peek`. Declarations and statements are parsed by fixed
//! recursive descent; expressions go through precedence climbing driven
//! by the binding-power table in [`super::lookups`].
//!
//! There is no recovery: the first lexical or syntactic error aborts the
//! whole parse and propagates to the caller. No partial tree is returned.

use std::rc::Rc;

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::TokenStream,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{expr::parse_expr, lookups::BindingPower, stmt::parse_function};

/// The main parser structure: the token cursor the grammar functions
/// thread their way through.
pub struct Parser {
    tokens: TokenStream,
}

impl Parser {
    pub fn new(tokens: TokenStream) -> Self {
        Parser { tokens }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.current()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.current().kind
    }

    /// Consumes the current token and returns it.
    pub fn advance(&mut self) -> Result<Token, Error> {
        self.tokens.advance()
    }

    /// Returns the token after the current one without consuming anything.
    pub fn peek(&mut self) -> Result<&Token, Error> {
        self.tokens.peek()
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(match error {
                Some(error) => error,
                None => Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.text.clone(),
                    },
                    self.get_position(),
                ),
            });
        }
        self.advance()
    }

    /// Expects a token of the specified kind with the default error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// The source position of the current token.
    pub fn get_position(&self) -> Position {
        Position(self.tokens.current().line, Rc::clone(self.tokens.file()))
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point. The result is always a `Block` holding
/// the top-level items in source order; an empty input yields an empty
/// `Block`.
pub fn parse(tokens: TokenStream) -> Result<Node, Error> {
    let mut parser = Parser::new(tokens);
    parse_program(&mut parser)
}

/// Parses top-level items until end of file.
///
/// An item is a function declaration when the current token is a modifier
/// keyword, or an identifier immediately followed by `(`; anything else
/// is a general expression. One `;` after each item is consumed when
/// present; separators are optional, never required.
pub fn parse_program(parser: &mut Parser) -> Result<Node, Error> {
    let mut children = vec![];

    while parser.current_token_kind() != TokenKind::EOF {
        let maybe_function = parser.current_token_kind().is_modifier()
            || (parser.current_token_kind() == TokenKind::Identifier
                && parser.peek()?.kind == TokenKind::OpenParen);

        let node = if maybe_function {
            parse_function(parser)?
        } else {
            parse_expr(parser, BindingPower::Default)?
        };
        children.push(node);

        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance()?;
        }
    }

    Ok(Node::Block { children })
}
