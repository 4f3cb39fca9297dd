use crate::{
    ast::{ast::Node, types::PrimitiveType},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{parser::Parser, types::parse_type};

/// Parses a function declaration: leading modifiers, name, parameter
/// list, optional return type, optional braced body.
pub fn parse_function(parser: &mut Parser) -> Result<Node, Error> {
    let mut modifiers = vec![];

    // Up to three leading modifier keywords, order preserved. A fourth
    // modifier stays put and fails the function-name check below.
    for _ in 0..3 {
        if parser.current_token_kind().is_modifier() {
            modifiers.push(parser.advance()?.text);
        } else {
            break;
        }
    }

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().text.clone(),
            message: String::from("expected function name"),
        },
        parser.get_position(),
    );
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?.text;

    parser.expect(TokenKind::OpenParen)?;

    let mut params = vec![];
    while parser.current_token_kind() != TokenKind::CloseParen {
        let param_type = parse_type(parser)?;

        if parser.current_token_kind() == TokenKind::OpenBracket {
            // int32 [a, b] declares several names sharing one type, each
            // emitted as its own parameter entry.
            parser.advance()?;
            loop {
                let error = Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: parser.current_token().text.clone(),
                        message: String::from("expected parameter name inside brackets"),
                    },
                    parser.get_position(),
                );
                let param_name = parser.expect_error(TokenKind::Identifier, Some(error))?.text;
                params.push((param_type, param_name));

                if parser.current_token_kind() == TokenKind::Comma {
                    parser.advance()?;
                } else if parser.current_token_kind() == TokenKind::CloseBracket {
                    parser.advance()?;
                    break;
                } else {
                    return Err(Error::new(
                        ErrorImpl::UnexpectedTokenDetailed {
                            token: parser.current_token().text.clone(),
                            message: String::from("expected ',' or ']' in parameter list"),
                        },
                        parser.get_position(),
                    ));
                }
            }
        } else {
            let error = Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().text.clone(),
                    message: String::from("expected parameter name"),
                },
                parser.get_position(),
            );
            let param_name = parser.expect_error(TokenKind::Identifier, Some(error))?.text;
            params.push((param_type, param_name));
        }

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance()?;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let return_type = if parser.current_token_kind() != TokenKind::OpenCurly {
        parse_type(parser)?
    } else {
        PrimitiveType::Void
    };

    // A declaration without a body is syntactically legal; it gets an
    // empty block.
    let body = if parser.current_token_kind() == TokenKind::OpenCurly {
        parse_braced_block(parser)?
    } else {
        Node::Block { children: vec![] }
    };

    Ok(Node::FunctionDecl {
        modifiers,
        name,
        params,
        return_type,
        body: Box::new(body),
    })
}

/// Parses `{ <expr>* }` into a block. One `;` after each expression is
/// consumed when present, same as at top level.
pub fn parse_braced_block(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut children = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly
        && parser.current_token_kind() != TokenKind::EOF
    {
        children.push(parse_expr(parser, BindingPower::Default)?);

        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance()?;
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Node::Block { children })
}

/// Parses a variable declaration: `var`/`const`, name, `:`, type, and an
/// optional `= <expr>` initializer. A missing initializer is accepted
/// even for `const`; requiring one is a semantic concern.
pub fn parse_var_decl(parser: &mut Parser) -> Result<Node, Error> {
    let is_const = parser.advance()?.kind == TokenKind::Const;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().text.clone(),
            message: String::from("expected variable name"),
        },
        parser.get_position(),
    );
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?.text;

    parser.expect(TokenKind::Colon)?;

    let declared_type = parse_type(parser)?;

    let initializer = if parser.current_token_kind() == TokenKind::Assign {
        parser.advance()?;
        Some(Box::new(parse_expr(parser, BindingPower::Default)?))
    } else {
        None
    };

    Ok(Node::VarDecl {
        is_const,
        name,
        declared_type,
        initializer,
    })
}

/// Parses `if <expr> { <expr>* }`, optionally followed by `else` and
/// either another `if` (nesting the chain into the else branch) or a
/// braced block. Anything else after `else` is an error.
pub fn parse_if_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::If)?;

    let condition = parse_expr(parser, BindingPower::Default)?;
    let then_branch = parse_braced_block(parser)?;

    let else_branch = if parser.current_token_kind() == TokenKind::Else {
        parser.advance()?;
        match parser.current_token_kind() {
            TokenKind::If => Some(Box::new(parse_if_expr(parser)?)),
            TokenKind::OpenCurly => Some(Box::new(parse_braced_block(parser)?)),
            _ => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: parser.current_token().text.clone(),
                        message: String::from("expected '{' or 'if' after 'else'"),
                    },
                    parser.get_position(),
                ))
            }
        }
    } else {
        None
    };

    Ok(Node::If {
        condition: Box::new(condition),
        then_branch: Box::new(then_branch),
        else_branch,
    })
}
