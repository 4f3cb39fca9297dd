use crate::{
    ast::{ast::Node, types::LiteralValue},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binding_power, BindingPower},
    parser::Parser,
    stmt::{parse_if_expr, parse_var_decl},
};

/// Parses one expression by precedence climbing.
///
/// An identifier immediately followed by `=` is an assignment: the value
/// is parsed with a fresh unbounded call, which makes assignment
/// right-associative, effectively lowest-precedence, and only
/// recognizable at the start of an expression (`1 + (x = 2)` needs the
/// parentheses). Otherwise one primary operand is parsed and binary
/// operators at or above `min_bp` are folded left-associatively around it.
pub fn parse_expr(parser: &mut Parser, min_bp: BindingPower) -> Result<Node, Error> {
    parse_expr_min(parser, min_bp as u8)
}

fn parse_expr_min(parser: &mut Parser, min_bp: u8) -> Result<Node, Error> {
    if parser.current_token_kind() == TokenKind::Identifier
        && parser.peek()?.kind == TokenKind::Assign
    {
        let target = parser.advance()?.text;
        parser.advance()?; // '='
        let value = parse_expr(parser, BindingPower::Default)?;

        return Ok(Node::Assign {
            target,
            value: Box::new(value),
        });
    }

    let mut left = parse_primary_expr(parser)?;

    // Tokens without a binding power are not operators; hitting one ends
    // the fold.
    while let Some(bp) = binding_power(parser.current_token_kind()) {
        if (bp as u8) < min_bp {
            break;
        }

        let operator = parser.advance()?;
        let right = parse_expr_min(parser, bp.next())?;

        left = Node::Binary {
            operator: operator.text,
            left: Box::new(left),
            right: Box::new(right),
        };
    }

    Ok(left)
}

/// Parses the smallest expression unit: a literal, an identifier, a
/// parenthesized expression, or one of the keyword-led forms.
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind() {
        TokenKind::If => parse_if_expr(parser),
        TokenKind::Var | TokenKind::Const => parse_var_decl(parser),
        TokenKind::Return => {
            parser.advance()?;
            let value = parse_expr(parser, BindingPower::Default)?;
            Ok(Node::Return {
                value: Box::new(value),
            })
        }
        TokenKind::Integer => {
            let position = parser.get_position();
            let token = parser.advance()?;
            // Bare integer literals are always 64-bit; narrower widths are
            // never inferred.
            let value = token.text.parse::<i64>().map_err(|_| {
                Error::new(ErrorImpl::NumberParseError { token: token.text.clone() }, position)
            })?;
            Ok(Node::literal(LiteralValue::Int64(value)))
        }
        TokenKind::Float => {
            let position = parser.get_position();
            let token = parser.advance()?;
            let value = token.text.parse::<f64>().map_err(|_| {
                Error::new(ErrorImpl::NumberParseError { token: token.text.clone() }, position)
            })?;
            Ok(Node::literal(LiteralValue::Float64(value)))
        }
        TokenKind::Unsigned => {
            let position = parser.get_position();
            let token = parser.advance()?;
            let value = token.text.parse::<u64>().map_err(|_| {
                Error::new(ErrorImpl::NumberParseError { token: token.text.clone() }, position)
            })?;
            Ok(Node::literal(LiteralValue::Uint64(value)))
        }
        TokenKind::Boolean => {
            let token = parser.advance()?;
            Ok(Node::literal(LiteralValue::Bool(token.text == "true")))
        }
        TokenKind::String => {
            let token = parser.advance()?;
            Ok(Node::literal(LiteralValue::Str(token.text)))
        }
        TokenKind::ByteLit => parse_byte_literal(parser),
        TokenKind::Identifier => {
            let token = parser.advance()?;
            Ok(Node::Identifier { name: token.text })
        }
        TokenKind::OpenParen => {
            parser.advance()?;
            let expr = parse_expr(parser, BindingPower::Default)?;
            parser.expect(TokenKind::CloseParen)?;
            Ok(expr)
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().text.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// Interprets a byte-literal lexeme, quotes included. The body must be
/// exactly one character, or one of the two-character escapes
/// `\n \t \r \\ \' \"`; anything else is an error.
fn parse_byte_literal(parser: &mut Parser) -> Result<Node, Error> {
    let position = parser.get_position();
    let token = parser.advance()?;
    let chars: Vec<char> = token.text.chars().collect();

    if chars.len() < 3 || chars[0] != '\'' || chars[chars.len() - 1] != '\'' {
        return Err(Error::new(
            ErrorImpl::InvalidByteLiteral { literal: token.text },
            position,
        ));
    }

    let value = if chars[1] == '\\' {
        if chars.len() != 4 {
            return Err(Error::new(
                ErrorImpl::InvalidByteLiteral { literal: token.text },
                position,
            ));
        }
        match chars[2] {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '\\' => '\\',
            '\'' => '\'',
            '"' => '"',
            _ => {
                return Err(Error::new(
                    ErrorImpl::InvalidByteLiteral { literal: token.text },
                    position,
                ))
            }
        }
    } else {
        if chars.len() != 3 {
            return Err(Error::new(
                ErrorImpl::InvalidByteLiteral { literal: token.text },
                position,
            ));
        }
        chars[1]
    };

    Ok(Node::literal(LiteralValue::Byte(value)))
}
