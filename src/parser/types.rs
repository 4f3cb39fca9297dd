//! Type parsing implementation.
//!
//! The type grammar is a single-token lookup: every type is spelled as
//! one primitive-type keyword.

use crate::{
    ast::types::PrimitiveType,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Maps the current keyword token to a [`PrimitiveType`] and consumes it.
/// Any other token is a syntax error naming the token and its line.
pub fn parse_type(parser: &mut Parser) -> Result<PrimitiveType, Error> {
    let primitive = match parser.current_token_kind() {
        TokenKind::KwVoid => PrimitiveType::Void,
        TokenKind::KwBoolean => PrimitiveType::Boolean,
        TokenKind::KwByte => PrimitiveType::Byte,
        TokenKind::KwString => PrimitiveType::String,
        TokenKind::KwInt8 => PrimitiveType::Int8,
        TokenKind::KwInt16 => PrimitiveType::Int16,
        TokenKind::KwInt32 => PrimitiveType::Int32,
        TokenKind::KwInt64 => PrimitiveType::Int64,
        TokenKind::KwUint8 => PrimitiveType::Uint8,
        TokenKind::KwUint16 => PrimitiveType::Uint16,
        TokenKind::KwUint32 => PrimitiveType::Uint32,
        TokenKind::KwUint64 => PrimitiveType::Uint64,
        TokenKind::KwFloat32 => PrimitiveType::Float32,
        TokenKind::KwFloat64 => PrimitiveType::Float64,
        _ => {
            return Err(Error::new(
                ErrorImpl::ExpectedType {
                    token: parser.current_token().text.clone(),
                },
                parser.get_position(),
            ))
        }
    };

    parser.advance()?;
    Ok(primitive)
}
