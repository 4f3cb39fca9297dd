use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("var", TokenKind::Var);
        map.insert("const", TokenKind::Const);
        map.insert("return", TokenKind::Return);
        map.insert("public", TokenKind::Public);
        map.insert("private", TokenKind::Private);
        map.insert("virtual", TokenKind::Virtual);
        map.insert("override", TokenKind::Override);
        map.insert("static", TokenKind::Static);
        map.insert("true", TokenKind::Boolean);
        map.insert("false", TokenKind::Boolean);
        map.insert("void", TokenKind::KwVoid);
        map.insert("boolean", TokenKind::KwBoolean);
        map.insert("byte", TokenKind::KwByte);
        map.insert("string", TokenKind::KwString);
        map.insert("int8", TokenKind::KwInt8);
        map.insert("int16", TokenKind::KwInt16);
        map.insert("int32", TokenKind::KwInt32);
        map.insert("int64", TokenKind::KwInt64);
        map.insert("uint8", TokenKind::KwUint8);
        map.insert("uint16", TokenKind::KwUint16);
        map.insert("uint32", TokenKind::KwUint32);
        map.insert("uint64", TokenKind::KwUint64);
        map.insert("float32", TokenKind::KwFloat32);
        map.insert("float64", TokenKind::KwFloat64);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,

    // Literals
    Integer,
    Float,
    Unsigned,
    ByteLit,
    String,
    Boolean,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Comma,
    Semicolon,
    Colon,
    Assign, // =

    Equals,    // ==
    NotEquals, // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    If,
    Else,
    Var,
    Const,
    Return,
    Public,
    Private,
    Virtual,
    Override,
    Static,

    // Type keywords
    KwVoid,
    KwBoolean,
    KwByte,
    KwString,
    KwInt8,
    KwInt16,
    KwInt32,
    KwInt64,
    KwUint8,
    KwUint16,
    KwUint32,
    KwUint64,
    KwFloat32,
    KwFloat64,
}

impl TokenKind {
    /// Whether the token is one of the function modifier keywords.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            TokenKind::Public
                | TokenKind::Private
                | TokenKind::Virtual
                | TokenKind::Override
                | TokenKind::Static
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\nkind: {},\ntext: {},\nline: {}}}",
            self.kind, self.text, self.line
        )
    }
}

impl Token {
    fn carries_text(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Identifier
                | TokenKind::Integer
                | TokenKind::Float
                | TokenKind::Unsigned
                | TokenKind::ByteLit
                | TokenKind::String
                | TokenKind::Boolean
        )
    }

    pub fn debug(&self) {
        if self.carries_text() {
            println!("{} ({})", self.kind, self.text);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
