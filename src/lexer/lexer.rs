use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<Option<Token>, Error>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

/// Lazy tokenizer: classifies one token at a time at the current offset.
///
/// Patterns are tried in declaration order and the first one matching at
/// the current offset wins, so longer operators must precede their
/// prefixes. Handlers that return `None` (whitespace, comments) consume
/// input without yielding a token.
#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    source: String,
    pos: usize,
    line: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            line: 1,
            patterns: vec![
                RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("//.*").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
                RegexPattern { regex: Regex::new("[0-9]+\\.[0-9]+").unwrap(), handler: float_handler },
                RegexPattern { regex: Regex::new("[0-9]+[uU]").unwrap(), handler: unsigned_handler },
                RegexPattern { regex: Regex::new("[0-9]+").unwrap(), handler: integer_handler },
                RegexPattern { regex: Regex::new(r#""(\\.|[^"\\])*""#).unwrap(), handler: string_handler },
                RegexPattern { regex: Regex::new(r"'(\\.|[^'\\])*'").unwrap(), handler: byte_handler },
                RegexPattern { regex: Regex::new("\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")},
                RegexPattern { regex: Regex::new("\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")},
                RegexPattern { regex: Regex::new("\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")},
                RegexPattern { regex: Regex::new("\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")},
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")},
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")},
                RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")},
                RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")},
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=")},
                RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")},
                RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<")},
                RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")},
                RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")},
                RegexPattern { regex: Regex::new("\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||")},
                RegexPattern { regex: Regex::new("&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&")},
                RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")},
                RegexPattern { regex: Regex::new(":").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")},
                RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")},
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")},
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")},
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")},
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*")},
                RegexPattern { regex: Regex::new("%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%")},
            ],
            source,
            file: file_name,
        }
    }

    /// Classifies and returns the next token, advancing past it. At end of
    /// input this keeps returning EOF tokens, so callers may poll freely.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        'scan: while !self.at_eof() {
            let patterns = self.patterns.clone();
            for pattern in patterns.iter() {
                let starts_here = pattern
                    .regex
                    .find(self.remainder())
                    .map(|found| found.start() == 0)
                    .unwrap_or(false);

                if starts_here {
                    match (pattern.handler)(self, &pattern.regex)? {
                        Some(token) => return Ok(token),
                        // Whitespace or comment: keep scanning.
                        None => continue 'scan,
                    }
                }
            }

            let error = match self.at() {
                '"' => ErrorImpl::UnterminatedString,
                '\'' => ErrorImpl::UnterminatedByteLiteral,
                other => ErrorImpl::UnrecognisedToken {
                    token: other.to_string(),
                },
            };
            return Err(Error::new(error, self.position()));
        }

        Ok(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), self.line))
    }

    /// Advances past text that cannot contain a line break.
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Advances past matched text, counting the line breaks inside it.
    pub fn advance_over(&mut self, text: &str) {
        self.line += text.matches('\n').count() as u32;
        self.pos += text.len();
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    pub fn position(&self) -> Position {
        Position(self.line, Rc::clone(&self.file))
    }

    fn match_here(&self, regex: &Regex) -> String {
        regex.find(self.remainder()).unwrap().as_str().to_string()
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let matched = lexer.match_here(regex);
    lexer.advance_over(&matched);
    Ok(None)
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let matched = lexer.match_here(regex);
    let line = lexer.line();
    lexer.advance_n(matched.len());

    let kind = RESERVED_LOOKUP
        .get(matched.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Ok(Some(MK_TOKEN!(kind, matched, line)))
}

fn integer_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let matched = lexer.match_here(regex);
    let line = lexer.line();
    lexer.advance_n(matched.len());

    Ok(Some(MK_TOKEN!(TokenKind::Integer, matched, line)))
}

fn float_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let matched = lexer.match_here(regex);
    let line = lexer.line();
    lexer.advance_n(matched.len());

    Ok(Some(MK_TOKEN!(TokenKind::Float, matched, line)))
}

fn unsigned_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let matched = lexer.match_here(regex);
    let line = lexer.line();
    lexer.advance_n(matched.len());

    // Strip the trailing u/U suffix; the parser only needs the digits.
    let digits = String::from(&matched[..matched.len() - 1]);

    Ok(Some(MK_TOKEN!(TokenKind::Unsigned, digits, line)))
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let matched = lexer.match_here(regex);
    let line = lexer.line();
    lexer.advance_over(&matched);

    let raw = &matched[1..matched.len() - 1];

    let mut result = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next_ch) = chars.peek() {
                match next_ch {
                    'n' => {
                        result.push('\n');
                        chars.next();
                    }
                    't' => {
                        result.push('\t');
                        chars.next();
                    }
                    'r' => {
                        result.push('\r');
                        chars.next();
                    }
                    '\\' => {
                        result.push('\\');
                        chars.next();
                    }
                    '"' => {
                        result.push('"');
                        chars.next();
                    }
                    '0' => {
                        result.push('\0');
                        chars.next();
                    }
                    'x' => {
                        let mut hex = String::new();
                        chars.next();

                        for _ in 0..2 {
                            if let Some(ch) = chars.peek() {
                                if ch.is_ascii_hexdigit() {
                                    hex.push(*ch);
                                    chars.next();
                                } else {
                                    break;
                                }
                            }
                        }

                        match u8::from_str_radix(&hex, 16) {
                            Ok(byte) => result.push(byte as char),
                            Err(_) => {
                                return Err(Error::new(
                                    ErrorImpl::UnrecognisedToken {
                                        token: format!("\\x{}", hex),
                                    },
                                    Position(line, Rc::clone(&lexer.file)),
                                ))
                            }
                        }
                    }
                    _ => {
                        result.push(ch); // Keep the backslash
                    }
                }
            } else {
                result.push(ch); // Keep the lone backslash
            }
        } else {
            result.push(ch);
        }
    }

    Ok(Some(MK_TOKEN!(TokenKind::String, result, line)))
}

fn byte_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let matched = lexer.match_here(regex);
    let line = lexer.line();
    lexer.advance_over(&matched);

    // Quotes and any escape stay in the lexeme; the parser interprets it.
    Ok(Some(MK_TOKEN!(TokenKind::ByteLit, matched, line)))
}

/// Stateful cursor over a lexer: the current token plus one token of
/// lookahead. This is the parser's view of the input.
pub struct TokenStream {
    lexer: Lexer,
    current: Token,
    peeked: Option<Token>,
}

impl TokenStream {
    pub fn new(mut lexer: Lexer) -> Result<TokenStream, Error> {
        let current = lexer.next_token()?;
        Ok(TokenStream {
            lexer,
            current,
            peeked: None,
        })
    }

    /// The token the stream is positioned on.
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Consumes the current token and returns it.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = match self.peeked.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// The token after the current one, without consuming anything.
    pub fn peek(&mut self) -> Result<&Token, Error> {
        if self.peeked.is_none() {
            self.peeked = Some(self.lexer.next_token()?);
        }
        Ok(self.peeked.as_ref().unwrap())
    }

    pub fn file(&self) -> &Rc<String> {
        self.lexer.file()
    }
}

/// Opens a token stream over the given source text. The first token is
/// pulled eagerly, so a lex error at the very start surfaces here.
pub fn tokenize(source: String, file: Option<String>) -> Result<TokenStream, Error> {
    TokenStream::new(Lexer::new(source, file))
}

/// Tokenizes the whole input up front. Used by the token-dump mode and by
/// tests; the parser itself pulls lazily through [`tokenize`].
pub fn tokenize_all(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
