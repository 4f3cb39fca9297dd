//! Utility macros for the compiler.
//!
//! This module defines helper macros used throughout the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for simple tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's lexeme
/// * `$line` - The 1-based line the token starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $line:expr) => {
        Token {
            kind: $kind,
            text: $text,
            line: $line,
        }
    };
}

/// Creates a default lexer handler for simple fixed-text tokens.
///
/// Generates a handler function that yields a token with the given kind
/// and advances the lexer position by the token's length. Only suitable
/// for lexemes that cannot contain a line break.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$text` - The literal lexeme (used for length calculation)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $text:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| -> Result<Option<Token>, Error> {
            let token = MK_TOKEN!($kind, String::from($text), lexer.line());
            lexer.advance_n($text.len());
            Ok(Some(token))
        }
    };
}
