use logos::{Lexer, Logos};

use crate::error::LexError;

/// The four lexical categories a formula is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Names of constants, functions and unit suffixes, such as `PI` or `mm`.
    Identifier,
    /// Double-quoted string literals with their escapes resolved.
    String,
    /// Unsigned numeric literals such as `42`, `1.5` or `2e-3`.
    Number,
    /// Punctuation and operator symbols, such as `(`, `,`, `+` or `<=`.
    Operator,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Identifier => "identifier",
            Self::String => "string",
            Self::Number => "number",
            Self::Operator => "operator",
        };
        f.write_str(name)
    }
}

/// A lexical token of a formula.
///
/// Tokens never contain whitespace. For strings, `text` holds the unescaped
/// contents without the surrounding quotes; for every other kind it is the
/// exact source slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical category.
    pub kind: TokenKind,
    /// The token text.
    pub text: String,
}

impl Token {
    /// Creates a token of the given kind.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }
}

/// Failure raised from inside the logos state machine.
#[derive(Debug, Clone, PartialEq, Default)]
enum LexFailure {
    #[default]
    Unrecognized,
    UnterminatedString(String),
}

/// Raw lexemes recognised by the logos state machine.
///
/// Compound operators are listed explicitly so that longest-match picks them
/// over their single-character prefixes; any other visible character becomes a
/// one-character operator.
#[derive(Logos, Debug, PartialEq)]
#[logos(error = LexFailure)]
#[logos(skip r"[ \t\r\n]+")]
enum Lexeme<'s> {
    /// Digits, an optional fraction and an optional lowercase exponent.
    #[regex(r"[0-9]+", lex_number)]
    Number(&'s str),
    /// `[a-zA-Z][a-zA-Z0-9_]*`
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Identifier,
    /// `"..."` with `\"` and `\\` escapes.
    #[token("\"", lex_string)]
    String(String),
    /// `<<`, `>>`, `==`, `&&`, `||`, `<=`, `>=`, `!=` or a single symbol.
    #[token("<<")]
    #[token(">>")]
    #[token("==")]
    #[token("&&")]
    #[token("||")]
    #[token("<=")]
    #[token(">=")]
    #[token("!=")]
    #[regex(r#"[^ \t\r\n0-9a-zA-Z"]"#)]
    Operator,
}

/// Extends a run of leading digits into a full number literal.
///
/// A single `.` followed by any digits is absorbed, then an exponent is
/// attempted: a lowercase `e`, an optional sign and at least one digit. When no
/// digit follows, the `e` and the sign are left for the next token.
fn lex_number<'s>(lex: &mut Lexer<'s, Lexeme<'s>>) -> &'s str {
    let rest = lex.remainder().as_bytes();

    let mut len = 0;
    if rest.first() == Some(&b'.') {
        len = 1 + rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
    }
    len += exponent_len(&rest[len..]);

    lex.bump(len);
    lex.slice()
}

/// Length of a well-formed exponent at the start of `rest`, or zero.
fn exponent_len(rest: &[u8]) -> usize {
    if rest.first() != Some(&b'e') {
        return 0;
    }
    let sign = usize::from(matches!(rest.get(1), Some(b'+' | b'-')));
    let digits = rest[1 + sign..].iter().take_while(|b| b.is_ascii_digit()).count();

    if digits == 0 { 0 } else { 1 + sign + digits }
}

/// Captures a string literal after its opening quote.
///
/// Only `\"` and `\\` are escapes; any other backslash sequence is copied
/// through verbatim, backslash included.
fn lex_string<'s>(lex: &mut Lexer<'s, Lexeme<'s>>) -> Result<String, LexFailure> {
    let mut text = String::new();
    let mut chars = lex.remainder().char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(i + 1);
                return Ok(text);
            },
            '\\' => match chars.next() {
                Some((_, '"')) => text.push('"'),
                Some((_, '\\')) => text.push('\\'),
                Some((_, other)) => {
                    text.push('\\');
                    text.push(other);
                },
                None => break,
            },
            other => text.push(other),
        }
    }

    lex.bump(lex.remainder().len());
    Err(LexFailure::UnterminatedString(text))
}

/// Length of the identifier run glued to the end of a number, e.g. the `mm`
/// in `12mm`.
fn suffix_len(rest: &str) -> usize {
    rest.bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count()
}

/// Splits formula text into tokens.
///
/// Whitespace separates tokens and is discarded. Whatever letters, digits or
/// underscores immediately follow a number become a separate identifier token,
/// which is how unit suffixes are attached (`1mm` is `1` followed by `mm`).
///
/// # Errors
/// Returns [`LexError::UnterminatedString`] when a string literal is still
/// open at the end of the input.
///
/// # Example
/// ```
/// use parametra::interpreter::lexer::{Token, TokenKind, tokenize};
///
/// let tokens = tokenize("2.5mm * 2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::new(TokenKind::Number, "2.5"),
///                 Token::new(TokenKind::Identifier, "mm"),
///                 Token::new(TokenKind::Operator, "*"),
///                 Token::new(TokenKind::Number, "2")]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        match lexeme {
            Ok(Lexeme::Number(text)) => {
                tokens.push(Token::new(TokenKind::Number, text));

                let suffix = suffix_len(lexer.remainder());
                if suffix > 0 {
                    tokens.push(Token::new(TokenKind::Identifier, &lexer.remainder()[..suffix]));
                    lexer.bump(suffix);
                }
            },
            Ok(Lexeme::Identifier) => tokens.push(Token::new(TokenKind::Identifier, lexer.slice())),
            Ok(Lexeme::String(text)) => tokens.push(Token::new(TokenKind::String, text)),
            Ok(Lexeme::Operator) | Err(LexFailure::Unrecognized) => {
                tokens.push(Token::new(TokenKind::Operator, lexer.slice()));
            },
            Err(LexFailure::UnterminatedString(partial)) => {
                return Err(LexError::UnterminatedString { partial });
            },
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(text: &str) -> Token {
        Token::new(TokenKind::Number, text)
    }

    fn ident(text: &str) -> Token {
        Token::new(TokenKind::Identifier, text)
    }

    fn op(text: &str) -> Token {
        Token::new(TokenKind::Operator, text)
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \t\r\n ").unwrap().is_empty());
    }

    #[test]
    fn exponents_need_a_digit() {
        assert_eq!(tokenize("1e").unwrap(), vec![number("1"), ident("e")]);
        assert_eq!(tokenize("1e2").unwrap(), vec![number("1e2")]);
        assert_eq!(tokenize("1.2e-3e4").unwrap(), vec![number("1.2e-3"), ident("e4")]);
        assert_eq!(tokenize("3e+").unwrap(), vec![number("3"), ident("e"), op("+")]);
    }

    #[test]
    fn uppercase_exponent_is_a_unit_suffix() {
        // Only a lowercase `e` starts an exponent.
        assert_eq!(tokenize("1E2").unwrap(), vec![number("1"), ident("E2")]);
    }

    #[test]
    fn single_decimal_point() {
        assert_eq!(tokenize("1.5.2").unwrap(), vec![number("1.5"), op("."), number("2")]);
        assert_eq!(tokenize("7.").unwrap(), vec![number("7.")]);
    }

    #[test]
    fn unit_suffix_without_separator() {
        assert_eq!(tokenize("1mm").unwrap(), vec![number("1"), ident("mm")]);
        assert_eq!(tokenize("2_x").unwrap(), vec![number("2"), ident("_x")]);
        assert_eq!(tokenize("1 mm").unwrap(), vec![number("1"), ident("mm")]);
    }

    #[test]
    fn identifiers_start_with_a_letter() {
        assert_eq!(tokenize("a_1 b2").unwrap(), vec![ident("a_1"), ident("b2")]);
        assert_eq!(tokenize("_a").unwrap(), vec![op("_"), ident("a")]);
    }

    #[test]
    fn string_escapes() {
        assert_eq!(tokenize(r#""foo\"""#).unwrap(),
                   vec![Token::new(TokenKind::String, "foo\"")]);
        assert_eq!(tokenize(r#""a\\b""#).unwrap(),
                   vec![Token::new(TokenKind::String, "a\\b")]);
        assert_eq!(tokenize(r#""a\nb""#).unwrap(),
                   vec![Token::new(TokenKind::String, "a\\nb")]);
    }

    #[test]
    fn unterminated_strings() {
        assert_eq!(tokenize(r#""foo\"#),
                   Err(LexError::UnterminatedString { partial: "foo".to_string() }));
        assert_eq!(tokenize(r#"1 + "bar"#),
                   Err(LexError::UnterminatedString { partial: "bar".to_string() }));
    }

    #[test]
    fn compound_operators() {
        assert_eq!(tokenize("<<>>==&&||<=>=!=").unwrap(),
                   vec![op("<<"), op(">>"), op("=="), op("&&"), op("||"), op("<="), op(">="), op("!=")]);
        assert_eq!(tokenize("a<b").unwrap(), vec![ident("a"), op("<"), ident("b")]);
        assert_eq!(tokenize("!x").unwrap(), vec![op("!"), ident("x")]);
        assert_eq!(tokenize("(),?:%^").unwrap(),
                   vec![op("("), op(")"), op(","), op("?"), op(":"), op("%"), op("^")]);
    }
}
