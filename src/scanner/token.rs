use std::fmt;

use serde::Serialize;

/// Identifiers longer than this many characters are rejected.
pub const MAX_IDENTIFIER_LEN: usize = 15;

pub const FLOAT_SUFFIXES: [&str; 2] = ["f32", "f64"];

pub const INTEGER_SUFFIXES: [&str; 12] = [
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

pub const RESERVED_WORDS: [&str; 35] = [
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
    "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use",
    "where", "while",
];

/// Closed set of token categories. The display form is the label shown in
/// token listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::EnumIter)]
#[serde(into = "String")]
pub enum TokenKind {
    // Escape markers
    #[strum(serialize = "LINE BREAK")]
    LineBreak,
    #[strum(serialize = "CARRIAGE RETURN")]
    CarriageReturn,
    #[strum(serialize = "END OF LINE")]
    EndOfLine,
    #[strum(serialize = "TAB")]
    Tab,

    // Comments
    #[strum(serialize = "LINE COMMENT")]
    LineComment,
    #[strum(serialize = "BLOCK COMMENT")]
    BlockComment,

    // Literals and names
    #[strum(serialize = "NUMERIC TYPE")]
    NumericType,
    #[strum(serialize = "TYPED DECIMAL")]
    TypedDecimal,
    #[strum(serialize = "DECIMAL")]
    Decimal,
    #[strum(serialize = "TYPED INTEGER")]
    TypedInteger,
    #[strum(serialize = "INTEGER")]
    Integer,
    #[strum(serialize = "STRING")]
    String,
    /// A reserved word, or any identifier directly followed by `!`.
    #[strum(serialize = "KEYWORD")]
    Keyword,
    #[strum(serialize = "IDENTIFIER")]
    Identifier,

    // Separators
    #[strum(serialize = "END OF STATEMENT")]
    EndOfStatement,
    #[strum(serialize = "LOGICAL SEPARATOR")]
    Comma,
    #[strum(serialize = "MODULE SEPARATOR")]
    ModuleSeparator,
    #[strum(serialize = "DOT OPERATOR")]
    Dot,
    #[strum(serialize = "INCLUSIVE RANGE")]
    InclusiveRange,
    #[strum(serialize = "RANGE")]
    Range,

    // Operators
    #[strum(serialize = "ARITHMETIC OPERATOR")]
    Arithmetic,
    #[strum(serialize = "COMPARISON OPERATOR")]
    Comparison,
    #[strum(serialize = "LOGICAL OPERATOR")]
    Logical,
    #[strum(serialize = "INCREMENT/DECREMENT OPERATOR")]
    IncrementDecrement,
    /// `=` and, for lack of a dedicated separator, a lone `:`.
    #[strum(serialize = "ASSIGNMENT OPERATOR")]
    Assignment,
    #[strum(serialize = "BITWISE OPERATOR")]
    Bitwise,
    #[strum(serialize = "ARROW OPERATOR")]
    Arrow,

    // Delimiters
    #[strum(serialize = "OPEN PARENTHESIS")]
    OpenParen,
    #[strum(serialize = "CLOSE PARENTHESIS")]
    CloseParen,
    #[strum(serialize = "OPEN BRACE")]
    OpenBrace,
    #[strum(serialize = "CLOSE BRACE")]
    CloseBrace,
    #[strum(serialize = "OPEN BRACKET")]
    OpenBracket,
    #[strum(serialize = "CLOSE BRACKET")]
    CloseBracket,
}

impl From<TokenKind> for String {
    fn from(kind: TokenKind) -> Self {
        kind.to_string()
    }
}

/// Byte range of a lexeme in the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.offset.into(), span.len)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// 1-based line of the first character.
    pub line: usize,
    /// 1-based column of the first character.
    pub column: usize,
    #[serde(skip)]
    pub span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        line: usize,
        column: usize,
        span: Span,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' @{}:{}",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

/// Letters that may start an identifier: ASCII letters, `_`, and the
/// accented vowels and `ñ` of Latin-1.
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || "ÁÉÍÓÚÜÑáéíóúüñ".contains(c)
}

pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}
