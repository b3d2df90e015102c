use winnow::combinator::{alt, fail, not, opt, preceded, terminated};
use winnow::error::ContextError;
use winnow::prelude::*;
use winnow::stream::{LocatingSlice, Location, Stream};
use winnow::token::{any, one_of, rest, take_till, take_until, take_while};

use crate::error::{ScanError, ScanErrorKind};
use crate::scanner::ScanOutput;
use crate::scanner::cursor::Cursor;
use crate::scanner::token::{
    FLOAT_SUFFIXES, INTEGER_SUFFIXES, MAX_IDENTIFIER_LEN, Span, Token, TokenKind, is_ident_continue, is_ident_start,
    is_reserved_word,
};

type Input<'a> = LocatingSlice<&'a str>;

/// Outcome of one dispatch step.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Token(TokenKind),
    /// Whitespace; consumed without producing anything.
    Layout,
    /// Consumed text that produces a diagnostic instead of a token.
    Error(ScanErrorKind),
}

/// `\n`, `\r`, `\r\n` and `\t` written out as two-character markers.
fn escape_marker<'a>(input: &mut Input<'a>) -> ModalResult<Step> {
    preceded(
        '\\',
        alt((
            'n'.value(TokenKind::LineBreak),
            ('r', "\\n").value(TokenKind::EndOfLine),
            'r'.value(TokenKind::CarriageReturn),
            't'.value(TokenKind::Tab),
        )),
    )
    .map(Step::Token)
    .parse_next(input)
}

fn layout<'a>(input: &mut Input<'a>) -> ModalResult<Step> {
    take_while(1.., |c: char| {
        c == ' ' || c == '\t' || c == '\r' || c == '\n'
    })
    .value(Step::Layout)
    .parse_next(input)
}

fn line_comment<'a>(input: &mut Input<'a>) -> ModalResult<Step> {
    ("//", take_till(0.., '\n'))
        .value(Step::Token(TokenKind::LineComment))
        .parse_next(input)
}

fn block_comment<'a>(input: &mut Input<'a>) -> ModalResult<Step> {
    "/*".parse_next(input)?;
    let closed = opt(terminated(take_until(0.., "*/"), "*/")).parse_next(input)?;
    if closed.is_some() {
        return Ok(Step::Token(TokenKind::BlockComment));
    }
    rest.void().parse_next(input)?;
    Ok(Step::Error(ScanErrorKind::UnterminatedBlockComment))
}

fn range<'a>(input: &mut Input<'a>) -> ModalResult<Step> {
    alt((
        "..=".value(TokenKind::InclusiveRange),
        "..".value(TokenKind::Range),
    ))
    .map(Step::Token)
    .parse_next(input)
}

/// First entry of `table` that prefixes the input, tried in table order.
fn suffix_in<'a>(
    table: &'static [&'static str],
) -> impl FnMut(&mut Input<'a>) -> ModalResult<&'a str> {
    move |input: &mut Input<'a>| {
        for suffix in table {
            if let Some(matched) = opt(*suffix).parse_next(input)? {
                return Ok(matched);
            }
        }
        fail(input)
    }
}

fn float_suffix<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    suffix_in(&FLOAT_SUFFIXES).parse_next(input)
}

fn integer_suffix<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    suffix_in(&INTEGER_SUFFIXES).parse_next(input)
}

/// A numeric type name standing on its own, e.g. the `i32` in `x: i32`.
///
/// `prev` is the source character just before the current position; the
/// suffix must not touch an identifier character on either side.
fn numeric_type<'a>(prev: Option<char>) -> impl FnMut(&mut Input<'a>) -> ModalResult<Step> {
    move |input: &mut Input<'a>| {
        if prev.is_some_and(is_ident_continue) {
            return fail(input);
        }
        terminated(
            alt((float_suffix, integer_suffix)),
            not(one_of(is_ident_continue)),
        )
        .value(Step::Token(TokenKind::NumericType))
        .parse_next(input)
    }
}

fn digits<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)
}

fn number<'a>(input: &mut Input<'a>) -> ModalResult<Step> {
    digits.parse_next(input)?;

    if opt(('.', digits)).parse_next(input)?.is_some() {
        let kind = match opt(float_suffix).parse_next(input)? {
            Some(_) => TokenKind::TypedDecimal,
            None => TokenKind::Decimal,
        };
        return Ok(Step::Token(kind));
    }

    let kind = match opt(integer_suffix).parse_next(input)? {
        Some(_) => TokenKind::TypedInteger,
        None => TokenKind::Integer,
    };
    Ok(Step::Token(kind))
}

fn separator<'a>(input: &mut Input<'a>) -> ModalResult<Step> {
    alt((
        ';'.value(TokenKind::EndOfStatement),
        ','.value(TokenKind::Comma),
        "::".value(TokenKind::ModuleSeparator),
        '.'.value(TokenKind::Dot),
    ))
    .map(Step::Token)
    .parse_next(input)
}

fn identifier_or_keyword<'a>(input: &mut Input<'a>) -> ModalResult<Step> {
    let word: &str = (one_of(is_ident_start), take_while(0.., is_ident_continue))
        .take()
        .parse_next(input)?;

    if word.chars().count() > MAX_IDENTIFIER_LEN {
        return Ok(Step::Error(ScanErrorKind::IdentifierTooLong {
            identifier: word.to_string(),
        }));
    }

    // `name!` is macro invocation syntax
    if opt('!').parse_next(input)?.is_some() {
        return Ok(Step::Token(TokenKind::Keyword));
    }

    let kind = if is_reserved_word(word) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };
    Ok(Step::Token(kind))
}

fn two_char_operator<'a>(input: &mut Input<'a>) -> ModalResult<Step> {
    alt((
        alt(("==", "!=", "<=", ">=")).value(TokenKind::Comparison),
        alt(("&&", "||")).value(TokenKind::Logical),
        alt(("++", "--")).value(TokenKind::IncrementDecrement),
        "->".value(TokenKind::Arrow),
    ))
    .map(Step::Token)
    .parse_next(input)
}

fn single_char_operator<'a>(input: &mut Input<'a>) -> ModalResult<Step> {
    alt((
        one_of(['<', '>']).value(TokenKind::Comparison),
        one_of(['+', '-', '*', '/', '%']).value(TokenKind::Arithmetic),
        one_of([':', '=']).value(TokenKind::Assignment),
        one_of(['&', '|', '^', '!']).value(TokenKind::Bitwise),
    ))
    .map(Step::Token)
    .parse_next(input)
}

fn delimiter<'a>(input: &mut Input<'a>) -> ModalResult<Step> {
    alt((
        '('.value(TokenKind::OpenParen),
        ')'.value(TokenKind::CloseParen),
        '{'.value(TokenKind::OpenBrace),
        '}'.value(TokenKind::CloseBrace),
        '['.value(TokenKind::OpenBracket),
        ']'.value(TokenKind::CloseBracket),
    ))
    .map(Step::Token)
    .parse_next(input)
}

fn string_literal<'a>(input: &mut Input<'a>) -> ModalResult<Step> {
    '"'.parse_next(input)?;
    loop {
        match opt(any).parse_next(input)? {
            Some('"') => return Ok(Step::Token(TokenKind::String)),
            // the escaped character is taken as-is, even a quote or newline
            Some('\\') => {
                opt(any).void().parse_next(input)?;
            }
            Some('\n') | None => return Ok(Step::Error(ScanErrorKind::UnterminatedString)),
            Some(_) => {}
        }
    }
}

/// Try every rule at the current position, highest priority first.
fn scan_step<'a>(input: &mut Input<'a>, prev: Option<char>) -> ModalResult<Step> {
    alt((
        escape_marker,
        layout,
        line_comment,
        block_comment,
        range,
        numeric_type(prev),
        number,
        separator,
        identifier_or_keyword,
        two_char_operator,
        single_char_operator,
        delimiter,
        string_literal,
    ))
    .parse_next(input)
}

/// Single-pass scanner over one source string.
pub struct Lexer<'a> {
    source: &'a str,
    input: Input<'a>,
    cursor: Cursor,
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            input: LocatingSlice::new(source),
            cursor: Cursor::new(),
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Scan the whole input. Errors never stop the scan.
    pub fn run(mut self) -> ScanOutput {
        while !self.input.is_empty() {
            let start = self.cursor.position();
            let offset = self.input.current_token_start();
            debug_assert_eq!(offset, self.cursor.offset());
            let prev = self.source[..offset].chars().next_back();
            let checkpoint = self.input.checkpoint();

            let step = (|input: &mut Input<'a>| scan_step(input, prev))
                .with_taken()
                .parse_next(&mut self.input);

            match step {
                Ok((step, text)) => {
                    self.cursor.bump_str(text);
                    let span = Span::new(offset, text.len());
                    match step {
                        Step::Token(kind) => self.tokens.push(Token::new(
                            kind,
                            text,
                            start.line,
                            start.column,
                            span,
                        )),
                        Step::Layout => {}
                        Step::Error(kind) => self.report(ScanError::new(kind, start, span)),
                    }
                }
                Err(_) => {
                    // Nothing matched: report the character and skip exactly it.
                    self.input.reset(&checkpoint);
                    let Ok(ch) = any::<_, ContextError>.parse_next(&mut self.input) else {
                        break;
                    };
                    self.cursor.bump(ch);
                    let span = Span::new(offset, ch.len_utf8());
                    self.report(ScanError::new(
                        ScanErrorKind::UnrecognizedCharacter { ch },
                        start,
                        span,
                    ));
                }
            }
        }

        tracing::debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            bytes = self.source.len(),
            "scan complete"
        );

        ScanOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn report(&mut self, error: ScanError) {
        tracing::trace!(line = error.line, column = error.column, "{}", error.kind);
        self.errors.push(error);
    }
}

/// Scan all tokens from source, collecting lexical errors alongside them.
pub fn scan_all(source: &str) -> ScanOutput {
    Lexer::new(source).run()
}
