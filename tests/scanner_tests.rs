use rustlike_lexer::scanner::token::{Token, TokenKind};
use rustlike_lexer::{ScanErrorKind, scan};

fn pairs(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|t| (t.kind, t.lexeme.as_str())).collect()
}

const CORPUS: &[&str] = &[
    "",
    "let x: i32 = 5;",
    "let s = \"abc",
    "/* unterminated",
    "0..=10",
    "averylongidentifiername",
    "a -> b",
    "@",
    "\\r\\n\\t\\n\\",
    "fn main() {\n    println!(\"hola\\n\");\n}\n",
    "x = 1.5f32 + 2u64 - 3.0 * 4 / 5 % 6;",
    "\"a\\\"b\" 'c' `d` $e",
    "/**/ // tail\r\n::: .. . ... ..=",
    "año Ñu __x__ x_1 9lives",
    "if a <= b || c >= d && !e { f++; g--; }",
    "€ 漢字 🦀 \u{0}",
    "\"line one\\\nline two\"\n\"open\nnext",
    "[1, 2, 3][0]",
];

#[test]
fn type_annotation_example() {
    let output = scan("let x: i32 = 5;");
    assert!(!output.has_errors());
    assert_eq!(
        pairs(&output.tokens),
        vec![
            (TokenKind::Keyword, "let"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Assignment, ":"),
            (TokenKind::NumericType, "i32"),
            (TokenKind::Assignment, "="),
            (TokenKind::Integer, "5"),
            (TokenKind::EndOfStatement, ";"),
        ]
    );
}

#[test]
fn unterminated_string_example() {
    let output = scan("let s = \"abc");
    assert_eq!(
        pairs(&output.tokens),
        vec![
            (TokenKind::Keyword, "let"),
            (TokenKind::Identifier, "s"),
            (TokenKind::Assignment, "="),
        ]
    );
    assert_eq!(output.errors.len(), 1);
    let err = &output.errors[0];
    assert_eq!(err.kind, ScanErrorKind::UnterminatedString);
    assert_eq!((err.line, err.column), (1, 9));
}

#[test]
fn unterminated_block_comment_example() {
    let output = scan("/* unterminated");
    assert!(output.tokens.is_empty());
    assert_eq!(output.errors.len(), 1);
    let err = &output.errors[0];
    assert_eq!(err.kind, ScanErrorKind::UnterminatedBlockComment);
    assert_eq!((err.line, err.column), (1, 1));
}

#[test]
fn inclusive_range_example() {
    let output = scan("0..=10");
    assert_eq!(
        pairs(&output.tokens),
        vec![
            (TokenKind::Integer, "0"),
            (TokenKind::InclusiveRange, "..="),
            (TokenKind::Integer, "10"),
        ]
    );
}

#[test]
fn overlong_identifier_example() {
    let output = scan("averylongidentifiername");
    assert!(output.tokens.is_empty());
    assert_eq!(output.errors.len(), 1);
    assert!(matches!(
        output.errors[0].kind,
        ScanErrorKind::IdentifierTooLong { .. }
    ));
}

#[test]
fn arrow_example() {
    let output = scan("a -> b");
    assert_eq!(
        pairs(&output.tokens),
        vec![
            (TokenKind::Identifier, "a"),
            (TokenKind::Arrow, "->"),
            (TokenKind::Identifier, "b"),
        ]
    );
}

#[test]
fn unrecognized_character_example() {
    let output = scan("@");
    assert!(output.tokens.is_empty());
    assert_eq!(output.errors.len(), 1);
    assert_eq!(
        output.errors[0].kind,
        ScanErrorKind::UnrecognizedCharacter { ch: '@' }
    );
    assert!(output.errors[0].to_string().contains('@'));
}

#[test]
fn escape_marker_sequence() {
    let output = scan("\\r\\n\\t\\n\\");
    assert_eq!(
        pairs(&output.tokens),
        vec![
            (TokenKind::EndOfLine, "\\r\\n"),
            (TokenKind::Tab, "\\t"),
            (TokenKind::LineBreak, "\\n"),
        ]
    );
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].column, 9);
}

#[test]
fn sample_program_scans_cleanly() {
    let source = include_str!("../fixtures/sample.rs");
    let output = scan(source);
    assert!(!output.has_errors(), "errors: {:?}", output.errors);

    let find = |lexeme: &str| {
        output
            .tokens
            .iter()
            .find(|t| t.lexeme == lexeme)
            .unwrap_or_else(|| panic!("no token {lexeme:?}"))
    };
    assert_eq!(find("// Demo program").kind, TokenKind::LineComment);
    assert_eq!(find("/* block\n   comment */").kind, TokenKind::BlockComment);
    assert_eq!(find("::").kind, TokenKind::ModuleSeparator);
    assert_eq!(find("->").kind, TokenKind::Arrow);
    assert_eq!(find("..=").kind, TokenKind::InclusiveRange);
    assert_eq!(find("2.5f64").kind, TokenKind::TypedDecimal);
    assert_eq!(find("255u8").kind, TokenKind::TypedInteger);
    assert_eq!(find("println!").kind, TokenKind::Keyword);
    assert_eq!(find("año").kind, TokenKind::Identifier);
    assert_eq!(find("--").kind, TokenKind::IncrementDecrement);
    assert_eq!(find("&&").kind, TokenKind::Logical);

    let string = find("\"línea\\t\\\"dos\\\"\"");
    assert_eq!(string.kind, TokenKind::String);
    assert_eq!((string.line, string.column), (14, 15));

    let pub_kw = find("pub");
    assert_eq!((pub_kw.line, pub_kw.column), (6, 1));
}

#[test]
fn error_fixture_reports_in_order() {
    let source = include_str!("../fixtures/errors.rs");
    let output = scan(source);
    let errors: Vec<(String, usize, usize)> = output
        .errors
        .iter()
        .map(|e| (e.message(), e.line, e.column))
        .collect();
    assert_eq!(
        errors,
        vec![
            (
                "identifier too long: 'identificadormuylargo'".to_string(),
                1,
                5
            ),
            ("unrecognized token '@'".to_string(), 2, 9),
            ("unterminated string".to_string(), 3, 9),
            ("unterminated block comment".to_string(), 4, 1),
        ]
    );
    assert_eq!(output.tokens.len(), 11);
}

#[test]
fn scanning_is_idempotent() {
    for source in CORPUS {
        assert_eq!(scan(source), scan(source), "{source:?}");
    }
}

#[test]
fn every_corpus_entry_terminates_and_stays_within_input() {
    for source in CORPUS {
        let output = scan(source);
        let consumed: usize = output.tokens.iter().map(|t| t.lexeme.chars().count()).sum();
        assert!(consumed <= source.chars().count(), "overconsumed {source:?}");
        for token in &output.tokens {
            assert!(!token.lexeme.is_empty());
            assert_eq!(&source[token.span.offset..token.span.end()], token.lexeme);
        }
    }
}

/// Position reached after reading `lexeme` starting at (`line`, `column`).
fn end_position(token: &Token) -> (usize, usize) {
    let mut line = token.line;
    let mut column = token.column;
    for c in token.lexeme.chars() {
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

#[test]
fn token_positions_are_monotonic() {
    for source in CORPUS {
        let output = scan(source);
        for pair in output.tokens.windows(2) {
            let end = end_position(&pair[0]);
            let next = (pair[1].line, pair[1].column);
            assert!(next >= end, "{source:?}: {:?} overlaps {:?}", pair[1], pair[0]);
        }
    }
}

#[test]
fn error_positions_are_monotonic() {
    for source in CORPUS {
        let output = scan(source);
        for pair in output.errors.windows(2) {
            assert!(
                (pair[1].line, pair[1].column) > (pair[0].line, pair[0].column),
                "{source:?}: {:?}",
                output.errors
            );
        }
    }
}

#[test]
fn scans_run_independently_across_threads() {
    let expected: Vec<_> = CORPUS.iter().map(|s| scan(s)).collect();
    let handles: Vec<_> = CORPUS
        .iter()
        .map(|s| std::thread::spawn(move || scan(s)))
        .collect();
    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().expect("scan thread panicked"), expected);
    }
}
