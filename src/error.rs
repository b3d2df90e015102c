use std::fmt;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use thiserror::Error;

use crate::scanner::cursor::Position;
use crate::scanner::token::{MAX_IDENTIFIER_LEN, Span};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanErrorKind {
    #[error("unterminated block comment")]
    UnterminatedBlockComment,

    #[error("unterminated string")]
    UnterminatedString,

    #[error("identifier too long: '{identifier}'")]
    IdentifierTooLong { identifier: String },

    #[error("unrecognized token '{ch}'")]
    UnrecognizedCharacter { ch: char },
}

impl ScanErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnterminatedBlockComment => "lexer::unterminated_block_comment",
            Self::UnterminatedString => "lexer::unterminated_string",
            Self::IdentifierTooLong { .. } => "lexer::identifier_too_long",
            Self::UnrecognizedCharacter { .. } => "lexer::unrecognized_character",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::UnterminatedBlockComment => "comment starts here",
            Self::UnterminatedString => "string starts here",
            Self::IdentifierTooLong { .. } => "this identifier",
            Self::UnrecognizedCharacter { .. } => "here",
        }
    }

    fn help(&self) -> Option<String> {
        match self {
            Self::UnterminatedBlockComment => Some("close the comment with '*/'".to_string()),
            Self::UnterminatedString => {
                Some("strings must be closed with '\"' on the line they start".to_string())
            }
            Self::IdentifierTooLong { .. } => Some(format!(
                "identifiers are limited to {MAX_IDENTIFIER_LEN} characters"
            )),
            Self::UnrecognizedCharacter { .. } => None,
        }
    }
}

/// A lexical error. Scanning continues past every one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} (line {line}, column {column})")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    /// Where the offending construct starts.
    pub line: usize,
    pub column: usize,
    /// Text consumed while the error was detected.
    pub span: Span,
}

impl ScanError {
    pub fn new(kind: ScanErrorKind, at: Position, span: Span) -> Self {
        Self {
            kind,
            line: at.line,
            column: at.column,
            span,
        }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Attach source code for fancy miette diagnostics
    pub fn with_source_code(&self, name: impl AsRef<str>, source: impl Into<String>) -> ScanReport {
        ScanReport {
            error: self.clone(),
            help: self.kind.help(),
            src: NamedSource::new(name, source.into()),
        }
    }
}

/// A [`ScanError`] bundled with its source, renderable by miette.
#[derive(Error, Debug)]
#[error("{}", .error.kind)]
pub struct ScanReport {
    error: ScanError,
    help: Option<String>,
    src: NamedSource<String>,
}

impl ScanReport {
    pub fn error(&self) -> &ScanError {
        &self.error
    }
}

impl Diagnostic for ScanReport {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.error.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(
            Some(self.error.kind.label().to_string()),
            self.error.span,
        );
        Some(Box::new(std::iter::once(label)))
    }
}
