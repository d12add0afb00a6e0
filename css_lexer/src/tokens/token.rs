//! Token vocabulary produced by the stylesheet lexer

use serde::Serialize;
use std::fmt;

/// Kind of a lexed token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Scan failed; the token value holds the error message
    Error,
    /// Input exhausted without error
    EndOfStream,
    /// Run of plain text between comments
    Text,
    /// Reserved; no state currently emits it
    Space,
    /// A complete `/* ... */` block, delimiters included
    Comment,
}

impl TokenKind {
    /// True for the kinds after which the producer never emits again
    pub fn is_terminal(&self) -> bool {
        matches!(self, TokenKind::Error | TokenKind::EndOfStream)
    }

    /// Kinds that carry source text rather than a signal
    pub fn carries_source(&self) -> bool {
        matches!(self, TokenKind::Text | TokenKind::Space | TokenKind::Comment)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Error => "ERROR",
            TokenKind::EndOfStream => "EOF",
            TokenKind::Text => "TEXT",
            TokenKind::Space => "SPACE",
            TokenKind::Comment => "COMMENT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed, positioned slice of the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset where the token begins
    pub pos: usize,
    /// Exact source text, or the message for `Error` tokens
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, pos: usize, value: impl Into<String>) -> Self {
        Self {
            kind,
            pos,
            value: value.into(),
        }
    }

    pub fn end_of_stream(pos: usize) -> Self {
        Self::new(TokenKind::EndOfStream, pos, String::new())
    }

    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    /// Byte offset one past the token's source text. Signal tokens are empty.
    pub fn end(&self) -> usize {
        if self.kind.carries_source() {
            self.pos + self.value.len()
        } else {
            self.pos
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}: {:?}", self.kind, self.pos, self.value)
    }
}
