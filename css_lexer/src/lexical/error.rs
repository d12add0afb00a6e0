//! Lexical failures. Every variant is terminal for the whole scan.

use crate::logging::{codes, Code};
use crate::tokens::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    /// A `/` that does not open a `/*` comment
    #[error("invalid comment")]
    InvalidComment,

    #[error("unclosed comment")]
    UnclosedComment,

    /// The producer went away without delivering a terminal token
    #[error("lexer terminated unexpectedly")]
    ProducerTerminated,
}

impl LexerError {
    pub fn error_code(&self) -> Code {
        match self {
            LexerError::InvalidComment => codes::lexical::INVALID_COMMENT,
            LexerError::UnclosedComment => codes::lexical::UNCLOSED_COMMENT,
            LexerError::ProducerTerminated => codes::lexical::PRODUCER_TERMINATED,
        }
    }
}

/// A lexer failure together with the byte offset of the token that failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error} at byte {pos}")]
pub struct ScanError {
    #[source]
    pub error: LexerError,
    pub pos: usize,
}

impl ScanError {
    pub fn new(error: LexerError, pos: usize) -> Self {
        Self { error, pos }
    }

    pub fn error_code(&self) -> Code {
        self.error.error_code()
    }

    /// The `Error` token a consumer of the raw token stream sees
    pub fn to_token(&self) -> Token {
        Token::new(TokenKind::Error, self.pos, self.error.to_string())
    }
}
