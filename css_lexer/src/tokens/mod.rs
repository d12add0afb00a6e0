//! Token vocabulary and the streaming consumer handle
//!
//! - [`Token`] / [`TokenKind`]: what the lexer produces
//! - [`TokenStream`]: pulls tokens one at a time from a producer thread

pub mod token;
pub mod token_stream;

pub use token::{Token, TokenKind};
pub use token_stream::TokenStream;

/// Start lexing `input` on a producer thread
pub fn lex(name: impl Into<String>, input: impl Into<String>) -> std::io::Result<TokenStream> {
    TokenStream::new(name, input)
}
